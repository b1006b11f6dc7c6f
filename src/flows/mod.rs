//! View-level state machines.
//!
//! Each flow owns its state exclusively. Actions return commands for the
//! shell to execute; completions are fed back through `on_*` methods.

pub mod results;
pub mod session;
pub mod setup;

pub use results::{FeedbackReport, QuestionReport, ResultsCommand, ResultsFlow, ResultsStatus};
pub use session::{format_time, SessionCommand, SessionFlow, SessionOutcome, SessionPhase};
pub use setup::{start_interview, SetupCommand, SetupField, SetupFlow, SetupStatus};
