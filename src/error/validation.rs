//! Local input validation failures.
//!
//! These never reach the network: the offending action is rejected and the
//! message is shown inline.

/// Rejected user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Setup form submitted without a name or a job role.
    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    /// Answer submitted with an empty or whitespace-only draft.
    #[error("Please provide an answer before proceeding.")]
    EmptyAnswer,
}
