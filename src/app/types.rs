//! Type definitions for the view shell.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`View`] - The active flow and its state

use crate::flows::{ResultsFlow, SessionFlow, SetupFlow};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Setup,
    Interview,
    Results,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Setup => "Interview Setup",
            Screen::Interview => "Interview",
            Screen::Results => "Interview Results",
        }
    }
}

/// The flow that owns the screen. Exactly one exists at a time.
#[derive(Debug, Clone)]
pub enum View {
    Setup(SetupFlow),
    Interview(SessionFlow),
    Results(ResultsFlow),
}

impl Default for View {
    fn default() -> Self {
        View::Setup(SetupFlow::new())
    }
}

impl View {
    pub fn screen(&self) -> Screen {
        match self {
            View::Setup(_) => Screen::Setup,
            View::Interview(_) => Screen::Interview,
            View::Results(_) => Screen::Results,
        }
    }

    /// Whether the flow is waiting on the backend.
    pub fn is_busy(&self) -> bool {
        match self {
            View::Setup(flow) => flow.is_busy(),
            View::Interview(flow) => flow.is_busy(),
            View::Results(flow) => flow.is_loading(),
        }
    }
}
