//! Color theme constants for the interview UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

use crate::models::ScoreBand;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused field
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Accent color for titles and highlights
pub const COLOR_ACCENT: Color = Color::White;

/// Brand color used in the header
pub const COLOR_HEADER: Color = Color::Rgb(0, 122, 204);

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Progress gauge fill
pub const COLOR_PROGRESS: Color = Color::Rgb(0, 122, 204);

/// Inline validation and request errors
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Connection Badge
// ============================================================================

pub const COLOR_CONNECTED: Color = Color::Rgb(4, 181, 117);
pub const COLOR_DISCONNECTED: Color = Color::Red;
pub const COLOR_CHECKING: Color = Color::Yellow;

// ============================================================================
// Countdown and Scores
// ============================================================================

/// Countdown under one minute
pub const COLOR_TIMER_LOW: Color = Color::Red;

pub const COLOR_SCORE_STRONG: Color = Color::Rgb(4, 181, 117);
pub const COLOR_SCORE_FAIR: Color = Color::Yellow;
pub const COLOR_SCORE_WEAK: Color = Color::Red;

pub fn score_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Strong => COLOR_SCORE_STRONG,
        ScoreBand::Fair => COLOR_SCORE_FAIR,
        ScoreBand::Weak => COLOR_SCORE_WEAK,
    }
}
