//! Mock Interview - a terminal client for timed practice interviews
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod flows;
pub mod input;
pub mod logging;
pub mod models;
pub mod monitor;
pub mod report;
pub mod scheduler;
pub mod terminal;
pub mod traits;
pub mod ui;
