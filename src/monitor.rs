//! Backend connection monitor.
//!
//! Probes `GET /api/health` right away and then on a fixed period, keeping a
//! tri-state status for the connection badge. Purely observational: probe
//! failures never reach the interview flows.

use std::time::Duration;

use chrono::{DateTime, Local, Utc};

use crate::api::ApiClient;
use crate::scheduler::{FirstTick, ScheduledTask};

/// Connection status shown in the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Checking => "Checking Connection...",
            ConnectionStatus::Connected => "Backend Connected",
            ConnectionStatus::Disconnected => "Backend Disconnected",
        }
    }
}

/// State of the connection badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionMonitor {
    status: ConnectionStatus,
    last_checked: Option<DateTime<Utc>>,
}

impl ConnectionMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        self.last_checked
    }

    /// Record the outcome of one probe. The timestamp is kept either way.
    pub fn record(&mut self, connected: bool, at: DateTime<Utc>) {
        let status = if connected {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        };
        if status != self.status {
            tracing::info!("Backend connection: {}", status.label());
        }
        self.status = status;
        self.last_checked = Some(at);
    }

    /// Local wall-clock time of the last probe, e.g. `14:03:27`.
    pub fn last_checked_label(&self) -> Option<String> {
        self.last_checked
            .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
    }
}

/// Run one health probe. Any failure counts as disconnected.
pub async fn probe(api: &ApiClient) -> bool {
    match api.health_check().await {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!("Health check failed [{}]: {}", err.error_code(), err);
            false
        }
    }
}

/// Start probing on `interval`, first probe immediately.
///
/// `report` receives every result; returning `false` from it stops the
/// schedule (e.g. when the receiving side is gone).
pub fn schedule<F>(api: ApiClient, interval: Duration, report: F) -> ScheduledTask
where
    F: Fn(bool, DateTime<Utc>) -> bool + Send + Sync + 'static,
{
    let report = std::sync::Arc::new(report);
    ScheduledTask::start_async("health-check", interval, FirstTick::Immediate, move || {
        let api = api.clone();
        let report = report.clone();
        async move {
            let connected = probe(&api).await;
            report(connected, Utc::now())
        }
    })
}
