//! Application state and logic for the TUI.
//!
//! This module contains the view shell:
//! - [`App`] - Current view, connection monitor and background tasks
//! - [`Screen`] / [`View`] - Which flow owns the screen
//! - [`AppMessage`] - Messages for async communication
//!
//! Flows never touch the network. The shell runs their commands on tokio
//! tasks (see `actions`) and feeds the completions back through
//! [`App::handle_message`].

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, View};

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::flows::{ResultsFlow, SessionFlow, SetupFlow};
use crate::monitor::{self, ConnectionMonitor};
use crate::scheduler::{FirstTick, ScheduledTask};

/// Period of the per-question countdown.
const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Represents the state of the application
pub struct App {
    /// Startup configuration
    pub config: AppConfig,
    /// Backend client shared by every flow
    api: ApiClient,
    /// Active flow
    view: View,
    /// Connection badge state
    pub monitor: ConnectionMonitor,
    /// Id of the active flow; bumped on every view change
    flow_id: u64,
    /// Outstanding requests of the active flow
    pending: Vec<JoinHandle<()>>,
    /// Countdown of the question on screen, with its index
    countdown: Option<(usize, ScheduledTask)>,
    /// Health probe schedule
    health: Option<ScheduledTask>,
    /// Transient status line (export results)
    pub notice: Option<String>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Animation tick counter (spinner)
    pub tick_count: u64,
    /// Channel sender for async messages
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Channel receiver; taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen())
            .field("flow_id", &self.flow_id)
            .field("pending", &self.pending.len())
            .field("monitor", &self.monitor)
            .finish()
    }
}

impl App {
    /// Create the app on the setup screen. No task is started yet.
    pub fn new(config: AppConfig, api: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            config,
            api,
            view: View::default(),
            monitor: ConnectionMonitor::new(),
            flow_id: 1,
            pending: Vec::new(),
            countdown: None,
            health: None,
            notice: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Start the health probe. Must run inside a tokio runtime.
    pub fn start_background(&mut self) {
        let tx = self.message_tx.clone();
        let task = monitor::schedule(
            self.api.clone(),
            self.config.health_check_interval,
            move |connected, at| tx.send(AppMessage::HealthChecked { connected, at }).is_ok(),
        );
        self.health = Some(task);
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn flow_id(&self) -> u64 {
        self.flow_id
    }

    pub fn setup(&self) -> Option<&SetupFlow> {
        match &self.view {
            View::Setup(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn setup_mut(&mut self) -> Option<&mut SetupFlow> {
        match &mut self.view {
            View::Setup(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&SessionFlow> {
        match &self.view {
            View::Interview(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut SessionFlow> {
        match &mut self.view {
            View::Interview(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsFlow> {
        match &self.view {
            View::Results(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn results_mut(&mut self) -> Option<&mut ResultsFlow> {
        match &mut self.view {
            View::Results(flow) => Some(flow),
            _ => None,
        }
    }

    /// Question index whose countdown is running, if any.
    pub fn countdown_index(&self) -> Option<usize> {
        self.countdown
            .as_ref()
            .filter(|(_, task)| task.is_active())
            .map(|(index, _)| *index)
    }

    pub fn is_health_check_active(&self) -> bool {
        self.health.as_ref().is_some_and(ScheduledTask::is_active)
    }

    /// Number of requests still running for the active flow.
    pub fn pending_requests(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Redraws only while something is spinning.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.view.is_busy() {
            self.mark_dirty();
        }
    }

    /// Stop every background task and flag the main loop to exit.
    pub fn quit(&mut self) {
        tracing::info!("Shutting down");
        self.teardown();
        if let Some(mut health) = self.health.take() {
            health.cancel();
        }
        self.should_quit = true;
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Receive and apply the next message, for callers that did not take
    /// the receiver. Returns `false` once the channel is unavailable.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(rx) = self.message_rx.as_mut() else {
            return false;
        };
        match rx.recv().await {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }

    /// Replace the active flow, discarding everything the old one started.
    fn enter_view(&mut self, view: View) {
        self.teardown();
        self.flow_id += 1;
        tracing::debug!("Entering {:?} (flow {})", view.screen(), self.flow_id);
        self.view = view;
        self.notice = None;
        self.sync_countdown();
        self.mark_dirty();
    }

    /// Abort outstanding requests and the countdown of the active flow.
    fn teardown(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        if let Some((_, mut task)) = self.countdown.take() {
            task.cancel();
        }
    }

    /// Run `work` for the active flow and post its message when it is done.
    fn spawn<F>(&mut self, work: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        self.pending.retain(|handle| !handle.is_finished());
        let tx = self.message_tx.clone();
        self.pending.push(tokio::spawn(async move {
            let msg = work.await;
            let _ = tx.send(msg);
        }));
    }

    /// Make the countdown match the session state: running for the question
    /// on screen, stopped otherwise.
    fn sync_countdown(&mut self) {
        let target = self.session().and_then(SessionFlow::countdown_target);
        if self.countdown.as_ref().map(|(index, _)| *index) == target {
            return;
        }
        if let Some((_, mut task)) = self.countdown.take() {
            task.cancel();
        }
        if let Some(question_index) = target {
            let tx = self.message_tx.clone();
            let flow_id = self.flow_id;
            let task = ScheduledTask::start(
                "countdown",
                COUNTDOWN_PERIOD,
                FirstTick::AfterPeriod,
                move || {
                    tx.send(AppMessage::CountdownTick {
                        flow_id,
                        question_index,
                    })
                    .is_ok()
                },
            );
            self.countdown = Some((question_index, task));
        }
    }
}
