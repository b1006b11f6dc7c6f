//! Message handling for the App.

use chrono::Utc;

use super::{App, AppMessage, View};

impl App {
    /// Handle an incoming async message.
    ///
    /// Messages from a torn-down flow are dropped so late results never
    /// touch discarded state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if let Some(flow_id) = msg.flow_id() {
            if flow_id != self.flow_id {
                tracing::debug!("Dropping message for stale flow {}: {:?}", flow_id, msg);
                return;
            }
        }
        self.mark_dirty();

        match msg {
            AppMessage::SetupFinished { result, .. } => {
                let started = match &mut self.view {
                    View::Setup(flow) => flow.on_started(result),
                    _ => None,
                };
                if let Some(started) = started {
                    self.enter_interview(started);
                }
            }
            AppMessage::AnswerSubmitted {
                question_index,
                result,
                ..
            } => {
                let command = match &mut self.view {
                    View::Interview(flow) => flow.on_submit_result(question_index, result, Utc::now()),
                    _ => None,
                };
                if let Some(command) = command {
                    self.run_session_command(command);
                }
                self.sync_countdown();
            }
            AppMessage::SessionEnded { result, .. } => {
                let outcome = match &mut self.view {
                    View::Interview(flow) => flow.on_session_ended(result),
                    _ => None,
                };
                if let Some(outcome) = outcome {
                    self.enter_results(outcome);
                }
            }
            AppMessage::FeedbackLoaded { result, .. } => {
                if let View::Results(flow) = &mut self.view {
                    flow.on_feedback(result);
                }
            }
            AppMessage::CountdownTick { question_index, .. } => {
                let command = match &mut self.view {
                    View::Interview(flow) => flow.tick(question_index, Utc::now()),
                    _ => None,
                };
                if let Some(command) = command {
                    self.run_session_command(command);
                }
                self.sync_countdown();
            }
            AppMessage::HealthChecked { connected, at } => {
                self.monitor.record(connected, at);
            }
        }
    }
}
