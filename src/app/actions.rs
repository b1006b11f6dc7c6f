//! User actions and command execution.

use chrono::{Local, Utc};

use crate::flows::{
    start_interview, ResultsCommand, ResultsFlow, SessionCommand, SessionFlow, SessionOutcome,
    SetupCommand, SetupFlow,
};
use crate::models::StartedSession;
use crate::report;

use super::{App, AppMessage, View};

impl App {
    /// Validate the setup form and start the session.
    pub fn submit_setup(&mut self) {
        let Some(flow) = self.setup_mut() else {
            return;
        };
        match flow.submit() {
            Ok(Some(command)) => self.run_setup_command(command),
            Ok(None) => {}
            Err(err) => tracing::debug!("Setup rejected: {}", err),
        }
        self.mark_dirty();
    }

    /// Submit the draft for the question on screen.
    pub fn submit_answer(&mut self) {
        let Some(flow) = self.session_mut() else {
            return;
        };
        match flow.submit() {
            Ok(Some(command)) => self.run_session_command(command),
            Ok(None) => {}
            Err(err) => tracing::debug!("Answer rejected: {}", err),
        }
        self.sync_countdown();
        self.mark_dirty();
    }

    /// Skip the question on screen.
    pub fn skip_question(&mut self) {
        let Some(flow) = self.session_mut() else {
            return;
        };
        if let Some(command) = flow.skip(Utc::now()) {
            self.run_session_command(command);
        }
        self.sync_countdown();
        self.mark_dirty();
    }

    /// Discard all session state and return to an empty setup form.
    pub fn restart(&mut self) {
        tracing::info!("Restarting from {:?}", self.screen());
        self.enter_view(View::Setup(SetupFlow::new()));
    }

    /// Write the loaded results to a report file and open it.
    pub fn export_results(&mut self) {
        let Some(flow) = self.results() else {
            return;
        };
        let notice = match report::export(flow, &self.config.export_dir, Local::now()) {
            Ok(path) => {
                if self.config.open_exports {
                    if let Err(err) = report::open_in_viewer(&path) {
                        tracing::warn!("{}", err);
                    }
                }
                format!("Report saved to {}", path.display())
            }
            Err(err) => {
                tracing::warn!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        };
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(super) fn run_setup_command(&mut self, command: SetupCommand) {
        let SetupCommand::Start(params) = command;
        let api = self.api.clone();
        let flow_id = self.flow_id;
        tracing::info!(
            "Starting interview for {} ({}, {})",
            params.candidate_name(),
            params.job_role(),
            params.difficulty().as_str()
        );
        self.spawn(async move {
            let result = start_interview(&api, &params).await;
            AppMessage::SetupFinished { flow_id, result }
        });
    }

    pub(super) fn run_session_command(&mut self, command: SessionCommand) {
        let api = self.api.clone();
        let flow_id = self.flow_id;
        match command {
            SessionCommand::SubmitAnswer {
                question_index,
                question_id,
                answer,
                session_id,
            } => self.spawn(async move {
                let result = api
                    .submit_answer(&question_id, &answer, &session_id)
                    .await
                    .map(drop);
                AppMessage::AnswerSubmitted {
                    flow_id,
                    question_index,
                    result,
                }
            }),
            SessionCommand::EndSession { session_id } => self.spawn(async move {
                let result = api.end_session(&session_id).await.map(drop);
                AppMessage::SessionEnded { flow_id, result }
            }),
        }
    }

    pub(super) fn run_results_command(&mut self, command: ResultsCommand) {
        let ResultsCommand::FetchFeedback { session_id } = command;
        let api = self.api.clone();
        let flow_id = self.flow_id;
        self.spawn(async move {
            let result = api.get_feedback(&session_id).await;
            AppMessage::FeedbackLoaded { flow_id, result }
        });
    }

    /// Hand a started session to a fresh interview flow.
    pub(super) fn enter_interview(&mut self, started: StartedSession) {
        let (flow, command) = SessionFlow::new(started, self.config.question_time_limit);
        self.enter_view(View::Interview(flow));
        if let Some(command) = command {
            self.run_session_command(command);
        }
    }

    /// Hand a finished interview to a fresh results flow.
    pub(super) fn enter_results(&mut self, outcome: SessionOutcome) {
        let (flow, command) = ResultsFlow::new(outcome);
        self.enter_view(View::Results(flow));
        self.run_results_command(command);
    }
}
