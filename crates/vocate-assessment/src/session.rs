//! Session state machine for a single assessment run.
//!
//! Models the intake → in-progress → complete flow as explicit state driven
//! by record/advance/retreat/restart commands. Responses accumulate keyed by
//! question id (a new answer for the same question supersedes the old one)
//! and the scoring engine runs exactly once, when the final question is
//! advanced past.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use vocate_core::models::question::{Question, Section};
use vocate_core::models::response::{Response, ResponseValue};
use vocate_core::models::result::AssessmentResult;

use crate::catalog;
use crate::error::AssessmentError;
use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SessionState {
    Intake,
    InProgress,
    Complete,
}

/// One user's pass through the catalog. Single-threaded; all mutation goes
/// through the command methods below.
#[derive(Debug)]
pub struct AssessmentSession {
    id: Uuid,
    state: SessionState,
    section_index: usize,
    question_index: usize,
    responses: HashMap<String, Response>,
    result: Option<AssessmentResult>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: SessionState::Intake,
            section_index: 0,
            question_index: 0,
            responses: HashMap::new(),
            result: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Leave the intake screen and show the first question.
    pub fn begin(&mut self) {
        self.state = SessionState::InProgress;
        self.section_index = 0;
        self.question_index = 0;
        self.responses.clear();
        self.result = None;
        info!(session = %self.id, "assessment started");
    }

    pub fn current_section(&self) -> Option<&'static Section> {
        if self.state != SessionState::InProgress {
            return None;
        }
        catalog::sections().get(self.section_index)
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.current_section()?.questions.get(self.question_index)
    }

    /// Record an answer for a catalog question, validating the value against
    /// the question's shape. Replaces any earlier answer for the same id.
    pub fn record(&mut self, question_id: &str, value: ResponseValue) -> Result<(), AssessmentError> {
        if self.state != SessionState::InProgress {
            return Err(AssessmentError::NotInProgress);
        }
        let question = catalog::question(question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(question_id.to_string()))?;

        match (&question.options, &value) {
            (None, ResponseValue::Rating(rating)) => {
                if !(1..=5).contains(rating) {
                    return Err(AssessmentError::RatingOutOfRange {
                        question_id: question_id.to_string(),
                        value: *rating,
                    });
                }
            }
            (Some(options), ResponseValue::Choice(choice)) => {
                if !options.contains(choice) {
                    return Err(AssessmentError::UnknownOption {
                        question_id: question_id.to_string(),
                        choice: choice.clone(),
                    });
                }
            }
            _ => {
                return Err(AssessmentError::WrongValueKind {
                    question_id: question_id.to_string(),
                    expected: question.question_type,
                });
            }
        }

        debug!(session = %self.id, question = question_id, "response recorded");
        self.responses.insert(
            question_id.to_string(),
            Response {
                question_id: question_id.to_string(),
                value,
                timestamp: Timestamp::now(),
            },
        );
        Ok(())
    }

    /// Whether the question currently shown has a recorded answer.
    pub fn is_answered(&self) -> bool {
        self.current_question()
            .is_some_and(|question| self.responses.contains_key(&question.id))
    }

    pub fn response(&self, question_id: &str) -> Option<&Response> {
        self.responses.get(question_id)
    }

    /// The live responses in catalog order — the scoring engine's input.
    pub fn responses(&self) -> Vec<Response> {
        catalog::questions()
            .filter_map(|question| self.responses.get(&question.id))
            .cloned()
            .collect()
    }

    /// Move to the next question, crossing into the next section when the
    /// current one is exhausted. Advancing past the final question scores the
    /// run and transitions to Complete. Gaps are allowed; the engine tolerates
    /// unanswered questions.
    pub fn advance(&mut self) -> SessionState {
        if self.state != SessionState::InProgress {
            return self.state;
        }
        let sections = catalog::sections();
        let Some(section) = sections.get(self.section_index) else {
            return self.state;
        };

        if self.question_index + 1 < section.questions.len() {
            self.question_index += 1;
            debug!(
                session = %self.id,
                section = self.section_index,
                question = self.question_index,
                "advanced"
            );
        } else if self.section_index + 1 < sections.len() {
            self.section_index += 1;
            self.question_index = 0;
            debug!(session = %self.id, section = self.section_index, "advanced to next section");
        } else {
            let result = scoring::compute(&self.responses());
            info!(
                session = %self.id,
                overall = result.overall_score,
                recommendation = %result.recommendation,
                "assessment complete"
            );
            self.result = Some(result);
            self.state = SessionState::Complete;
        }
        self.state
    }

    pub fn can_retreat(&self) -> bool {
        self.state == SessionState::InProgress
            && (self.section_index > 0 || self.question_index > 0)
    }

    /// Step back to the previous question, falling into the tail of the
    /// previous section at a section boundary. No-op on the first question.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        if self.question_index > 0 {
            self.question_index -= 1;
        } else {
            self.section_index -= 1;
            let questions = &catalog::sections()[self.section_index].questions;
            self.question_index = questions.len().saturating_sub(1);
        }
        debug!(
            session = %self.id,
            section = self.section_index,
            question = self.question_index,
            "retreated"
        );
        true
    }

    /// Abandon the run and return to intake, discarding responses and any
    /// computed result.
    pub fn restart(&mut self) {
        self.state = SessionState::Intake;
        self.section_index = 0;
        self.question_index = 0;
        self.responses.clear();
        self.result = None;
        info!(session = %self.id, "assessment restarted");
    }

    /// The scored result, present once the session is Complete.
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }
}
