#![allow(dead_code)]

//! Conversation controller — owns the transcript and the active syllabus
//! record, and sequences one completion round-trip per user submission.
//!
//! The controller is a two-phase state machine with no I/O of its own:
//! [`Controller::submit`] either rejects the input or hands back the prompt
//! to send, and [`Controller::resolve`] applies the settled outcome. The
//! caller (the session) performs the network call in between. At most one
//! request is outstanding at a time; a submit while Pending is rejected
//! outright, never queued.

use tracing::{debug, warn};

use crate::chat::ChatMessage;
use crate::llm_client::prompts::build_prompt;
use crate::llm_client::LlmError;
use crate::syllabus::parser;
use crate::syllabus::record::{Field, SyllabusRecord};

/// Appended after a reply is parsed into the active record.
pub const CONFIRMATION_MESSAGE: &str = "Syllabus généré avec succès !";
/// Appended when the completion request fails, whatever the cause.
pub const ERROR_MESSAGE: &str =
    "Désolé, une erreur s'est produite lors de la communication avec l'API.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Pending,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty/whitespace-only, or a request is already in flight.
    /// Nothing changed.
    Ignored,
    /// The user message was appended and the controller is Pending; the
    /// caller must send this prompt and feed the result to `resolve`.
    Request(String),
}

pub struct Controller {
    state: ControllerState,
    transcript: Vec<ChatMessage>,
    record: SyllabusRecord,
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Controller::with_record(SyllabusRecord::default())
    }

    /// Starts a session around a previously saved record.
    pub fn with_record(record: SyllabusRecord) -> Self {
        Controller {
            state: ControllerState::Idle,
            transcript: Vec::new(),
            record,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn record(&self) -> &SyllabusRecord {
        &self.record
    }

    /// Accepts one user submission.
    ///
    /// Whitespace-only input and reentrant calls are no-ops. An accepted
    /// submission appends exactly one user message, moves to Pending, and
    /// returns the prompt for the single outbound request.
    pub fn submit(&mut self, user_text: &str) -> Submission {
        if self.state == ControllerState::Pending {
            debug!("submit rejected: a request is already in flight");
            return Submission::Ignored;
        }
        let topic = user_text.trim();
        if topic.is_empty() {
            return Submission::Ignored;
        }

        self.transcript.push(ChatMessage::user(topic));
        self.state = ControllerState::Pending;
        Submission::Request(build_prompt(topic))
    }

    /// Applies the settled outcome of the outstanding request.
    ///
    /// Pending → Idle unconditionally. On success the reply is parsed and the
    /// active record replaced wholesale; on failure the record is left
    /// untouched. Either way exactly one assistant message is appended and
    /// nothing is rethrown — failures terminate here.
    pub fn resolve(&mut self, outcome: Result<String, LlmError>) {
        if self.state != ControllerState::Pending {
            debug!("resolve called with no request in flight; ignoring");
            return;
        }
        self.state = ControllerState::Idle;

        match outcome {
            Ok(reply) => {
                let record = parser::parse(&reply);
                if record.is_fully_unspecified() {
                    // Treated as success, but worth a trace: the model
                    // answered without any recognized heading.
                    warn!("model reply contained no recognized field labels");
                }
                self.record = record;
                self.transcript.push(ChatMessage::assistant(CONFIRMATION_MESSAGE));
            }
            Err(e) => {
                warn!("completion request failed: {e}");
                self.transcript.push(ChatMessage::assistant(ERROR_MESSAGE));
            }
        }
    }

    /// Direct user edit of one record field. Always succeeds and never
    /// touches the transcript.
    pub fn edit_field(&mut self, field: Field, value: &str) {
        self.record.set(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Originator;
    use crate::syllabus::record::UNSPECIFIED;

    const REPLY: &str = "Crédits ECTS : 5\nLangue : Français";

    fn count_by(controller: &Controller, who: Originator) -> usize {
        controller
            .transcript()
            .iter()
            .filter(|m| m.originator == who)
            .count()
    }

    #[test]
    fn test_successful_round_trip_appends_one_user_and_one_assistant_message() {
        let mut controller = Controller::new();
        let submission = controller.submit("théorie des graphes");
        assert!(matches!(submission, Submission::Request(_)));
        assert_eq!(controller.state(), ControllerState::Pending);

        controller.resolve(Ok(REPLY.to_string()));
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(count_by(&controller, Originator::User), 1);
        assert_eq!(count_by(&controller, Originator::Assistant), 1);
        assert_eq!(controller.transcript()[1].text, CONFIRMATION_MESSAGE);
    }

    #[test]
    fn test_successful_round_trip_replaces_the_record() {
        let mut controller = Controller::new();
        controller.edit_field(Field::Content, "ancienne valeur");
        let _ = controller.submit("compilation");
        controller.resolve(Ok(REPLY.to_string()));

        assert_eq!(controller.record().ects_credits, "5");
        assert_eq!(controller.record().language, "Français");
        // Wholesale replacement: the earlier edit is gone.
        assert_eq!(controller.record().content, UNSPECIFIED);
    }

    #[test]
    fn test_empty_and_whitespace_input_is_a_no_op() {
        let mut controller = Controller::new();
        assert_eq!(controller.submit(""), Submission::Ignored);
        assert_eq!(controller.submit("   \t  "), Submission::Ignored);
        assert_eq!(controller.state(), ControllerState::Idle);
        assert!(controller.transcript().is_empty());
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let mut controller = Controller::new();
        let first = controller.submit("réseaux");
        assert!(matches!(first, Submission::Request(_)));

        let second = controller.submit("bases de données");
        assert_eq!(second, Submission::Ignored);
        // No second user message, no state change.
        assert_eq!(count_by(&controller, Originator::User), 1);
        assert_eq!(controller.state(), ControllerState::Pending);
    }

    #[test]
    fn test_failure_leaves_record_unchanged_and_appends_one_error_message() {
        let mut controller = Controller::new();
        controller.edit_field(Field::Language, "Français");
        let before = controller.record().clone();

        let _ = controller.submit("cryptographie");
        controller.resolve(Err(LlmError::Api {
            status: 500,
            message: "upstream unavailable".to_string(),
        }));

        assert_eq!(controller.record(), &before);
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(count_by(&controller, Originator::Assistant), 1);
        assert_eq!(controller.transcript()[1].text, ERROR_MESSAGE);
    }

    #[test]
    fn test_fully_unrecognized_reply_still_confirms() {
        let mut controller = Controller::new();
        let _ = controller.submit("philosophie");
        controller.resolve(Ok("Bonjour ! Voici quelques idées.".to_string()));

        assert!(controller.record().is_fully_unspecified());
        assert_eq!(controller.transcript()[1].text, CONFIRMATION_MESSAGE);
    }

    #[test]
    fn test_resolve_without_pending_request_is_ignored() {
        let mut controller = Controller::new();
        controller.resolve(Ok(REPLY.to_string()));
        assert!(controller.transcript().is_empty());
        assert!(controller.record().is_fully_unspecified());
    }

    #[test]
    fn test_submit_accepted_again_after_resolution() {
        let mut controller = Controller::new();
        let _ = controller.submit("optique");
        controller.resolve(Err(LlmError::EmptyContent));
        assert!(matches!(
            controller.submit("optique quantique"),
            Submission::Request(_)
        ));
    }

    #[test]
    fn test_edit_field_does_not_touch_transcript() {
        let mut controller = Controller::new();
        controller.edit_field(Field::Semester, "S2");
        assert!(controller.transcript().is_empty());
        assert_eq!(controller.record().semester, "S2");
    }

    #[test]
    fn test_edit_field_round_trip_reproduces_parsed_record() {
        let parsed = crate::syllabus::parser::parse(REPLY);
        let mut controller = Controller::new();
        for field in Field::ALL {
            controller.edit_field(field, parsed.get(field));
        }
        assert_eq!(controller.record(), &parsed);
    }

    #[test]
    fn test_transcript_order_is_chronological() {
        let mut controller = Controller::new();
        let _ = controller.submit("histoire");
        controller.resolve(Ok(REPLY.to_string()));
        let _ = controller.submit("géographie");
        controller.resolve(Err(LlmError::EmptyContent));

        let kinds: Vec<Originator> = controller
            .transcript()
            .iter()
            .map(|m| m.originator)
            .collect();
        assert_eq!(
            kinds,
            vec![
                Originator::User,
                Originator::Assistant,
                Originator::User,
                Originator::Assistant
            ]
        );
    }
}
