use vocate_assessment::error::AssessmentError;
use vocate_assessment::scoring::compute;
use vocate_assessment::session::{AssessmentSession, SessionState};
use vocate_core::models::response::ResponseValue;
use vocate_core::models::score::Recommendation;

fn rating(value: u8) -> ResponseValue {
    ResponseValue::Rating(value)
}

fn choice(option: &str) -> ResponseValue {
    ResponseValue::Choice(option.to_string())
}

/// Answer every question with its best response and walk to completion.
fn run_to_completion(session: &mut AssessmentSession) {
    session.begin();
    while session.state() == SessionState::InProgress {
        let question = session.current_question().expect("a question is active");
        let value = match &question.correct_answer {
            Some(correct) => choice(correct),
            None if question.reverse_scored => rating(1),
            None => rating(5),
        };
        session.record(&question.id, value).expect("valid answer");
        session.advance();
    }
}

#[test]
fn new_session_waits_at_intake() {
    let session = AssessmentSession::new();
    assert_eq!(session.state(), SessionState::Intake);
    assert!(session.current_question().is_none());
    assert!(session.result().is_none());
}

#[test]
fn begin_shows_the_first_question() {
    let mut session = AssessmentSession::new();
    session.begin();

    assert_eq!(session.state(), SessionState::InProgress);
    let question = session.current_question().expect("first question");
    assert_eq!(question.id, "p1");
    assert!(!session.is_answered());
    assert!(!session.can_retreat());
}

#[test]
fn record_rejects_answers_outside_the_catalog_shape() {
    let mut session = AssessmentSession::new();

    assert!(matches!(
        session.record("p1", rating(3)),
        Err(AssessmentError::NotInProgress)
    ));

    session.begin();
    assert!(matches!(
        session.record("nope", rating(3)),
        Err(AssessmentError::UnknownQuestion(_))
    ));
    assert!(matches!(
        session.record("p1", rating(9)),
        Err(AssessmentError::RatingOutOfRange { .. })
    ));
    assert!(matches!(
        session.record("p1", choice("Strongly Agree")),
        Err(AssessmentError::WrongValueKind { .. })
    ));
    assert!(matches!(
        session.record("a1", choice("$1,000,000")),
        Err(AssessmentError::UnknownOption { .. })
    ));
    assert!(matches!(
        session.record("a1", rating(2)),
        Err(AssessmentError::WrongValueKind { .. })
    ));

    assert!(session.record("p1", rating(3)).is_ok());
    assert!(session.record("a1", choice("$85")).is_ok());
    assert!(session.is_answered());
}

#[test]
fn recording_again_replaces_the_earlier_answer() {
    let mut session = AssessmentSession::new();
    session.begin();

    session.record("p1", rating(2)).expect("first answer");
    session.record("p1", rating(4)).expect("second answer");

    let responses = session.responses();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].value, rating(4));
}

#[test]
fn advance_walks_the_whole_catalog_in_order() {
    let mut session = AssessmentSession::new();
    session.begin();

    let mut seen = Vec::new();
    while session.state() == SessionState::InProgress {
        let question = session.current_question().expect("a question is active");
        seen.push(question.id.clone());
        session.advance();
    }

    assert_eq!(seen.len(), 22);
    assert_eq!(seen.first().map(String::as_str), Some("p1"));
    assert_eq!(seen[7], "p8");
    assert_eq!(seen[8], "a1");
    assert_eq!(seen.last().map(String::as_str), Some("l5"));
    assert_eq!(session.state(), SessionState::Complete);
    assert!(session.result().is_some());
}

#[test]
fn retreat_crosses_section_boundaries() {
    let mut session = AssessmentSession::new();
    session.begin();

    for _ in 0..8 {
        session.advance();
    }
    assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("a1"));

    assert!(session.retreat());
    assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("p8"));

    for _ in 0..7 {
        assert!(session.retreat());
    }
    assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("p1"));
    assert!(!session.retreat());
    assert!(!session.can_retreat());
}

#[test]
fn completion_scores_the_accumulated_responses() {
    let mut session = AssessmentSession::new();
    run_to_completion(&mut session);

    assert_eq!(session.state(), SessionState::Complete);
    let result = session.result().expect("scored result");
    assert_eq!(result.recommendation, Recommendation::Yes);
    assert_eq!(result.overall_score, 100);
    assert_eq!(result, &compute(&session.responses()));

    // Advancing a completed session is a no-op.
    assert_eq!(session.advance(), SessionState::Complete);
    assert!(matches!(
        session.record("p1", rating(1)),
        Err(AssessmentError::NotInProgress)
    ));
}

#[test]
fn gaps_are_allowed_when_completing() {
    let mut session = AssessmentSession::new();
    session.begin();
    session.record("p2", rating(5)).expect("valid answer");
    while session.state() == SessionState::InProgress {
        session.advance();
    }

    let result = session.result().expect("scored result");
    assert_eq!(result.breakdown.will, 100);
    assert_eq!(result.overall_score, 25);
    assert_eq!(result.recommendation, Recommendation::No);
}

#[test]
fn restart_discards_the_run() {
    let mut session = AssessmentSession::new();
    run_to_completion(&mut session);

    session.restart();
    assert_eq!(session.state(), SessionState::Intake);
    assert!(session.result().is_none());
    assert!(session.responses().is_empty());
}
