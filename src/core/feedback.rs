//! Feedback dialog submission flow
//!
//! The dialog moves through three phases:
//!
//! ```text
//! Idle --SubmitRequested--> Submitting --SubmitResolved--> Success --ResetElapsed--> Idle
//! ```
//!
//! [`FeedbackFlow::apply`] is a pure reducer. It never performs side effects
//! itself; it returns a [`FeedbackEffect`] the caller must carry out (hand the
//! submission to the external callback, arm the reset timer, close the dialog).
//!
//! The external submit boundary has no error channel. A completion that never
//! resolves leaves the flow in `Submitting` for good.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::Serialize;

use super::options::Rating;
use super::validation::{
    MAX_FEEDBACK_LENGTH, ValidationError, char_len, truncate_input, validate_feedback,
};

/// Delay between entering `Success` and resetting the dialog
pub const RESET_DELAY: Duration = Duration::from_millis(1800);

/// Phase of the submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Validated feedback handed to the submit callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    text: String,
    rating: Rating,
}

impl FeedbackSubmission {
    /// Build a submission. Fails if the text is outside 5..=500 characters.
    pub fn new(text: impl Into<String>, rating: Rating) -> Result<Self, ValidationError> {
        let text = text.into();
        validate_feedback(&text)?;
        if char_len(&text) > MAX_FEEDBACK_LENGTH {
            return Err(ValidationError::FeedbackTooLong {
                max: MAX_FEEDBACK_LENGTH,
            });
        }
        Ok(Self { text, rating })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

/// Completion signal returned by the submit callback.
///
/// Either the submission is done as soon as the callback returns, or the
/// callback hands back a future that resolves when it is done.
pub struct SubmitCompletion(Option<Pin<Box<dyn Future<Output = ()>>>>);

impl SubmitCompletion {
    pub fn immediate() -> Self {
        Self(None)
    }

    pub fn deferred(future: impl Future<Output = ()> + 'static) -> Self {
        Self(Some(Box::pin(future)))
    }

    pub fn is_deferred(&self) -> bool {
        self.0.is_some()
    }

    /// Wait for the submission to finish
    pub async fn wait(self) {
        if let Some(future) = self.0 {
            future.await;
        }
    }
}

impl From<()> for SubmitCompletion {
    fn from(_: ()) -> Self {
        Self::immediate()
    }
}

impl std::fmt::Debug for SubmitCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SubmitCompletion")
            .field(&if self.is_deferred() { "deferred" } else { "immediate" })
            .finish()
    }
}

/// Input to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    TextChanged(String),
    RatingSelected(Rating),
    SubmitRequested,
    /// The submit callback's completion resolved
    SubmitResolved,
    /// The reset timer fired
    ResetElapsed,
}

/// Side effect requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEffect {
    Submit(FeedbackSubmission),
    ScheduleReset(Duration),
    /// Ask the owner to close the dialog
    Close,
}

/// Feedback dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFlow {
    phase: SubmissionPhase,
    text: String,
    rating: Option<Rating>,
    text_error: Option<ValidationError>,
}

impl FeedbackFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Message shown when a submit attempt was blocked by the length rule
    pub fn text_error(&self) -> Option<ValidationError> {
        self.text_error
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Idle && !self.text.is_empty() && self.rating.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Text input is locked from submit until the reset
    pub fn input_disabled(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    pub fn show_confirmation(&self) -> bool {
        self.phase == SubmissionPhase::Success
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting..."
        } else {
            "Submit Feedback"
        }
    }

    /// Apply an event and return the side effect to perform, if any
    pub fn apply(&mut self, event: FeedbackEvent) -> Option<FeedbackEffect> {
        match event {
            FeedbackEvent::TextChanged(text) => {
                if self.input_disabled() {
                    return None;
                }
                self.text = truncate_input(text);
                self.text_error = None;
                None
            }
            FeedbackEvent::RatingSelected(rating) => {
                self.rating = Some(rating);
                None
            }
            FeedbackEvent::SubmitRequested => {
                if !self.can_submit() {
                    return None;
                }
                let rating = self.rating?;
                match FeedbackSubmission::new(self.text.clone(), rating) {
                    Ok(submission) => {
                        self.phase = SubmissionPhase::Submitting;
                        self.text_error = None;
                        Some(FeedbackEffect::Submit(submission))
                    }
                    Err(err) => {
                        self.text_error = Some(err);
                        None
                    }
                }
            }
            FeedbackEvent::SubmitResolved => {
                if self.phase != SubmissionPhase::Submitting {
                    return None;
                }
                self.phase = SubmissionPhase::Success;
                Some(FeedbackEffect::ScheduleReset(RESET_DELAY))
            }
            FeedbackEvent::ResetElapsed => {
                if self.phase != SubmissionPhase::Success {
                    return None;
                }
                *self = Self::default();
                Some(FeedbackEffect::Close)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(text: &str, rating: Rating) -> FeedbackFlow {
        let mut flow = FeedbackFlow::new();
        flow.apply(FeedbackEvent::TextChanged(text.to_string()));
        flow.apply(FeedbackEvent::RatingSelected(rating));
        flow
    }

    #[test]
    fn test_initial_state() {
        let flow = FeedbackFlow::new();
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert!(!flow.can_submit());
        assert!(!flow.input_disabled());
        assert!(!flow.show_confirmation());
        assert_eq!(flow.submit_label(), "Submit Feedback");
    }

    #[test]
    fn test_submit_requires_text_and_rating() {
        let mut flow = FeedbackFlow::new();
        flow.apply(FeedbackEvent::TextChanged("Great app".into()));
        assert!(!flow.can_submit());
        assert_eq!(flow.apply(FeedbackEvent::SubmitRequested), None);
        assert_eq!(flow.phase(), SubmissionPhase::Idle);

        let mut flow = FeedbackFlow::new();
        flow.apply(FeedbackEvent::RatingSelected(Rating::Good));
        assert!(!flow.can_submit());
        assert_eq!(flow.apply(FeedbackEvent::SubmitRequested), None);
    }

    #[test]
    fn test_each_rating_enables_submission() {
        for (rating, value) in Rating::ALL.into_iter().zip([5u8, 4, 3, 2]) {
            let flow = filled("Loving it", rating);
            assert_eq!(flow.rating().map(|r| r.value()), Some(value));
            assert!(flow.can_submit());
        }
    }

    #[test]
    fn test_short_text_blocks_submit_with_message() {
        let mut flow = filled("abcd", Rating::Okay);
        assert!(flow.can_submit());
        assert_eq!(flow.apply(FeedbackEvent::SubmitRequested), None);
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert_eq!(
            flow.text_error(),
            Some(ValidationError::FeedbackTooShort { min: 5 })
        );

        // Typing clears the message
        flow.apply(FeedbackEvent::TextChanged("abcde".into()));
        assert_eq!(flow.text_error(), None);
    }

    #[test]
    fn test_full_cycle() {
        let mut flow = filled("Fun lessons!", Rating::Great);

        let effect = flow.apply(FeedbackEvent::SubmitRequested);
        let expected = FeedbackSubmission::new("Fun lessons!", Rating::Great).unwrap();
        assert_eq!(effect, Some(FeedbackEffect::Submit(expected)));
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
        assert!(flow.input_disabled());
        assert!(!flow.can_submit());
        assert_eq!(flow.submit_label(), "Submitting...");

        let effect = flow.apply(FeedbackEvent::SubmitResolved);
        assert_eq!(effect, Some(FeedbackEffect::ScheduleReset(RESET_DELAY)));
        assert_eq!(flow.phase(), SubmissionPhase::Success);
        assert!(flow.show_confirmation());
        assert!(flow.input_disabled());

        let effect = flow.apply(FeedbackEvent::ResetElapsed);
        assert_eq!(effect, Some(FeedbackEffect::Close));
        assert_eq!(flow, FeedbackFlow::new());
    }

    #[test]
    fn test_reset_delay_is_1800ms() {
        assert_eq!(RESET_DELAY.as_millis(), 1800);
    }

    #[test]
    fn test_text_locked_while_submitting() {
        let mut flow = filled("Hello there", Rating::Bad);
        flow.apply(FeedbackEvent::SubmitRequested);
        flow.apply(FeedbackEvent::TextChanged("changed".into()));
        assert_eq!(flow.text(), "Hello there");

        flow.apply(FeedbackEvent::SubmitResolved);
        flow.apply(FeedbackEvent::TextChanged("changed".into()));
        assert_eq!(flow.text(), "Hello there");
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut flow = filled("Hello there", Rating::Good);
        assert!(flow.apply(FeedbackEvent::SubmitRequested).is_some());
        assert_eq!(flow.apply(FeedbackEvent::SubmitRequested), None);
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_unresolved_submission_stays_submitting() {
        let mut flow = filled("Hello there", Rating::Good);
        flow.apply(FeedbackEvent::SubmitRequested);
        // A stray reset never fires before success
        assert_eq!(flow.apply(FeedbackEvent::ResetElapsed), None);
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let mut flow = FeedbackFlow::new();
        assert_eq!(flow.apply(FeedbackEvent::SubmitResolved), None);
        assert_eq!(flow.apply(FeedbackEvent::ResetElapsed), None);
        assert_eq!(flow, FeedbackFlow::new());
    }

    #[test]
    fn test_text_is_truncated_to_500() {
        let mut flow = FeedbackFlow::new();
        flow.apply(FeedbackEvent::TextChanged("x".repeat(501)));
        assert_eq!(flow.text().chars().count(), 500);
    }

    #[test]
    fn test_submission_bounds() {
        assert!(FeedbackSubmission::new("abcd", Rating::Good).is_err());
        assert!(FeedbackSubmission::new("abcde", Rating::Good).is_ok());
        assert!(FeedbackSubmission::new("a".repeat(500), Rating::Good).is_ok());
        assert!(FeedbackSubmission::new("a".repeat(501), Rating::Good).is_err());
    }

    #[test]
    fn test_submission_json() {
        let submission = FeedbackSubmission::new("Nice songs", Rating::Okay).unwrap();
        assert_eq!(
            serde_json::to_string(&submission).unwrap(),
            r#"{"text":"Nice songs","rating":3}"#
        );
    }

    #[test]
    fn test_completion_kinds() {
        assert!(!SubmitCompletion::immediate().is_deferred());
        assert!(!SubmitCompletion::from(()).is_deferred());
        assert!(SubmitCompletion::deferred(async {}).is_deferred());
    }
}
