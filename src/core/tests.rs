//! Scenarios that drive several reducers the way the page does

use crate::core::{
    FeedbackEffect, FeedbackEvent, FeedbackFlow, NavigationState, ProfileEffect, ProfileEvent,
    ProfileSettingsState, Rating, SubmissionPhase, Tab,
};

/// Owner of the dialog's open flag, as the home page holds it
#[derive(Default)]
struct DialogHost {
    open: bool,
    flow: FeedbackFlow,
    submitted: Vec<(String, u8)>,
    pending_reset: bool,
}

impl DialogHost {
    fn dispatch(&mut self, event: FeedbackEvent) {
        match self.flow.apply(event) {
            Some(FeedbackEffect::Submit(submission)) => {
                self.submitted
                    .push((submission.text().to_string(), submission.rating().value()));
            }
            Some(FeedbackEffect::ScheduleReset(_)) => self.pending_reset = true,
            Some(FeedbackEffect::Close) => self.open = false,
            None => {}
        }
    }

    fn fire_timer(&mut self) {
        if std::mem::take(&mut self.pending_reset) {
            self.dispatch(FeedbackEvent::ResetElapsed);
        }
    }
}

#[test]
fn test_feedback_round_trip_closes_dialog() {
    let mut host = DialogHost {
        open: true,
        ..Default::default()
    };
    host.dispatch(FeedbackEvent::RatingSelected(Rating::Good));
    host.dispatch(FeedbackEvent::TextChanged("The drama lessons rock".into()));
    host.dispatch(FeedbackEvent::SubmitRequested);
    host.dispatch(FeedbackEvent::SubmitResolved);

    assert!(host.open);
    assert!(host.flow.show_confirmation());
    assert_eq!(host.submitted, vec![("The drama lessons rock".to_string(), 4)]);

    host.fire_timer();
    assert!(!host.open);
    assert_eq!(host.flow.phase(), SubmissionPhase::Idle);
    assert_eq!(host.flow.text(), "");
    assert_eq!(host.flow.rating(), None);
}

#[test]
fn test_reopen_before_reset_still_resets_and_closes() {
    let mut host = DialogHost {
        open: true,
        ..Default::default()
    };
    host.dispatch(FeedbackEvent::RatingSelected(Rating::Great));
    host.dispatch(FeedbackEvent::TextChanged("Love the songs".into()));
    host.dispatch(FeedbackEvent::SubmitRequested);
    host.dispatch(FeedbackEvent::SubmitResolved);

    // User closes and immediately reopens while the reset is pending
    host.open = false;
    host.open = true;
    assert!(host.flow.show_confirmation());
    assert!(host.flow.input_disabled());

    host.fire_timer();
    assert!(!host.open, "pending reset is not cancelled by close/reopen");
    assert_eq!(host.flow, FeedbackFlow::new());
}

#[test]
fn test_closing_dialog_keeps_draft() {
    let mut host = DialogHost {
        open: true,
        ..Default::default()
    };
    host.dispatch(FeedbackEvent::TextChanged("half written".into()));
    host.open = false;
    host.open = true;
    assert_eq!(host.flow.text(), "half written");
}

#[test]
fn test_profile_tab_sign_out() {
    let mut nav = NavigationState::default();
    let mut profile = ProfileSettingsState::new();
    let mut signed_out = 0;

    nav.select(Tab::Profile);
    assert!(nav.is_active(Tab::Profile));

    profile.apply(ProfileEvent::SignOutRequested);
    profile.apply(ProfileEvent::SignOutCancelled);
    profile.apply(ProfileEvent::SignOutRequested);
    if profile.apply(ProfileEvent::SignOutConfirmed) == Some(ProfileEffect::SignOut) {
        signed_out += 1;
    }

    assert_eq!(signed_out, 1);
    // Signing out does not move the tab
    assert_eq!(nav.current(), Tab::Profile);
}
