//! Interaction state and validation rules, independent of rendering

#[cfg(feature = "ssr")]
pub mod config;
pub mod demo_form;
pub mod feedback;
pub mod navigation;
pub mod options;
pub mod profile;
#[cfg(test)]
mod tests;
pub mod validation;

pub use demo_form::{
    DemoField, DemoFormData, DemoFormErrors, DemoFormEvent, DemoFormFields, DemoFormInitial,
    FieldState,
};
pub use feedback::{
    FeedbackEffect, FeedbackEvent, FeedbackFlow, FeedbackSubmission, RESET_DELAY,
    SubmissionPhase, SubmitCompletion,
};
pub use navigation::NavigationState;
pub use options::{Gender, Level, Rating, SettingsRow, Tab};
pub use profile::{ProfileEffect, ProfileEvent, ProfileSettingsState, UserProfile};
pub use validation::{MAX_FEEDBACK_LENGTH, MIN_FEEDBACK_LENGTH, ValidationError};
