//! Demo form state: field values, touched flags and submission
//!
//! Rules are evaluated on every read, so the error set always reflects the
//! current values. The touched flag of a field only decides whether its
//! message is displayed.

use serde::{Deserialize, Serialize};

use super::options::{Gender, Level};
use super::validation::{
    ValidationError, truncate_input, validate_agreement, validate_feedback, validate_gender,
    validate_level, validate_name,
};

/// Fields of the demo form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoField {
    Name,
    Feedback,
    Level,
    Gender,
    Agree,
}

impl DemoField {
    pub const ALL: [DemoField; 5] = [
        DemoField::Name,
        DemoField::Feedback,
        DemoField::Level,
        DemoField::Gender,
        DemoField::Agree,
    ];

    /// DOM id of the field, also used to build `aria-describedby` targets
    pub fn id(&self) -> &'static str {
        match self {
            DemoField::Name => "name",
            DemoField::Feedback => "feedback",
            DemoField::Level => "level",
            DemoField::Gender => "gender",
            DemoField::Agree => "agree",
        }
    }
}

/// Current value of a field and whether the user has left it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState<T> {
    pub value: T,
    pub touched: bool,
}

impl<T> FieldState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            touched: false,
        }
    }
}

/// Values a form can be pre-filled with
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DemoFormInitial {
    pub name: Option<String>,
    pub feedback: Option<String>,
    pub level: Option<Level>,
    pub agree: Option<bool>,
    pub gender: Option<Gender>,
}

/// Data handed to the submit callback once every rule passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoFormData {
    pub name: String,
    pub feedback: String,
    pub level: Level,
    pub agree: bool,
    pub gender: Gender,
}

/// Per-field messages; `None` means the field is valid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoFormErrors {
    pub name: Option<ValidationError>,
    pub feedback: Option<ValidationError>,
    pub level: Option<ValidationError>,
    pub gender: Option<ValidationError>,
    pub agree: Option<ValidationError>,
}

impl DemoFormErrors {
    pub fn get(&self, field: DemoField) -> Option<ValidationError> {
        match field {
            DemoField::Name => self.name,
            DemoField::Feedback => self.feedback,
            DemoField::Level => self.level,
            DemoField::Gender => self.gender,
            DemoField::Agree => self.agree,
        }
    }

    pub fn any(&self) -> bool {
        DemoField::ALL.into_iter().any(|f| self.get(f).is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoFormEvent {
    NameChanged(String),
    FeedbackChanged(String),
    LevelChanged(Option<Level>),
    GenderChanged(Gender),
    AgreeChanged(bool),
    Blurred(DemoField),
    SubmitRequested,
}

/// Field set of the demo form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoFormFields {
    pub name: FieldState<String>,
    pub feedback: FieldState<String>,
    pub level: FieldState<Option<Level>>,
    pub gender: FieldState<Option<Gender>>,
    pub agree: FieldState<bool>,
}

impl DemoFormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(initial: DemoFormInitial) -> Self {
        Self {
            name: FieldState::new(initial.name.unwrap_or_default()),
            feedback: FieldState::new(truncate_input(initial.feedback.unwrap_or_default())),
            level: FieldState::new(initial.level),
            gender: FieldState::new(initial.gender),
            agree: FieldState::new(initial.agree.unwrap_or(false)),
        }
    }

    pub fn is_touched(&self, field: DemoField) -> bool {
        match field {
            DemoField::Name => self.name.touched,
            DemoField::Feedback => self.feedback.touched,
            DemoField::Level => self.level.touched,
            DemoField::Gender => self.gender.touched,
            DemoField::Agree => self.agree.touched,
        }
    }

    fn touch(&mut self, field: DemoField) {
        match field {
            DemoField::Name => self.name.touched = true,
            DemoField::Feedback => self.feedback.touched = true,
            DemoField::Level => self.level.touched = true,
            DemoField::Gender => self.gender.touched = true,
            DemoField::Agree => self.agree.touched = true,
        }
    }

    pub fn errors(&self) -> DemoFormErrors {
        DemoFormErrors {
            name: validate_name(&self.name.value).err(),
            feedback: validate_feedback(&self.feedback.value).err(),
            level: validate_level(self.level.value).err(),
            gender: validate_gender(self.gender.value).err(),
            agree: validate_agreement(self.agree.value).err(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().any()
    }

    /// Error for a field, but only once the field is touched
    pub fn message_for(&self, field: DemoField) -> Option<ValidationError> {
        if self.is_touched(field) {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Submit button state: disabled exactly when a rule fails
    pub fn submit_disabled(&self) -> bool {
        self.has_errors()
    }

    fn data(&self) -> Option<DemoFormData> {
        Some(DemoFormData {
            name: self.name.value.clone(),
            feedback: self.feedback.value.clone(),
            level: self.level.value?,
            agree: self.agree.value,
            gender: self.gender.value?,
        })
    }

    /// Apply an event. Returns the data to submit when a submit succeeds.
    pub fn apply(&mut self, event: DemoFormEvent) -> Option<DemoFormData> {
        match event {
            DemoFormEvent::NameChanged(name) => self.name.value = name,
            DemoFormEvent::FeedbackChanged(text) => self.feedback.value = truncate_input(text),
            DemoFormEvent::LevelChanged(level) => self.level.value = level,
            DemoFormEvent::GenderChanged(gender) => self.gender.value = Some(gender),
            DemoFormEvent::AgreeChanged(agree) => self.agree.value = agree,
            DemoFormEvent::Blurred(field) => self.touch(field),
            DemoFormEvent::SubmitRequested => {
                for field in DemoField::ALL {
                    self.touch(field);
                }
                if self.has_errors() {
                    return None;
                }
                return self.data();
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> DemoFormFields {
        let mut form = DemoFormFields::new();
        form.apply(DemoFormEvent::NameChanged("Charan".into()));
        form.apply(DemoFormEvent::FeedbackChanged("Really fun".into()));
        form.apply(DemoFormEvent::LevelChanged(Some(Level::Beginner)));
        form.apply(DemoFormEvent::GenderChanged(Gender::Other));
        form.apply(DemoFormEvent::AgreeChanged(true));
        form
    }

    #[test]
    fn test_empty_form_has_every_error() {
        let form = DemoFormFields::new();
        let errors = form.errors();
        for field in DemoField::ALL {
            assert!(errors.get(field).is_some(), "{:?} should be invalid", field);
        }
        assert!(form.submit_disabled());
    }

    #[test]
    fn test_messages_hidden_until_touched() {
        let mut form = DemoFormFields::new();
        assert_eq!(form.message_for(DemoField::Name), None);

        form.apply(DemoFormEvent::Blurred(DemoField::Name));
        assert_eq!(
            form.message_for(DemoField::Name),
            Some(ValidationError::NameRequired)
        );
        // Other fields stay quiet
        assert_eq!(form.message_for(DemoField::Level), None);
    }

    #[test]
    fn test_touched_does_not_gate_blocking() {
        let form = DemoFormFields::new();
        assert!(DemoField::ALL.into_iter().all(|f| !form.is_touched(f)));
        assert!(form.submit_disabled());
    }

    #[test]
    fn test_submit_disabled_iff_any_rule_fails() {
        let form = valid_form();
        assert!(!form.submit_disabled());

        let breakers = [
            DemoFormEvent::NameChanged(String::new()),
            DemoFormEvent::FeedbackChanged("abcd".into()),
            DemoFormEvent::LevelChanged(None),
            DemoFormEvent::AgreeChanged(false),
        ];
        for event in breakers {
            let mut form = valid_form();
            form.apply(event.clone());
            assert!(form.submit_disabled(), "{:?} should block submit", event);
        }

        let mut form = valid_form();
        form.gender.value = None;
        assert!(form.submit_disabled());
    }

    #[test]
    fn test_submit_valid_form() {
        let mut form = valid_form();
        let data = form.apply(DemoFormEvent::SubmitRequested);
        assert_eq!(
            data,
            Some(DemoFormData {
                name: "Charan".into(),
                feedback: "Really fun".into(),
                level: Level::Beginner,
                agree: true,
                gender: Gender::Other,
            })
        );
    }

    #[test]
    fn test_submit_invalid_form_touches_everything() {
        let mut form = DemoFormFields::new();
        form.apply(DemoFormEvent::NameChanged("Min".into()));
        assert_eq!(form.apply(DemoFormEvent::SubmitRequested), None);
        assert!(DemoField::ALL.into_iter().all(|f| form.is_touched(f)));
        assert_eq!(form.message_for(DemoField::Name), None);
        assert_eq!(
            form.message_for(DemoField::Gender),
            Some(ValidationError::GenderRequired)
        );
    }

    #[test]
    fn test_failed_submit_only_marks_fields_touched() {
        let mut form = DemoFormFields::new();
        form.apply(DemoFormEvent::NameChanged("Min".into()));
        let disabled_before = form.submit_disabled();

        let mut expected = form.clone();
        for field in DemoField::ALL {
            expected.apply(DemoFormEvent::Blurred(field));
        }

        assert_eq!(form.apply(DemoFormEvent::SubmitRequested), None);
        assert_eq!(form, expected);
        assert_eq!(form.submit_disabled(), disabled_before);
    }

    #[test]
    fn test_feedback_truncated() {
        let mut form = DemoFormFields::new();
        form.apply(DemoFormEvent::FeedbackChanged("b".repeat(600)));
        assert_eq!(form.feedback.value.len(), 500);
    }

    #[test]
    fn test_with_initial() {
        let form = DemoFormFields::with_initial(DemoFormInitial {
            name: Some("Jisoo".into()),
            level: Some(Level::Advanced),
            ..Default::default()
        });
        assert_eq!(form.name.value, "Jisoo");
        assert_eq!(form.level.value, Some(Level::Advanced));
        assert!(!form.agree.value);
        assert_eq!(form.gender.value, None);
        assert!(!form.name.touched);
    }

    #[test]
    fn test_data_json() {
        let mut form = valid_form();
        let data = form.apply(DemoFormEvent::SubmitRequested).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["level"], "beginner");
        assert_eq!(json["gender"], "other");
        assert_eq!(json["agree"], true);
    }
}
