//! Common reusable UI components
//!
//! Form controls and dialog chrome shared by the feedback dialog, the demo
//! form and the profile panel.

pub mod form;
pub mod modal;

pub use form::{CheckboxField, FormField, RadioGroupField, SelectField, Switch, TextAreaField};
pub use modal::{BaseModal, ConfirmDialog};
