//! Form domain layer
//!
//! Per-screen form state. Field values only change through the sanitizer,
//! so screens can store and display whatever a field holds.

mod field;
mod form_state;
mod sanitizer;

pub use field::{FieldKind, FormField};
pub use form_state::{
    Form, FormState, LoginCredentials, LoginForm, RequiredFieldError, SignUpData, SignUpForm,
    SignUpRejected,
};
pub use sanitizer::{apply_mask, sanitize, validate_required};
