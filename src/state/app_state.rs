//! Application state definitions

use super::forms::{FieldKind, Form, FormField, FormState};
use serde::Serialize;

/// Which screen a fresh form should be opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignUp,
    Login,
}

/// Address resolved from a CEP
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl Address {
    /// One-line text for the read-only address field
    pub fn display_text(&self) -> String {
        if self.street.is_empty() {
            return String::new();
        }
        format!(
            "{}, {}, {} - {}",
            self.street, self.neighborhood, self.city, self.state
        )
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FormState,
    /// Status line for the last action
    pub status_message: Option<String>,
}

impl AppState {
    /// Replace the active form with an empty one for `screen`
    pub fn open(&mut self, screen: Screen) {
        self.form = match screen {
            Screen::SignUp => FormState::SignUp(Default::default()),
            Screen::Login => FormState::Login(Default::default()),
        };
        self.status_message = None;
    }

    /// Drop the active form and everything typed into it
    pub fn close(&mut self) {
        self.form = FormState::None;
        self.status_message = None;
    }

    /// Serializable view of the active form
    pub fn snapshot(&self) -> Snapshot {
        let (screen, fields, address) = match &self.form {
            FormState::None => (None, Vec::new(), None),
            FormState::SignUp(f) => (
                Some("signup"),
                f.fields().into_iter().map(FieldSnapshot::from).collect(),
                Some(f.address.display_text()),
            ),
            FormState::Login(f) => (
                Some("login"),
                f.fields().into_iter().map(FieldSnapshot::from).collect(),
                None,
            ),
        };
        let active_field = self
            .form
            .as_form()
            .and_then(|f| f.get_field(f.active_field()))
            .map(|f| f.name.clone());

        Snapshot {
            screen,
            active_field,
            fields,
            address,
            status: self.status_message.clone(),
        }
    }
}

/// What a renderer needs to draw one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub display: String,
    pub error: Option<&'static str>,
}

impl From<&FormField> for FieldSnapshot {
    fn from(field: &FormField) -> Self {
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            kind: field.kind,
            value: if field.kind.is_secret() {
                field.display_value()
            } else {
                field.as_text().to_string()
            },
            display: field.display_value(),
            error: field.error_message(),
        }
    }
}

/// What a renderer needs to draw the active screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub screen: Option<&'static str>,
    pub active_field: Option<String>,
    pub fields: Vec<FieldSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
