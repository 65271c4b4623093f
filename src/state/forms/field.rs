//! Form field value objects

use super::sanitizer::{apply_mask, sanitize, validate_required};
use serde::Serialize;

/// Which input rule a field follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Cpf,
    BirthDate,
    Cep,
    Password,
}

impl FieldKind {
    /// Maximum accepted length in characters, `None` when unbounded
    pub fn max_length(self) -> Option<usize> {
        match self {
            FieldKind::Name => None,
            FieldKind::Cpf => Some(11),
            FieldKind::BirthDate | FieldKind::Cep | FieldKind::Password => Some(8),
        }
    }

    /// Display mask, `#` marks a digit slot
    pub fn mask(self) -> Option<&'static str> {
        match self {
            FieldKind::Cpf => Some("###.###.###-##"),
            FieldKind::BirthDate => Some("##/##/####"),
            FieldKind::Cep => Some("#####-###"),
            FieldKind::Name | FieldKind::Password => None,
        }
    }

    /// Message shown under the field when it is required and empty.
    ///
    /// `None` for kinds no form requires.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            FieldKind::Name => Some("O nome é obrigatório"),
            FieldKind::Cpf => Some("O CPF é obrigatório"),
            FieldKind::Cep => Some("O CEP é obrigatório"),
            FieldKind::Password => Some("A Senha é obrigatória"),
            FieldKind::BirthDate => None,
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldKind::Password)
    }
}

/// Represents a single form field with its rule and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    value: String,
    /// Set by the last submit when the field was required and empty
    pub error: bool,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            error: false,
        }
    }

    /// Get the stored value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Offer a whole new value to the field.
    ///
    /// Returns true when the accepted value differs from the old one.
    pub fn set_text(&mut self, candidate: &str) -> bool {
        let accepted = sanitize(self.kind, &self.value, candidate);
        if accepted == self.value {
            return false;
        }
        self.value = accepted;
        true
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) -> bool {
        let mut candidate = self.value.clone();
        candidate.push(c);
        self.set_text(&candidate)
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        let mut candidate = self.value.clone();
        if candidate.pop().is_none() {
            return false;
        }
        self.set_text(&candidate)
    }

    /// Clear the field value
    pub fn clear(&mut self) -> bool {
        self.set_text("")
    }

    /// Run the required check and remember the outcome
    pub fn check_required(&mut self) -> bool {
        self.error = validate_required(&self.value);
        self.error
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.kind.is_secret() {
            return "•".repeat(self.value.chars().count());
        }
        match self.kind.mask() {
            Some(mask) => apply_mask(mask, &self.value),
            None => self.value.clone(),
        }
    }

    /// Error message to show, if the last submit flagged this field
    pub fn error_message(&self) -> Option<&'static str> {
        self.kind.required_message().filter(|_| self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = FormField::new("cpf", "CPF", FieldKind::Cpf);
        assert_eq!(field.as_text(), "");
        assert!(!field.error);
    }

    #[test]
    fn test_set_text_sanitizes() {
        let mut field = FormField::new("cpf", "CPF", FieldKind::Cpf);
        assert!(field.set_text("123.456.789-01"));
        assert_eq!(field.as_text(), "12345678901");
    }

    #[test]
    fn test_set_text_reports_unchanged() {
        let mut field = FormField::new("cep", "CEP", FieldKind::Cep);
        field.set_text("01310100");
        assert!(!field.set_text("01310-100"));
        assert!(!field.set_text("013101001"));
        assert_eq!(field.as_text(), "01310100");
    }

    #[test]
    fn test_push_char_stops_at_max_length() {
        let mut field = FormField::new("pwd", "Senha", FieldKind::Password);
        for c in "123456789".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "12345678");
    }

    #[test]
    fn test_push_char_drops_disallowed() {
        let mut field = FormField::new("name", "Nome", FieldKind::Name);
        assert!(field.push_char('A'));
        assert!(!field.push_char('7'));
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_char() {
        let mut field = FormField::new("name", "Nome", FieldKind::Name);
        field.set_text("Zé");
        assert!(field.pop_char());
        assert_eq!(field.as_text(), "Z");
        field.pop_char();
        assert!(!field.pop_char());
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::new("cep", "CEP", FieldKind::Cep);
        field.set_text("01310100");
        assert!(field.clear());
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_check_required_sets_error() {
        let mut field = FormField::new("cpf", "CPF", FieldKind::Cpf);
        assert!(field.check_required());
        assert_eq!(field.error_message(), Some("O CPF é obrigatório"));
        field.set_text("1");
        assert!(!field.check_required());
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_display_value_masks() {
        let mut cpf = FormField::new("cpf", "CPF", FieldKind::Cpf);
        cpf.set_text("12345678901");
        assert_eq!(cpf.display_value(), "123.456.789-01");

        let mut pwd = FormField::new("pwd", "Senha", FieldKind::Password);
        pwd.set_text("1234");
        assert_eq!(pwd.display_value(), "••••");

        let mut name = FormField::new("name", "Nome", FieldKind::Name);
        name.set_text("Ana");
        assert_eq!(name.display_value(), "Ana");
    }

    #[test]
    fn test_kind_rules() {
        assert_eq!(FieldKind::Name.max_length(), None);
        assert_eq!(FieldKind::Cpf.max_length(), Some(11));
        assert_eq!(FieldKind::BirthDate.max_length(), Some(8));
        assert_eq!(FieldKind::Cep.max_length(), Some(8));
        assert_eq!(FieldKind::Password.max_length(), Some(8));
        assert!(FieldKind::Password.is_secret());
        assert!(!FieldKind::Cep.is_secret());
    }

    #[test]
    fn test_birth_date_has_no_required_message() {
        assert_eq!(FieldKind::BirthDate.required_message(), None);
        assert_eq!(FieldKind::Name.required_message(), Some("O nome é obrigatório"));

        let mut field = FormField::new("birth_date", "Data de nascimento", FieldKind::BirthDate);
        assert!(field.check_required());
        assert_eq!(field.error_message(), None);
    }
}
