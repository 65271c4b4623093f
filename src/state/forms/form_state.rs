//! Form state management and form structs

use super::field::{FieldKind, FormField};
use crate::state::Address;
use chrono::NaiveDate;
use thiserror::Error;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;

    /// Index of the field with the given name
    fn field_index(&self, name: &str) -> Option<usize> {
        (0..self.field_count()).find(|&i| self.get_field(i).is_some_and(|f| f.name == name))
    }

    fn fields(&self) -> Vec<&FormField> {
        (0..self.field_count())
            .filter_map(|i| self.get_field(i))
            .collect()
    }
}

/// A required field that was empty at submit time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequiredFieldError {
    pub kind: FieldKind,
    pub message: &'static str,
}

/// Sign-up submission refused because required fields were empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} campo(s) obrigatório(s) vazio(s)", .missing.len())]
pub struct SignUpRejected {
    pub missing: Vec<RequiredFieldError>,
}

/// Values handed on after a successful sign-up submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpData {
    pub name: String,
    pub cpf: String,
    pub birth_date: Option<NaiveDate>,
    pub cep: String,
    pub password: String,
    pub address: Address,
}

/// Values handed on by the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub cpf: String,
    pub password: String,
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    SignUp(SignUpForm),
    Login(LoginForm),
}

impl FormState {
    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            FormState::None => None,
            FormState::SignUp(f) => Some(f),
            FormState::Login(f) => Some(f),
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            FormState::None => None,
            FormState::SignUp(f) => Some(f),
            FormState::Login(f) => Some(f),
        }
    }

    pub fn next_field(&mut self) {
        if let Some(f) = self.as_form_mut() {
            f.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(f) = self.as_form_mut() {
            f.prev_field();
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.as_form_mut().map(|f| f.get_active_field_mut())
    }

    /// Look up a field of the active form by name
    pub fn field_by_name_mut(&mut self, name: &str) -> Option<&mut FormField> {
        let form = self.as_form_mut()?;
        let index = form.field_index(name)?;
        form.get_field_mut(index)
    }
}

// Sign-up Form
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: FormField,
    pub cpf: FormField,
    pub birth_date: FormField,
    pub cep: FormField,
    pub password: FormField,
    /// Resolved from the CEP, read-only
    pub address: Address,
    pub active_field_index: usize,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new("name", "Nome", FieldKind::Name),
            cpf: FormField::new("cpf", "CPF", FieldKind::Cpf),
            birth_date: FormField::new("birth_date", "Data de nascimento", FieldKind::BirthDate),
            cep: FormField::new("cep", "CEP", FieldKind::Cep),
            password: FormField::new("password", "Senha", FieldKind::Password),
            address: Address::default(),
            active_field_index: 0,
        }
    }

    /// Birth date as a calendar date, when all eight digits form a real day
    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        let value = self.birth_date.as_text();
        if value.len() != 8 {
            return None;
        }
        NaiveDate::parse_from_str(value, "%d%m%Y").ok()
    }

    /// Flag every empty required field; hand back the values if none are.
    ///
    /// Birth date is collected but not required.
    pub fn submit(&mut self) -> Result<SignUpData, SignUpRejected> {
        let missing: Vec<RequiredFieldError> = [
            &mut self.name,
            &mut self.cpf,
            &mut self.cep,
            &mut self.password,
        ]
        .into_iter()
        .filter_map(|field| {
            field.check_required();
            field.error_message().map(|message| RequiredFieldError {
                kind: field.kind,
                message,
            })
        })
        .collect();

        if !missing.is_empty() {
            return Err(SignUpRejected { missing });
        }

        Ok(SignUpData {
            name: self.name.as_text().to_string(),
            cpf: self.cpf.as_text().to_string(),
            birth_date: self.parsed_birth_date(),
            cep: self.cep.as_text().to_string(),
            password: self.password.as_text().to_string(),
            address: self.address.clone(),
        })
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        5
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.cpf,
            2 => &mut self.birth_date,
            3 => &mut self.cep,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.cpf),
            2 => Some(&self.birth_date),
            3 => Some(&self.cep),
            4 => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.cpf),
            2 => Some(&mut self.birth_date),
            3 => Some(&mut self.cep),
            4 => Some(&mut self.password),
            _ => None,
        }
    }
}

// Login Form
/// Login screen state.
///
/// Fields use the Cpf and Password rules, although the login screen this
/// replaces took raw input. No required-field check runs on submit.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub cpf: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            cpf: FormField::new("cpf", "CPF", FieldKind::Cpf),
            password: FormField::new("password", "Senha", FieldKind::Password),
            active_field_index: 0,
        }
    }

    /// Hand back the entered credentials.
    ///
    /// No required-field check runs here, unlike sign-up.
    pub fn submit(&self) -> LoginCredentials {
        LoginCredentials {
            cpf: self.cpf.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.cpf,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.cpf),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.cpf),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_sign_up() -> SignUpForm {
        let mut form = SignUpForm::new();
        form.name.set_text("João da Silva");
        form.cpf.set_text("123.456.789-01");
        form.cep.set_text("01310-100");
        form.password.set_text("12345678");
        form
    }

    mod form_state_enum {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_none() {
            let state = FormState::default();
            assert!(matches!(state, FormState::None));
        }

        #[test]
        fn test_next_field_on_none_is_noop() {
            let mut state = FormState::None;
            state.next_field(); // Should not panic
            state.prev_field();
        }

        #[test]
        fn test_get_active_field_mut_none_returns_none() {
            let mut state = FormState::None;
            assert!(state.get_active_field_mut().is_none());
        }

        #[test]
        fn test_next_field_cycles_through_form() {
            let mut state = FormState::SignUp(SignUpForm::new());
            state.next_field();
            if let FormState::SignUp(ref f) = state {
                assert_eq!(f.active_field_index, 1);
            }
        }

        #[test]
        fn test_get_active_field_mut_returns_field() {
            let mut state = FormState::Login(LoginForm::new());
            let field = state.get_active_field_mut();
            assert_eq!(field.unwrap().name, "cpf");
        }

        #[test]
        fn test_field_by_name_mut() {
            let mut state = FormState::SignUp(SignUpForm::new());
            let field = state.field_by_name_mut("cep").unwrap();
            assert_eq!(field.kind, FieldKind::Cep);
            assert!(state.field_by_name_mut("address").is_none());
            assert!(FormState::None.field_by_name_mut("cep").is_none());
        }
    }

    mod sign_up_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SignUpForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.field_count(), 5);
            assert_eq!(form.address, Address::default());
            for field in form.fields() {
                assert_eq!(field.as_text(), "");
                assert!(!field.error);
            }
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = SignUpForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(1).unwrap().name, "cpf");
            assert_eq!(form.get_field(2).unwrap().name, "birth_date");
            assert_eq!(form.get_field(3).unwrap().name, "cep");
            assert_eq!(form.get_field(4).unwrap().name, "password");
            assert!(form.get_field(5).is_none());
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = SignUpForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 4);
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignUpForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_submit_empty_flags_required_fields() {
            let mut form = SignUpForm::new();
            let err = form.submit().unwrap_err();
            let kinds: Vec<FieldKind> = err.missing.iter().map(|e| e.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    FieldKind::Name,
                    FieldKind::Cpf,
                    FieldKind::Cep,
                    FieldKind::Password
                ]
            );
            assert!(form.name.error);
            assert!(form.cpf.error);
            assert!(form.cep.error);
            assert!(form.password.error);
            assert!(!form.birth_date.error);
        }

        #[test]
        fn test_submit_reports_messages() {
            let mut form = filled_sign_up();
            form.cpf.clear();
            let err = form.submit().unwrap_err();
            assert_eq!(err.missing.len(), 1);
            assert_eq!(err.missing[0].to_string(), "O CPF é obrigatório");
        }

        #[test]
        fn test_submit_success_clears_errors() {
            let mut form = SignUpForm::new();
            assert!(form.submit().is_err());

            form.name.set_text("João da Silva");
            form.cpf.set_text("12345678901");
            form.cep.set_text("01310100");
            form.password.set_text("1234");
            form.address = Address {
                street: "Avenida Paulista".to_string(),
                neighborhood: "Bela Vista".to_string(),
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
            };

            let data = form.submit().unwrap();
            assert_eq!(data.name, "João da Silva");
            assert_eq!(data.cep, "01310100");
            assert_eq!(data.birth_date, None);
            assert_eq!(data.address.city, "São Paulo");
            assert!(form.fields().iter().all(|f| !f.error));
        }

        #[test]
        fn test_birth_date_not_required() {
            let mut form = filled_sign_up();
            assert!(form.submit().is_ok());
        }

        #[test]
        fn test_parsed_birth_date() {
            let mut form = filled_sign_up();
            form.birth_date.set_text("31/12/1990");
            assert_eq!(
                form.parsed_birth_date(),
                NaiveDate::from_ymd_opt(1990, 12, 31)
            );
            form.birth_date.set_text("31021990");
            assert_eq!(form.parsed_birth_date(), None);
            form.birth_date.set_text("3112");
            assert_eq!(form.parsed_birth_date(), None);
        }
    }

    mod login_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = LoginForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.field_count(), 2);
        }

        #[test]
        fn test_fields_are_sanitized() {
            let mut form = LoginForm::new();
            form.cpf.set_text("123.456.789-01");
            form.password.set_text("abc1234");
            assert_eq!(form.cpf.as_text(), "12345678901");
            assert_eq!(form.password.as_text(), "1234");
        }

        #[test]
        fn test_submit_runs_no_required_check() {
            let form = LoginForm::new();
            let credentials = form.submit();
            assert_eq!(
                credentials,
                LoginCredentials {
                    cpf: String::new(),
                    password: String::new(),
                }
            );
            assert!(!form.cpf.error);
            assert!(!form.password.error);
        }

        #[test]
        fn test_field_index() {
            let form = LoginForm::new();
            assert_eq!(form.field_index("password"), Some(1));
            assert_eq!(form.field_index("name"), None);
        }
    }
}
