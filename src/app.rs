//! Application state and core logic

use crate::address::{AddressLookup, ViaCepClient};
use crate::config::AppConfig;
use crate::input::InputEvent;
use crate::state::{Address, AppState, FormState};
use anyhow::Result;

/// Main application struct
pub struct App<L = ViaCepClient> {
    /// Current application state
    pub state: AppState,
    /// Address service used when the CEP changes
    lookup: L,
    /// Whether the app should quit
    quit: bool,
}

impl App<ViaCepClient> {
    /// Create a new App talking to the configured CEP service
    pub fn new(config: &AppConfig) -> Result<Self> {
        let lookup = ViaCepClient::from_config(config)?;
        tracing::info!(base_url = lookup.base_url(), "address lookup configured");
        Ok(Self::with_lookup(lookup))
    }
}

impl<L: AddressLookup> App<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self {
            state: AppState::default(),
            lookup,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a single input event
    pub async fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Open(screen) => {
                tracing::debug!(?screen, "opening form");
                self.state.open(screen);
            }
            InputEvent::Close => self.state.close(),
            InputEvent::Set { field, value } => {
                let cep_before = self.sign_up_cep();
                match self.state.form.field_by_name_mut(&field) {
                    Some(f) => {
                        f.set_text(&value);
                    }
                    None => {
                        tracing::debug!(%field, "no such field on the active form");
                        self.state.status_message = Some(format!("Campo desconhecido: {field}"));
                    }
                }
                self.after_edit(cep_before).await;
            }
            InputEvent::Type(text) => {
                let cep_before = self.sign_up_cep();
                if let Some(f) = self.state.form.get_active_field_mut() {
                    for c in text.chars() {
                        f.push_char(c);
                    }
                }
                self.after_edit(cep_before).await;
            }
            InputEvent::Backspace => {
                let cep_before = self.sign_up_cep();
                if let Some(f) = self.state.form.get_active_field_mut() {
                    f.pop_char();
                }
                self.after_edit(cep_before).await;
            }
            InputEvent::NextField => self.state.form.next_field(),
            InputEvent::PrevField => self.state.form.prev_field(),
            InputEvent::Submit => self.submit(),
            InputEvent::Quit => self.quit = true,
        }
    }

    fn sign_up_cep(&self) -> Option<String> {
        match &self.state.form {
            FormState::SignUp(f) => Some(f.cep.as_text().to_string()),
            _ => None,
        }
    }

    /// Re-resolve the address when an edit changed the accepted CEP
    async fn after_edit(&mut self, cep_before: Option<String>) {
        let cep_after = self.sign_up_cep();
        if cep_before.is_none() || cep_after == cep_before {
            return;
        }
        if let Some(cep) = cep_after {
            self.refresh_address(&cep).await;
        }
    }

    async fn refresh_address(&mut self, cep: &str) {
        let address = match self.lookup.lookup(cep).await {
            Ok(address) => address,
            Err(e) => {
                tracing::debug!(%cep, error = %e, "address lookup failed");
                Address::default()
            }
        };
        if let FormState::SignUp(f) = &mut self.state.form {
            f.address = address;
        }
    }

    fn submit(&mut self) {
        match &mut self.state.form {
            FormState::None => {}
            FormState::SignUp(f) => match f.submit() {
                Ok(data) => {
                    tracing::info!(cep = %data.cep, "sign-up accepted");
                    self.state.status_message = Some("Cadastro concluído".to_string());
                }
                Err(rejected) => {
                    tracing::debug!(%rejected, "sign-up rejected");
                    let messages: Vec<String> =
                        rejected.missing.iter().map(ToString::to_string).collect();
                    self.state.status_message = Some(messages.join("; "));
                }
            },
            FormState::Login(f) => {
                let _credentials = f.submit();
                // TODO: send credentials once an authentication endpoint exists
                tracing::warn!("login submission is not wired to a backend");
                self.state.status_message = None;
            }
        }
    }
}
