//! Cidade Limpa - form core for the waste-collection-point locator
//!
//! Keystroke sanitization, sign-up and login form state, and CEP address
//! lookup. Screens display what the forms hold and feed them input events.

pub mod address;
pub mod app;
pub mod config;
pub mod input;
pub mod state;

pub use address::{AddressError, AddressLookup, ViaCepClient};
pub use app::App;
pub use config::AppConfig;
pub use input::{InputError, InputEvent};
pub use state::{
    apply_mask, sanitize, validate_required, Address, FieldKind, FormField, LoginForm,
    SignUpForm,
};
