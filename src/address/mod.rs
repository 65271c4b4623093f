//! Address lookup keyed on CEP

mod client;
mod error;
mod traits;

pub use client::{is_valid_cep, ViaCepClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::AddressError;
pub use traits::AddressLookup;

#[cfg(test)]
pub use traits::MockAddressLookup;
