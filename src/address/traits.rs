//! Trait abstraction for address lookup to enable mocking in tests

use super::AddressError;
use crate::state::Address;
use async_trait::async_trait;

/// Resolves a CEP to a street address
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Look up the address for an eight-digit CEP
    async fn lookup(&self, cep: &str) -> Result<Address, AddressError>;
}
