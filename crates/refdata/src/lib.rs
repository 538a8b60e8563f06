//! `freightdesk-refdata` — canonical reference enumerations.
//!
//! ISO country names and ISO-4217 currency codes, compiled in and wrapped by
//! immutable lookup types. Validators take these by injection at construction
//! time so tests can substitute small custom sets.

pub mod countries;
pub mod currencies;

pub use countries::{CountrySet, ISO_COUNTRIES};
pub use currencies::{CurrencySet, ISO_4217_CURRENCIES};
