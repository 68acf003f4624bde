//! Vendor-native adapter addressed with a query-string key.

mod provider;
mod serde_api;
mod tests;

pub use provider::DirectProvider;
