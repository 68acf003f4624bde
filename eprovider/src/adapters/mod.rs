#[cfg(feature = "provider-proxy")]
pub mod proxy;

#[cfg(feature = "provider-direct")]
pub mod direct;
