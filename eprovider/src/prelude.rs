//! Common `eprovider` imports for downstream crates.

pub use crate::{
    ChatProvider, CompletionRequest, HttpProviderFactory, Message, NoopOperationHooks,
    ProviderConfig, ProviderError, ProviderErrorKind, ProviderFactory, ProviderFuture,
    ProviderKind, ProviderOperationHooks, ProviderTransport, ResponseFormat, Role, SecretString,
};
pub use ecommon::BoxFuture;
