pub mod models;

pub use models::{CreateProviderRequest, Provider, ProviderRole};
