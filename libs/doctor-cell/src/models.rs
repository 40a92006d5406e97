use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use shared_models::names::capitalize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProviderRole {
    #[serde(alias = "md")]
    Doctor,
    #[serde(alias = "rn")]
    Nurse,
}

impl ProviderRole {
    /// Credential suffix shown after the provider's name.
    pub fn suffix(&self) -> &'static str {
        match self {
            ProviderRole::Doctor => "MD",
            ProviderRole::Nurse => "RN",
        }
    }
}

impl fmt::Display for ProviderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderRole::Doctor => write!(f, "doctor"),
            ProviderRole::Nurse => write!(f, "nurse"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provider {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub specialty: String,
    pub role: ProviderRole,
}

impl Provider {
    pub fn new(request: CreateProviderRequest) -> Self {
        let provider = Self {
            id: Uuid::new_v4(),
            first_name: capitalize(&request.first_name),
            last_name: capitalize(&request.last_name),
            license_number: request.license_number,
            specialty: request.specialty,
            role: request.role,
        };
        debug!("Created {} {} with ID: {}", provider.role, provider.full_name(), provider.id);
        provider
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn display_name(&self) -> String {
        format!("{}, {}", self.full_name(), self.role.suffix())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProviderRequest {
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub specialty: String,
    pub role: ProviderRole,
}
