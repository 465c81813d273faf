use core::str::FromStr;

use serde::{Deserialize, Serialize};

use kassa_core::DomainError;

/// Customer identifier (numeric account number).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for CustomerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for CustomerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("CustomerId: {e}")))?;
        Ok(Self(id))
    }
}

/// Identity record for a shopper.
///
/// Immutable after creation; used solely as the cart owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    phone: String,
}

impl Customer {
    pub fn new(id: CustomerId, phone: impl Into<String>) -> Self {
        Self {
            id,
            phone: phone.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}
