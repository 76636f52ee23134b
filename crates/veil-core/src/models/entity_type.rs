use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// PII category label. The set is open: recognizers may introduce their own
/// names, the constants below cover the built-in recognizers.
///
/// Ordering is by name, which the resolver relies on for its final tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(Cow<'static, str>);

impl EntityType {
    pub const EMAIL: EntityType = EntityType::from_static("EMAIL");
    pub const PHONE: EntityType = EntityType::from_static("PHONE");
    pub const PERSON: EntityType = EntityType::from_static("PERSON");
    pub const SSN: EntityType = EntityType::from_static("SSN");
    pub const CREDIT_CARD: EntityType = EntityType::from_static("CREDIT_CARD");
    pub const IP_ADDRESS: EntityType = EntityType::from_static("IP_ADDRESS");
    pub const IBAN: EntityType = EntityType::from_static("IBAN");
    pub const MAC_ADDRESS: EntityType = EntityType::from_static("MAC_ADDRESS");
    pub const LOCATION: EntityType = EntityType::from_static("LOCATION");
    pub const AWS_ACCESS_KEY: EntityType = EntityType::from_static("AWS_ACCESS_KEY");
    pub const AWS_SECRET_KEY: EntityType = EntityType::from_static("AWS_SECRET_KEY");
    pub const ACCESS_TOKEN: EntityType = EntityType::from_static("ACCESS_TOKEN");
    pub const API_KEY: EntityType = EntityType::from_static("API_KEY");
    pub const JWT: EntityType = EntityType::from_static("JWT");
    pub const PASSWORD: EntityType = EntityType::from_static("PASSWORD");
    pub const PRIVATE_KEY: EntityType = EntityType::from_static("PRIVATE_KEY");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Build an entity type from a runtime name. Names are upper-cased so
    /// config keys like `email` and `EMAIL` refer to the same type.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Cow::Owned(name.as_ref().trim().to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
