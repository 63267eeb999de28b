//! Identifier provenance
//!
//! Combined identifiers follow one rule:
//!
//! - personal: `<id>`
//! - community: `community-<id>`
//! - commercial: `commercial-<id>`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reserved separator between the provenance tag and the rest of an identifier.
pub const SEPARATOR: char = '-';

/// Origin class of a child-app identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Team-owned application in the document store
    Personal,
    /// Community plugin from the static registry
    Community,
    /// Commercial plugin from the static registry
    Commercial,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Personal => "personal",
            Provenance::Community => "community",
            Provenance::Commercial => "commercial",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Provenance::Personal),
            "community" => Ok(Provenance::Community),
            "commercial" => Ok(Provenance::Commercial),
            other => Err(format!("unknown provenance tag: {other}")),
        }
    }
}

/// A combined identifier split into its provenance and lookup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedId {
    pub provenance: Provenance,
    /// Key used against the backing source. Registry ids keep their prefix.
    pub bare_id: String,
}

impl DecodedId {
    pub fn new(provenance: Provenance, bare_id: impl Into<String>) -> Self {
        Self {
            provenance,
            bare_id: bare_id.into(),
        }
    }
}
