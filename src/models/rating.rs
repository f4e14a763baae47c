//! Content rating of a post or tag
//! # Post Rating
//! Sankaku classifies every post by how explicit it is, and sends the classification as a
//! single-letter code:
//! * `s` - `Safe`: Posts that don't involve anything suggestive.
//! * `q` - `Questionable`: Posts with nudity or other suggestive elements.
//! * `e` - `Explicit`: Posts that are explicitly pornographic or otherwise sensitive.
//!
//! Any other code is rejected while deserializing.
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown rating: {0}")]
pub struct UnknownRating(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Safe,
    Questionable,
    Explicit,
}

impl Rating {
    /// The wire code used by the API.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Safe => "s",
            Self::Questionable => "q",
            Self::Explicit => "e",
        }
    }
}

impl FromStr for Rating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Self::Safe),
            "q" => Ok(Self::Questionable),
            "e" => Ok(Self::Explicit),
            other => Err(UnknownRating(other.to_string())),
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Questionable => write!(f, "Questionable"),
            Self::Explicit => write!(f, "Explicit"),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}
