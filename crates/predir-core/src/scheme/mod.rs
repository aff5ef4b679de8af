//! URL scheme model.
//!
//! A [`Scheme`] is always lowercase and carries its trailing colon (`"s3:"`).
//! Schemes obtained through [`Scheme::parse`] additionally satisfy the
//! registrable syntax (`^[a-z0-9+]{2,}:$`); schemes obtained through
//! [`extract_scheme`] only satisfy the looser URL prefix syntax.

mod extract;
mod normalize;

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SchemeError;

pub use extract::{extract_scheme, is_protocol_relative};
pub use normalize::{is_valid_scheme, normalize};

/// Normalized URL scheme including the trailing colon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Scheme(String);

impl Scheme {
    /// Normalizes `raw` and checks it against the registrable syntax.
    ///
    /// # Examples
    ///
    /// - `Scheme::parse("S3://")` → `Ok("s3:")`
    /// - `Scheme::parse("a:")` → `Err(InvalidProtocol)`
    pub fn parse(raw: &str) -> Result<Self, SchemeError> {
        let normalized = normalize(raw);
        if is_valid_scheme(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(SchemeError::InvalidProtocol {
                scheme: raw.to_string(),
            })
        }
    }

    /// Built-in schemes known to be valid at compile time.
    pub(crate) fn from_static(scheme: &'static str) -> Self {
        debug_assert!(is_valid_scheme(scheme), "{scheme} is not registrable");
        Self(scheme.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Scheme {
    fn borrow(&self) -> &str {
        &self.0
    }
}
