//! Canonical identifiers.
//!
//! Showdown keys every species and move by an id derived from its display
//! name: lowercase, with everything outside `[a-z0-9]` dropped
//! ("Mr. Mime" -> `mrmime`, "U-turn" -> `uturn`).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Normalize free text into the canonical id alphabet.
///
/// Lowercases first, then keeps only ASCII letters and digits, so accented
/// letters are dropped rather than folded ("Flabébé" -> `flabb`).
pub fn to_id(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// A canonical catalog key, only constructed through [`Id::from_name`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Derive the id of a display name. May be empty for names with no
    /// ASCII alphanumerics.
    pub fn from_name(name: &str) -> Self {
        Id(to_id(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
