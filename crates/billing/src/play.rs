use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use playbill_core::{DomainError, DomainResult, ValueObject};

/// Play identifier as used by invoices (e.g. `"hamlet"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Genres the pricing rules know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Genre {
    type Err = DomainError;

    /// Exact, case-sensitive match on the catalogue spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            other => Err(DomainError::unknown_genre(other)),
        }
    }
}

/// Catalogue entry for a play.
///
/// The genre is kept as the raw catalogue string so an unsupported genre can
/// be reported verbatim when a performance of it is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValueObject for Play {}

impl Play {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn tragedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Tragedy.as_str())
    }

    pub fn comedy(name: impl Into<String>) -> Self {
        Self::new(name, Genre::Comedy.as_str())
    }

    /// Parsed genre; `UnknownGenre` carries the raw string.
    pub fn genre(&self) -> DomainResult<Genre> {
        self.kind.parse()
    }
}

/// Read-only mapping from play id to play, passed explicitly to everything
/// that needs to resolve a performance.
///
/// Serializes as a plain JSON object keyed by play id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalogue(BTreeMap<PlayId, Play>);

impl PlayCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated id replaces the earlier entry.
    pub fn with_play(mut self, id: impl Into<PlayId>, play: Play) -> Self {
        self.0.insert(id.into(), play);
        self
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.0.iter()
    }
}

impl ValueObject for PlayCatalogue {}

impl FromIterator<(PlayId, Play)> for PlayCatalogue {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
