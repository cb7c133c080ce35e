use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ObjectError {
    #[error("object name cannot be empty")]
    EmptyName,

    #[error("object {name} has no facts")]
    NoFacts { name: String },
}

/// Something the object detective can "recognize", with kid-sized facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ObjectRecord")]
pub struct DiscoverableObject {
    name: String,
    emoji: String,
    facts: Vec<String>,
}

#[derive(Deserialize)]
struct ObjectRecord {
    name: String,
    emoji: String,
    facts: Vec<String>,
}

impl TryFrom<ObjectRecord> for DiscoverableObject {
    type Error = ObjectError;

    fn try_from(record: ObjectRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.emoji, record.facts)
    }
}

impl DiscoverableObject {
    /// # Errors
    ///
    /// Returns `ObjectError::EmptyName` for a blank name and
    /// `ObjectError::NoFacts` when no non-blank fact is given.
    pub fn new<I, S>(name: impl Into<String>, emoji: impl Into<String>, facts: I) -> Result<Self, ObjectError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ObjectError::EmptyName);
        }

        let facts: Vec<String> = facts
            .into_iter()
            .map(Into::into)
            .filter(|fact| !fact.trim().is_empty())
            .collect();
        if facts.is_empty() {
            return Err(ObjectError::NoFacts { name });
        }

        Ok(Self {
            name,
            emoji: emoji.into(),
            facts,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }
}
