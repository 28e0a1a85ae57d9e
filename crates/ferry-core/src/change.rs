//! Origin-side change references carried by a destination effect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use time::OffsetDateTime;

/// Origin revision identifier (commit sha, changelist number, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Revision {
    id: String,
    #[serde(default)]
    context_ref: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl Revision {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context_ref: None,
            url: None,
        }
    }

    pub fn with_context_ref(mut self, context_ref: impl Into<String>) -> Self {
        self.context_ref = Some(context_ref.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reference the revision was resolved from (e.g. "main", "refs/changes/45/1245/3").
    pub fn context_ref(&self) -> Option<&str> {
        self.context_ref.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Author of an origin change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    name: String,
    email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// A single origin change included in a migration.
///
/// Equality and hashing cover every field. `OffsetDateTime` alone compares
/// instants, so the date's offset is compared separately: the same instant
/// recorded in two offsets renders differently and is a different change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Change {
    revision: Revision,
    author: Author,
    message: String,
    #[serde(with = "time::serde::rfc3339")]
    date: OffsetDateTime,
    #[serde(default)]
    labels: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    merge: bool,
}

impl Change {
    pub fn new(
        revision: Revision,
        author: Author,
        message: impl Into<String>,
        date: OffsetDateTime,
    ) -> Self {
        Self {
            revision,
            author,
            message: message.into(),
            date,
            labels: BTreeMap::new(),
            merge: false,
        }
    }

    /// Append a value to a label. Repeated labels keep insertion order.
    pub fn with_label(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.entry(name.into()).or_default().push(value.into());
        self
    }

    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message up to (not including) the first newline.
    pub fn first_line_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn date(&self) -> OffsetDateTime {
        self.date
    }

    pub fn labels(&self) -> &BTreeMap<String, Vec<String>> {
        &self.labels
    }

    /// All values recorded for `name`, oldest first. Empty when absent.
    pub fn label(&self, name: &str) -> &[String] {
        self.labels.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_merge(&self) -> bool {
        self.merge
    }
}

impl PartialEq for Change {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
            && self.author == other.author
            && self.message == other.message
            && self.date == other.date
            && self.date.offset() == other.date.offset()
            && self.labels == other.labels
            && self.merge == other.merge
    }
}

impl Eq for Change {}

impl Hash for Change {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.revision.hash(state);
        self.author.hash(state);
        self.message.hash(state);
        self.date.hash(state);
        self.date.offset().hash(state);
        self.labels.hash(state);
        self.merge.hash(state);
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Change{{revision={}, author={}, date={}, message={:?}}}",
            self.revision,
            self.author,
            self.date,
            self.first_line_message()
        )
    }
}
