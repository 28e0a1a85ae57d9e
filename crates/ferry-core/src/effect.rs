//! The result of writing one migration to one destination.
//!
//! A [`DestinationEffect`] is built once by the destination write step and is
//! immutable afterwards: fields are private, sequences are owned copies, and
//! every accessor hands out a shared borrow. Records are plain values, so
//! equality and hashing are structural over all five fields.

use crate::change::Change;
use crate::error::EffectError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of what happened at the destination.
///
/// The set is closed. Consumers match on it exhaustively, so a new outcome is
/// a breaking change that every match must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    /// A new review or change was created.
    Created,
    /// An existing review or change was updated.
    Updated,
    /// Nothing needed to change. The destination ref may still be populated
    /// when the no-op was detected against an existing pending change.
    Noop,
    /// The origin change lacks the approvals the destination requires.
    InsufficientApprovals,
    /// A user attributable error prevented the write. The destination ref and
    /// partial errors may still be populated.
    Error,
}

impl EffectType {
    pub const ALL: [EffectType; 5] = [
        EffectType::Created,
        EffectType::Updated,
        EffectType::Noop,
        EffectType::InsufficientApprovals,
        EffectType::Error,
    ];

    /// Upper-case name, as exposed to post-migration scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Created => "CREATED",
            EffectType::Updated => "UPDATED",
            EffectType::Noop => "NOOP",
            EffectType::InsufficientApprovals => "INSUFFICIENT_APPROVALS",
            EffectType::Error => "ERROR",
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EffectType {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EffectError::UnknownType(s.to_string()))
    }
}

/// Reference to the change or review created/updated on the destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationRef {
    id: String,
    #[serde(rename = "type")]
    ref_type: String,
    url: Option<String>,
}

impl DestinationRef {
    pub fn new(id: impl Into<String>, ref_type: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id: id.into(),
            ref_type: ref_type.into(),
            url,
        }
    }

    pub fn builder() -> DestinationRefBuilder {
        DestinationRefBuilder::default()
    }

    /// Destination defined identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Category label such as "pull_request" or "gerrit_change".
    ///
    /// Each destination guarantees this to be more stable than `id` or
    /// `url`, so tooling should key behavior off it.
    pub fn ref_type(&self) -> &str {
        &self.ref_type
    }

    /// Browsable location of the destination change, if it has one.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for DestinationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DestinationRef{{id={}, type={}, url=", self.id, self.ref_type)?;
        match &self.url {
            Some(url) => write!(f, "{url}}}"),
            None => f.write_str("null}"),
        }
    }
}

/// Incremental construction of a [`DestinationRef`].
#[derive(Debug, Clone, Default)]
pub struct DestinationRefBuilder {
    id: Option<String>,
    ref_type: Option<String>,
    url: Option<String>,
}

impl DestinationRefBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn ref_type(mut self, ref_type: impl Into<String>) -> Self {
        self.ref_type = Some(ref_type.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<DestinationRef, EffectError> {
        Ok(DestinationRef {
            id: self.id.ok_or(EffectError::MissingField("id"))?,
            ref_type: self.ref_type.ok_or(EffectError::MissingField("type"))?,
            url: self.url,
        })
    }
}

/// An effect that happened in the destination as a consequence of a single
/// migration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationEffect {
    #[serde(rename = "type")]
    effect_type: EffectType,
    summary: String,
    origin_refs: Vec<Change>,
    destination_ref: Option<DestinationRef>,
    errors: Vec<String>,
}

impl DestinationEffect {
    /// Build a record. Both sequences are collected into storage owned by
    /// the record, so later changes to the caller's collections are not
    /// observable through it.
    pub fn new<O, E>(
        effect_type: EffectType,
        summary: impl Into<String>,
        origin_refs: O,
        destination_ref: Option<DestinationRef>,
        errors: E,
    ) -> Self
    where
        O: IntoIterator<Item = Change>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            effect_type,
            summary: summary.into(),
            origin_refs: origin_refs.into_iter().collect(),
            destination_ref,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builder() -> EffectBuilder {
        EffectBuilder::default()
    }

    pub fn effect_type(&self) -> EffectType {
        self.effect_type
    }

    /// Human readable summary. Not meant to be parsed.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Origin changes included in this write, in migration order.
    pub fn origin_refs(&self) -> &[Change] {
        &self.origin_refs
    }

    /// Destination change created or updated. May be absent for any type, and
    /// may be present for [`EffectType::Error`] (e.g. a review was created but
    /// a synchronous presubmit failed).
    pub fn destination_ref(&self) -> Option<&DestinationRef> {
        self.destination_ref.as_ref()
    }

    /// Errors raised while writing to the destination, such as presubmit
    /// failures.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for DestinationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DestinationEffect{{type={}, summary={}, origin_refs=[",
            self.effect_type, self.summary
        )?;
        for (i, change) in self.origin_refs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{change}")?;
        }
        f.write_str("], destination_ref=")?;
        match &self.destination_ref {
            Some(r) => write!(f, "{r}")?,
            None => f.write_str("null")?,
        }
        write!(f, ", errors=[{}]}}", self.errors.join(", "))
    }
}

/// Incremental construction of a [`DestinationEffect`].
///
/// Every field except the destination ref must be set before `build`; an
/// empty sequence counts as set.
#[derive(Debug, Clone, Default)]
pub struct EffectBuilder {
    effect_type: Option<EffectType>,
    summary: Option<String>,
    origin_refs: Option<Vec<Change>>,
    destination_ref: Option<DestinationRef>,
    errors: Option<Vec<String>>,
}

impl EffectBuilder {
    pub fn effect_type(mut self, effect_type: EffectType) -> Self {
        self.effect_type = Some(effect_type);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn origin_refs(mut self, origin_refs: impl IntoIterator<Item = Change>) -> Self {
        self.origin_refs = Some(origin_refs.into_iter().collect());
        self
    }

    pub fn destination_ref(mut self, destination_ref: DestinationRef) -> Self {
        self.destination_ref = Some(destination_ref);
        self
    }

    pub fn errors<E>(mut self, errors: E) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
    {
        self.errors = Some(errors.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<DestinationEffect, EffectError> {
        Ok(DestinationEffect {
            effect_type: self.effect_type.ok_or(EffectError::MissingField("type"))?,
            summary: self.summary.ok_or(EffectError::MissingField("summary"))?,
            origin_refs: self
                .origin_refs
                .ok_or(EffectError::MissingField("origin_refs"))?,
            destination_ref: self.destination_ref,
            errors: self.errors.ok_or(EffectError::MissingField("errors"))?,
        })
    }
}
