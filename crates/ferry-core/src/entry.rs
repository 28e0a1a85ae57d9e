//! Persisted envelope for one destination effect (one JSONL line).

use crate::effect::DestinationEffect;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

/// Entry ID format: `eff_<ulid>`
pub type EntryId = String;

/// A destination effect plus where and when it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectEntry {
    pub entry_id: EntryId,
    pub recorded_at: String,
    /// Workflow that produced the migration (e.g. "default").
    pub workflow: String,
    /// Destination the effect was written to (e.g. "git.github_pr_destination").
    pub destination: String,
    pub effect: DestinationEffect,
}

impl EffectEntry {
    pub fn new(
        workflow: impl Into<String>,
        destination: impl Into<String>,
        effect: DestinationEffect,
    ) -> Self {
        Self {
            entry_id: new_entry_id(),
            recorded_at: now_rfc3339(),
            workflow: workflow.into(),
            destination: destination.into(),
            effect,
        }
    }
}

fn new_entry_id() -> EntryId {
    format!("eff_{}", ulid::Ulid::new().to_string().to_lowercase())
}

fn now_rfc3339() -> String {
    // The current UTC time always has an RFC 3339 rendering.
    time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
