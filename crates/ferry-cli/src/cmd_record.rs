use crate::cmd_init::require_workspace;
use clap::Args;
use ferry_core::{Change, DestinationEffect, DestinationRef, EffectEntry, EffectType};
use ferry_store::EffectLog;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    /// Effect type: created, updated, noop, insufficient_approvals, error
    #[arg(long = "type")]
    pub effect_type: String,
    /// Human readable summary of what happened
    #[arg(long)]
    pub summary: String,
    /// Workflow that ran the migration
    #[arg(long, default_value = "default")]
    pub workflow: String,
    /// Destination that was written to
    #[arg(long)]
    pub destination: String,
    /// JSON file holding the origin changes, in migration order
    #[arg(long)]
    pub origins: Option<PathBuf>,
    /// Destination reference id
    #[arg(long)]
    pub dest_id: Option<String>,
    /// Destination reference type (e.g. pull_request, gerrit_change)
    #[arg(long)]
    pub dest_type: Option<String>,
    /// Destination reference url
    #[arg(long)]
    pub dest_url: Option<String>,
    /// Error raised during the write (repeatable)
    #[arg(long = "error")]
    pub errors: Vec<String>,
}

pub fn execute(repo_root: &Path, args: RecordArgs) -> anyhow::Result<()> {
    let paths = require_workspace(repo_root)?;
    let effect = build_effect(&args)?;
    let entry = EffectEntry::new(args.workflow, args.destination, effect);
    EffectLog::open(&paths).append(&entry)?;
    println!("Wrote {} {}", entry.effect.effect_type(), entry.entry_id);
    Ok(())
}

fn build_effect(args: &RecordArgs) -> anyhow::Result<DestinationEffect> {
    let effect_type: EffectType = args.effect_type.parse()?;
    let origins = match &args.origins {
        Some(path) => read_origins(path)?,
        None => Vec::new(),
    };

    let mut builder = DestinationEffect::builder()
        .effect_type(effect_type)
        .summary(args.summary.as_str())
        .origin_refs(origins)
        .errors(args.errors.iter().cloned());

    if args.dest_id.is_some() || args.dest_type.is_some() || args.dest_url.is_some() {
        let mut dest = DestinationRef::builder();
        if let Some(id) = &args.dest_id {
            dest = dest.id(id.as_str());
        }
        if let Some(ref_type) = &args.dest_type {
            dest = dest.ref_type(ref_type.as_str());
        }
        if let Some(url) = &args.dest_url {
            dest = dest.url(url.as_str());
        }
        builder = builder.destination_ref(dest.build()?);
    }
    Ok(builder.build()?)
}

fn read_origins(path: &Path) -> anyhow::Result<Vec<Change>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read origins file {}: {e}", path.display()))?;
    let changes: Vec<Change> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid origins file {}: {e}", path.display()))?;
    Ok(changes)
}
