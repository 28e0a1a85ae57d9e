use crate::cmd_init::require_workspace;
use ferry_core::EffectEntry;
use ferry_report::{render_json, render_report, OutputFormat, Outcome, ReportConfig};
use ferry_store::EffectLog;
use std::path::Path;
use tracing::debug;

/// `ferry report`. Returns the process exit code for the run's outcome.
pub fn execute(
    repo_root: &Path,
    workflow: Option<&str>,
    json: bool,
    origins: bool,
) -> anyhow::Result<i32> {
    let paths = require_workspace(repo_root)?;
    let mut config = ReportConfig::load(&paths);
    if json {
        config.format = OutputFormat::Json;
    }
    if origins {
        config.show_origin_refs = true;
    }

    let entries = select(EffectLog::open(&paths).read_all()?, workflow);
    let output = match config.format {
        OutputFormat::Text => render_report(&entries, &config),
        OutputFormat::Json => render_json(&entries)?,
    };
    println!("{output}");

    let outcome = Outcome::evaluate(entries.iter().map(|e| &e.effect), &config);
    debug!(entries = entries.len(), ?outcome, "report rendered");
    Ok(outcome.exit_code(&config))
}

fn select(entries: Vec<EffectEntry>, workflow: Option<&str>) -> Vec<EffectEntry> {
    match workflow {
        Some(w) => entries.into_iter().filter(|e| e.workflow == w).collect(),
        None => entries,
    }
}
