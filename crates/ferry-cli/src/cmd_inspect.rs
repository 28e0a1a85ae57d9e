use crate::cmd_init::require_workspace;
use ferry_core::EffectEntry;
use ferry_store::EffectLog;
use std::path::Path;

/// `ferry inspect <entry_id> [--field name]`
pub fn execute(repo_root: &Path, entry_id: &str, field: Option<&str>) -> anyhow::Result<()> {
    let paths = require_workspace(repo_root)?;
    let entries = EffectLog::open(&paths).read_all()?;
    let entry = find_entry(&entries, entry_id)?;
    let value = match field {
        Some(name) => entry.effect.field(name)?,
        None => entry.effect.script_fields(),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn find_entry<'a>(entries: &'a [EffectEntry], prefix: &str) -> anyhow::Result<&'a EffectEntry> {
    let matches: Vec<&EffectEntry> = entries
        .iter()
        .filter(|e| e.entry_id.starts_with(prefix))
        .collect();
    match matches.as_slice() {
        [] => anyhow::bail!("effect entry not found: {prefix}"),
        [entry] => Ok(*entry),
        many => anyhow::bail!(
            "ambiguous entry prefix {prefix}: {} matches",
            many.len()
        ),
    }
}
