//! Append-only JSONL log of destination effects.

use crate::paths::FerryPaths;
use crate::{lock_file, StoreError};
use ferry_core::{DestinationEffect, EffectEntry, EffectType};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Handle on `.ferry/effects.jsonl`. Writers serialize on `.ferry/LOCK`.
#[derive(Debug, Clone)]
pub struct EffectLog {
    path: PathBuf,
    lock_path: PathBuf,
}

impl EffectLog {
    pub fn open(paths: &FerryPaths) -> Self {
        Self {
            path: paths.effects_jsonl.clone(),
            lock_path: paths.lock_file.clone(),
        }
    }

    /// Append one entry as a single line.
    pub fn append(&self, entry: &EffectEntry) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(entry).map_err(StoreError::Encode)?;
        line.push('\n');

        let _guard = lock_file(&self.lock_path)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        let effect = &entry.effect;
        debug!(
            entry_id = %entry.entry_id,
            effect_type = %effect.effect_type(),
            origin_refs = effect.origin_refs().len(),
            "appended destination effect"
        );
        if needs_warning(effect) {
            warn!(
                entry_id = %entry.entry_id,
                effect_type = %effect.effect_type(),
                errors = effect.errors().len(),
                "destination write failed or reported errors"
            );
        }
        Ok(())
    }

    /// Read every entry in append order. A missing log reads as empty.
    pub fn read_all(&self) -> Result<Vec<EffectEntry>, StoreError> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut entries = Vec::new();
        // Bytes, not `lines()`: invalid UTF-8 must surface as a malformed line.
        for (idx, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line = line?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            let entry = serde_json::from_slice(&line).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                line: idx + 1,
                source,
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }
}

/// `ERROR` effects are warned about even without messages, as is any effect
/// that carries errors.
fn needs_warning(effect: &DestinationEffect) -> bool {
    effect.effect_type() == EffectType::Error || !effect.errors().is_empty()
}
