use std::path::{Path, PathBuf};

/// All well-known paths under `.ferry/`.
#[derive(Debug, Clone)]
pub struct FerryPaths {
    pub root: PathBuf,
    pub ferry_dir: PathBuf,
    pub effects_jsonl: PathBuf,
    pub lock_file: PathBuf,
    pub config_json: PathBuf,
}

impl FerryPaths {
    /// Derive all paths from a repo root. Pure computation, no I/O.
    pub fn discover(repo_root: impl Into<PathBuf>) -> Self {
        let root = repo_root.into();
        let ferry_dir = root.join(".ferry");
        Self {
            effects_jsonl: ferry_dir.join("effects.jsonl"),
            lock_file: ferry_dir.join("LOCK"),
            config_json: ferry_dir.join("config.json"),
            ferry_dir,
            root,
        }
    }

    /// Create `.ferry/`. Idempotent.
    pub fn ensure_layout(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.ferry_dir)
    }

    /// Check whether `.ferry/` exists.
    pub fn is_initialized(&self) -> bool {
        self.ferry_dir.is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
