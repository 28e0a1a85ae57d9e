use ferry_store::FerryPaths;
use std::path::Path;

pub fn execute(repo_root: &Path) -> anyhow::Result<()> {
    let paths = FerryPaths::discover(repo_root);
    if paths.is_initialized() {
        println!("Already initialized at {}", paths.ferry_dir.display());
        return Ok(());
    }
    paths.ensure_layout()?;
    println!("Initialized ferry workspace at {}", paths.ferry_dir.display());
    Ok(())
}

/// Fail with the usual hint when `.ferry/` is missing.
pub fn require_workspace(repo_root: &Path) -> anyhow::Result<FerryPaths> {
    let paths = FerryPaths::discover(repo_root);
    if !paths.is_initialized() {
        anyhow::bail!("No .ferry/ workspace found. Run `ferry init` first.");
    }
    Ok(paths)
}
