use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ICON_DIR, IconSpec};
use crate::error::{IconError, Result};
use crate::icon;

/// Create `<root>/icons` if needed. Safe to call when it already exists.
pub fn ensure_output_dir(root: &Path) -> Result<PathBuf> {
    let dir = root.join(ICON_DIR);
    fs::create_dir_all(&dir).map_err(|e| IconError::io(&dir, e))?;
    Ok(dir)
}

/// Render every spec in order below `root`, stopping at the first failure.
/// `on_created` runs after each file is written.
pub fn generate_all<F>(root: &Path, specs: &[IconSpec], mut on_created: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&IconSpec, &Path),
{
    ensure_output_dir(root)?;
    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = root.join(spec.path);
        icon::render(spec.size, &path)?;
        on_created(spec, &path);
        written.push(path);
    }
    log::info!("generated {} icons under {}", written.len(), root.display());
    Ok(written)
}
