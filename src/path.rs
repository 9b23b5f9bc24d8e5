//! Store path resolution
//!
//! Every named store lives in its own directory at
//! `expand_home(storage_path)/name`.

use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Expand a leading `~` segment to the current user's home directory.
///
/// `~` and `~/...` are expanded. `~user/...` is rejected. Every other path
/// is returned unchanged.
pub fn expand_home(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    let mut components = path.components();
    match components.next() {
        Some(std::path::Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir().ok_or(StoreError::HomeDirUnavailable)?;
            Ok(home.join(components.as_path()))
        }
        Some(std::path::Component::Normal(first))
            if first.to_string_lossy().starts_with('~') =>
        {
            Err(StoreError::Config(format!(
                "cannot expand user-specific home dir in [{}]",
                path.display()
            )))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Full on-disk directory for the store `name` under `storage_path`
pub fn resolve_store_path(storage_path: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
    Ok(expand_home(storage_path)?.join(name))
}
