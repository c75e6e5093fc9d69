//! YAML command files.
//!
//! # File layout
//!
//! ```yaml
//! commands:
//!   - name: ping
//!     description: Replies pong
//!   - name: Report
//!     type: 3          # message context menu
//! ```
//!
//! Loading only decodes; call [`crate::validate()`] before handing the set to a
//! synchronizer.

use std::path::Path;

use crate::error::LoadError;
use crate::types::CommandSet;

/// Parse a command set from YAML text.
pub fn parse_command_set(contents: &str) -> Result<CommandSet, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}

/// Load a command set from the YAML file at `path`.
///
/// Returns `LoadError::NotFound` if absent,
/// `LoadError::Parse` (with path + line context) if malformed YAML.
pub fn load_command_set(path: &Path) -> Result<CommandSet, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    parse_command_set(&contents).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Atomically write `set` to `path` as YAML.
///
/// Write flow: serialize → `<file>.tmp` sibling → `rename`.
pub fn save_command_set(path: &Path, set: &CommandSet) -> Result<(), LoadError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "commands.yml".to_owned());
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    let yaml = serde_yaml::to_string(set)?;
    std::fs::write(&tmp_path, yaml)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}
