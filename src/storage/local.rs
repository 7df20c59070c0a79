use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::reminder::Reminder;
use crate::storage::CorruptFilePolicy;

/// Load reminders from a local JSON file.
///
/// A missing file yields an empty list. What happens when the file exists but
/// does not parse is decided by `on_corrupt`.
pub(crate) fn load_local(path: &Path, on_corrupt: CorruptFilePolicy) -> AppResult<Vec<Reminder>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| AppError::storage(e.to_string()))?;

    match serde_json::from_str::<Vec<Reminder>>(&content) {
        Ok(reminders) => {
            debug!("Loaded {} reminders from {}", reminders.len(), path.display());
            Ok(reminders)
        }
        Err(e) => match on_corrupt {
            CorruptFilePolicy::ResetEmpty => {
                warn!(
                    "Could not parse {}: {}. Starting with an empty list",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
            CorruptFilePolicy::Fail => Err(AppError::corrupt(format!(
                "Could not parse {}: {}",
                path.display(),
                e
            ))),
            CorruptFilePolicy::BackupAndReset => {
                let backup = backup_path(path);
                fs::write(&backup, &content).map_err(|e| AppError::storage(e.to_string()))?;
                info!(
                    "Could not parse {}. Original content backed up to {}",
                    path.display(),
                    backup.display()
                );
                Ok(Vec::new())
            }
        },
    }
}

/// Save reminders to a local JSON file, replacing its whole content.
pub(crate) fn save_local(path: &Path, reminders: &[Reminder]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(reminders).map_err(|e| AppError::storage(e.to_string()))?;
    fs::write(path, json).map_err(|e| AppError::storage(e.to_string()))?;
    Ok(())
}

fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "reminders".to_string());
    let ext = path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "json".to_string());
    path.with_file_name(format!("{}_backup.{}", stem, ext))
}
