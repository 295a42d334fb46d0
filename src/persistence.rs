use crate::stats::ReviewStats;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use tracing::info;

/// Review stats persisted per deck between sessions.
#[derive(Serialize, Deserialize)]
pub struct PersistedStats {
    version: u8,
    deck_path: String,
    stats: ReviewStats,
}

/// Saves review stats for the deck to disk. Failures are logged and
/// otherwise ignored; losing counters must never take the session down.
pub fn save_stats(deck_path: &str, stats: ReviewStats) {
    if !ensure_state_dir() {
        return;
    }

    let state_file_path = match get_state_file_path(deck_path) {
        Some(path) => path,
        None => return,
    };

    let state = PersistedStats {
        version: 1,
        deck_path: deck_path.to_string(),
        stats,
    };
    let json = match serde_json::to_string_pretty(&state) {
        Ok(j) => j,
        Err(_) => return,
    };

    match fs::write(&state_file_path, json) {
        Ok(()) => info!("Saved review stats to {:?}", state_file_path),
        Err(e) => info!("Failed to write stats file {:?}: {}", state_file_path, e),
    }
}

/// Loads review stats for the deck from disk if present.
pub fn load_stats(deck_path: &str) -> Option<ReviewStats> {
    let state_path = get_state_file_path(deck_path)?;

    if !state_path.exists() {
        return None;
    }

    match fs::read_to_string(&state_path) {
        Ok(json) => match serde_json::from_str::<PersistedStats>(&json) {
            Ok(state) => {
                if state.deck_path == deck_path {
                    Some(state.stats)
                } else {
                    None
                }
            }
            Err(e) => {
                info!("Failed to deserialize stats file {:?}: {}", state_path, e);
                // Corrupted state file, ignore it
                None
            }
        },
        Err(e) => {
            info!("Failed to read stats file {:?}: {}", state_path, e);
            // Can't read file, ignore it
            None
        }
    }
}

/// Calculates the state file path based on the deck file path.
fn get_state_file_path(deck_path: &str) -> Option<PathBuf> {
    let absolute_path = std::fs::canonicalize(deck_path).ok()?;
    let path_str = absolute_path.to_string_lossy();

    let mut hasher = DefaultHasher::new();
    path_str.hash(&mut hasher);
    let hash = hasher.finish();

    Some(state_dir()?.join(format!("{:x}.json", hash)))
}

fn state_dir() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".riffle"))
}

/// Ensures the ~/.riffle directory exists.
fn ensure_state_dir() -> bool {
    let state_dir = match state_dir() {
        Some(dir) => dir,
        None => return false,
    };

    if !state_dir.exists() {
        fs::create_dir_all(&state_dir).is_ok()
    } else {
        true
    }
}
