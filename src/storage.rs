//! Best-score persistence over localStorage. Unavailable storage (private
//! browsing, disabled cookies) degrades to the in-memory default silently.

use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Saved best score under `key`, or 0 when absent or unreadable.
pub fn load_best(key: &str) -> f64 {
    local_storage()
        .and_then(|store| store.get_item(key).ok().flatten())
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0)
}

pub fn save_best(key: &str, value: f64) {
    if let Some(store) = local_storage() {
        store.set_item(key, &value.to_string()).ok();
    }
}
