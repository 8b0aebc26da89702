use berth_core::clock::age_secs;
use berth_core::{LeaseRecord, Timings};
use berth_store::StorePaths;

use crate::arbiter;
use crate::lease::read_lease;
use crate::session::PeerSession;

/// Delete every lease past the hard ceiling, owner or not, plus every lease
/// that no longer parses. This bounds the damage from a peer that acquired
/// a lease and crashed before releasing it.
///
/// Returns the number of records removed. Absence at delete time (a race
/// against another deleter) is the success condition, not an error.
pub fn sweep_stale_leases(paths: &StorePaths, timings: &Timings) -> usize {
    let mut removed = 0;
    for path in paths.list_lease_files() {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => continue, // vanished mid-sweep; another deleter won
        };
        let stale = match serde_json::from_str::<LeaseRecord>(&content) {
            Ok(record) => age_secs(&record.granted_at) > timings.lease_ceiling_secs,
            Err(_) => true, // unparseable is abandoned
        };
        if stale && std::fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }
    removed
}

/// Clean-exit sweep: delete every shared record this peer owns, so a clean
/// shutdown never leaves a dangling lease waiting out the ceiling.
pub fn cleanup_own_records(session: &PeerSession) {
    for path in session.paths.list_lease_files() {
        if let Some(record) = read_lease(&path) {
            if record.owner_peer_id == session.peer_id {
                let _ = std::fs::remove_file(&path);
            }
        }
    }
    if let Some(window) = arbiter::read_window(&session.paths) {
        if window.owner_peer_id == session.peer_id {
            let _ = std::fs::remove_file(&session.paths.active_window_file);
        }
    }
}
