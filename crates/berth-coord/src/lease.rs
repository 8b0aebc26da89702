use std::path::Path;

use berth_core::clock::{age_secs, now_rfc3339};
use berth_core::LeaseRecord;

use crate::arbiter;
use crate::session::PeerSession;

/// Read a lease record. Unreadable or unparseable content reads as absent.
pub fn read_lease(path: &Path) -> Option<LeaseRecord> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Try to take the lease for `key`. Only the active peer may hold leases.
///
/// The read-check-write sequence runs under the store's advisory lock when
/// it can be taken; otherwise it degrades to the plain optimistic protocol,
/// where two racing peers can both succeed. That race is accepted: the
/// protected action tolerates a duplicate trigger, and record shapes stay
/// compatible with peers that never lock.
pub fn try_acquire(session: &PeerSession, key: u16) -> bool {
    if !arbiter::is_active_peer(session) {
        return false;
    }

    let _guard = berth_store::try_lock(&session.paths);

    let path = session.paths.lease_path(key);
    if let Some(existing) = read_lease(&path) {
        if age_secs(&existing.granted_at) < session.timings.lease_validity_secs
            && existing.owner_peer_id != session.peer_id
        {
            return false;
        }
    }

    // Ownership can move between the first check and here; re-check before
    // committing the overwrite.
    if !arbiter::is_active_peer(session) {
        return false;
    }

    let record = LeaseRecord {
        resource_key: key,
        owner_peer_id: session.peer_id.clone(),
        granted_at: now_rfc3339(),
    };
    if let Ok(data) = serde_json::to_string_pretty(&record) {
        let _ = berth_store::write_atomic(&path, data.as_bytes());
    }
    true
}

/// Release the lease for `key` if this peer owns it; otherwise a no-op.
/// Best-effort: filesystem errors are swallowed; a missed release is
/// recovered by the reaper or by natural expiry.
pub fn release(session: &PeerSession, key: u16) {
    let path = session.paths.lease_path(key);
    if let Some(existing) = read_lease(&path) {
        if existing.owner_peer_id == session.peer_id {
            let _ = std::fs::remove_file(&path);
        }
    }
}
