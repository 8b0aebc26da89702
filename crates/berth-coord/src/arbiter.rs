use berth_core::clock::{epoch_now, now_rfc3339, parse_rfc3339_to_epoch, rfc3339_from_epoch};
use berth_core::ActiveWindowRecord;
use berth_store::StorePaths;

use crate::session::PeerSession;

/// Read the shared active-window record. Unreadable or unparseable content
/// reads as absent.
pub fn read_window(paths: &StorePaths) -> Option<ActiveWindowRecord> {
    let content = std::fs::read_to_string(&paths.active_window_file).ok()?;
    serde_json::from_str(&content).ok()
}

/// Overwrite the shared record with this peer as owner. Best-effort: a
/// failed write surfaces as an absent record on the next read.
fn claim_window(session: &PeerSession) {
    let record = ActiveWindowRecord {
        owner_peer_id: session.peer_id.clone(),
        written_at: now_rfc3339(),
        owner_last_activity: rfc3339_from_epoch(session.last_activity),
    };
    if let Ok(data) = serde_json::to_string_pretty(&record) {
        let _ = berth_store::write_atomic(&session.paths.active_window_file, data.as_bytes());
    }
}

/// Decide whether this peer is the active one, claiming the shared record
/// when the rules allow it.
///
/// Decision order:
/// 1. absent or corrupt record: claim;
/// 2. own activity newer than the owner's by more than the debounce margin:
///    claim (fresh activity wins without flapping on near-simultaneous
///    interaction);
/// 3. owner silent past the liveness timeout: incumbent presumed gone,
///    claim;
/// 4. otherwise active only if the record names this peer.
///
/// The only side effect is the overwrite on claim; safe to call at
/// arbitrary frequency.
pub fn is_active_peer(session: &PeerSession) -> bool {
    let record = match read_window(&session.paths) {
        Some(r) => r,
        None => {
            claim_window(session);
            return true;
        }
    };

    // An unparseable owner timestamp reads as epoch zero, so both takeover
    // rules fire for corrupt-but-deserializable records.
    let owner_activity = parse_rfc3339_to_epoch(&record.owner_last_activity).unwrap_or(0);

    if session.last_activity > owner_activity + session.timings.debounce_secs {
        claim_window(session);
        return true;
    }

    if epoch_now().saturating_sub(owner_activity) > session.timings.liveness_secs {
        claim_window(session);
        return true;
    }

    record.owner_peer_id == session.peer_id
}
