use serde::{Deserialize, Serialize};

/// The single shared active-window record.
/// Location: `<store>/active_window.json`
///
/// At most one peer should believe itself the owner under normal conditions;
/// brief dual ownership during a handover is tolerated and resolved by the
/// next arbitration read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActiveWindowRecord {
    pub owner_peer_id: String,
    pub written_at: String,
    pub owner_last_activity: String,
}

/// One shared lease record per resource key.
/// Location: `<store>/leases/lease.<port>.json`
///
/// A lease within its validity window owned by a different peer blocks
/// acquisition; an expired or self-owned lease does not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaseRecord {
    pub resource_key: u16,
    pub owner_peer_id: String,
    pub granted_at: String,
}
