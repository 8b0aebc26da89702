use berth_core::clock::epoch_now;
use berth_core::identity::new_peer_id;
use berth_core::Timings;
use berth_store::StorePaths;

/// One peer's in-process coordination state.
///
/// Constructed once at startup and passed to every component; there are no
/// ambient singletons. The peer id is immutable for the process lifetime.
pub struct PeerSession {
    pub peer_id: String,
    pub paths: StorePaths,
    pub timings: Timings,
    /// Epoch seconds of the last observed local user interaction. Kept only
    /// in memory; published into the shared active-window record on claim.
    pub last_activity: u64,
}

impl PeerSession {
    /// Starting a peer counts as its first interaction.
    pub fn new(paths: StorePaths, timings: Timings) -> Self {
        Self {
            peer_id: new_peer_id(),
            paths,
            timings,
            last_activity: epoch_now(),
        }
    }

    /// Record a qualifying local interaction (edit, selection move, focus
    /// gain, explicit command) and immediately publish it through
    /// arbitration so the shared view reflects this peer as a takeover
    /// candidate. Infallible; safe at arbitrary frequency.
    pub fn mark_activity(&mut self) {
        self.last_activity = epoch_now();
        let _ = crate::arbiter::is_active_peer(self);
    }
}
