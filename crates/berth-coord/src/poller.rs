use std::collections::{HashMap, HashSet};

use berth_core::clock::epoch_now;
use berth_core::Settings;
use berth_discover::{AttachClient, DebugTarget, ProcessLister};

use crate::lease;
use crate::session::PeerSession;

/// Lifecycle of one resource key as observed by this peer. Absence from the
/// poller's map is the implicit Unknown state; a key returns to it once it
/// drops out of the discovery set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Discovered,
    LeaseAcquired,
    ActionAttempted,
    ActionSucceeded,
    ActionFailed,
    Released,
}

/// A release deferred past the auto-trigger cooldown, so the same discovery
/// cycle cannot immediately re-trigger on its own key.
#[derive(Debug, Clone)]
struct PendingRelease {
    key: u16,
    due_epoch: u64,
}

/// What one poll cycle did, for display and logging.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Everything currently discovered, for the passive display.
    pub targets: Vec<DebugTarget>,
    /// Keys that entered the discovery set this cycle.
    pub new_keys: Vec<u16>,
    /// Keys this peer attached to this cycle.
    pub attached: Vec<u16>,
    /// Attach failures, surfaced only to this (active) peer.
    pub warnings: Vec<String>,
}

/// Periodic discovery driver.
///
/// Each tick diffs the candidate key set against the previous cycle; only
/// keys new to the set are acted on. With auto-attach enabled, new keys are
/// routed through lease acquisition and the protected action; otherwise the
/// poller maintains the passive display and produces no lease traffic.
#[derive(Default)]
pub struct Poller {
    states: HashMap<u16, KeyState>,
    pending_releases: Vec<PendingRelease>,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observed state for a key, if it is currently in the discovery set.
    pub fn state(&self, key: u16) -> Option<KeyState> {
        self.states.get(&key).copied()
    }

    /// Run one poll cycle. `settings` is the freshly re-read configuration,
    /// so flips of `auto_attach` take effect on the next tick.
    pub fn tick(
        &mut self,
        session: &PeerSession,
        settings: &Settings,
        lister: &mut dyn ProcessLister,
        attach: &dyn AttachClient,
    ) -> TickReport {
        let mut report = TickReport::default();
        let targets = lister.list();

        let current: HashSet<u16> = targets.iter().map(|t| t.port).collect();
        self.states.retain(|key, _| current.contains(key));

        for target in &targets {
            if self.states.contains_key(&target.port) {
                continue;
            }
            self.states.insert(target.port, KeyState::Discovered);
            report.new_keys.push(target.port);

            if !settings.auto_attach {
                continue;
            }
            if attach.attach_in_progress() {
                // A session is already underway; leave the key for a later
                // cycle rather than stacking attaches.
                continue;
            }
            if !lease::try_acquire(session, target.port) {
                // Held by another peer or this peer is passive: a normal
                // negative, silently skipped in auto mode.
                continue;
            }
            self.states.insert(target.port, KeyState::LeaseAcquired);

            self.states.insert(target.port, KeyState::ActionAttempted);
            match attach.attach(target.port, &target.label) {
                Ok(()) => {
                    self.states.insert(target.port, KeyState::ActionSucceeded);
                    report.attached.push(target.port);
                    self.pending_releases.push(PendingRelease {
                        key: target.port,
                        due_epoch: epoch_now() + session.timings.auto_release_secs,
                    });
                }
                Err(e) => {
                    self.states.insert(target.port, KeyState::ActionFailed);
                    lease::release(session, target.port);
                    report.warnings.push(format!(
                        "attach to localhost:{} ({}) failed: {e}",
                        target.port, target.label
                    ));
                }
            }
        }

        self.run_due_releases(session);

        report.targets = targets;
        report
    }

    fn run_due_releases(&mut self, session: &PeerSession) {
        let now = epoch_now();
        let mut remaining = Vec::new();
        for pending in self.pending_releases.drain(..) {
            if pending.due_epoch <= now {
                lease::release(session, pending.key);
                if let Some(state) = self.states.get_mut(&pending.key) {
                    *state = KeyState::Released;
                }
            } else {
                remaining.push(pending);
            }
        }
        self.pending_releases = remaining;
    }
}
