/// Protocol timing knobs, in seconds.
///
/// Defaults are tuned for human-speed interaction; the exact values affect
/// responsiveness, not correctness, so tests construct their own instances
/// instead of sleeping through the real windows.
#[derive(Debug, Clone)]
pub struct Timings {
    /// Margin by which a challenger's activity must exceed the incumbent's
    /// before it takes the active window.
    pub debounce_secs: u64,
    /// Incumbent silence beyond this means the window is up for grabs.
    pub liveness_secs: u64,
    /// Lease age below this blocks acquisition by other peers.
    pub lease_validity_secs: u64,
    /// The reaper deletes any lease older than this, owner or not.
    pub lease_ceiling_secs: u64,
    /// Interval between reaper sweeps.
    pub reap_interval_secs: u64,
    /// Interval between discovery polls.
    pub poll_interval_secs: u64,
    /// Release delay after a user-initiated attach.
    pub manual_release_secs: u64,
    /// Release delay after an auto-triggered attach. Longer than the manual
    /// delay to suppress re-trigger within the same discovery cycle.
    pub auto_release_secs: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            debounce_secs: 1,
            liveness_secs: 15,
            lease_validity_secs: 30,
            lease_ceiling_secs: 60,
            reap_interval_secs: 30,
            poll_interval_secs: 3,
            manual_release_secs: 1,
            auto_release_secs: 5,
        }
    }
}

fn env_secs(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Timings {
    /// Defaults with `BERTH_*` env overrides applied (set before launching
    /// the peer process).
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            debounce_secs: env_secs("BERTH_DEBOUNCE_SECS", d.debounce_secs),
            liveness_secs: env_secs("BERTH_LIVENESS_SECS", d.liveness_secs),
            lease_validity_secs: env_secs("BERTH_LEASE_VALIDITY_SECS", d.lease_validity_secs),
            lease_ceiling_secs: env_secs("BERTH_LEASE_CEILING_SECS", d.lease_ceiling_secs),
            reap_interval_secs: env_secs("BERTH_REAP_INTERVAL_SECS", d.reap_interval_secs),
            poll_interval_secs: env_secs("BERTH_POLL_INTERVAL_SECS", d.poll_interval_secs),
            manual_release_secs: env_secs("BERTH_MANUAL_RELEASE_SECS", d.manual_release_secs),
            auto_release_secs: env_secs("BERTH_AUTO_RELEASE_SECS", d.auto_release_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design_values() {
        let t = Timings::default();
        assert_eq!(t.debounce_secs, 1);
        assert_eq!(t.liveness_secs, 15);
        assert_eq!(t.lease_validity_secs, 30);
        assert_eq!(t.lease_ceiling_secs, 60);
        assert_eq!(t.reap_interval_secs, 30);
        assert_eq!(t.poll_interval_secs, 3);
    }

    #[test]
    fn auto_release_exceeds_manual() {
        let t = Timings::default();
        assert!(t.auto_release_secs > t.manual_release_secs);
    }
}
