use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use berth_coord::{reaper, PeerSession, Poller};
use berth_core::clock::epoch_now;
use berth_core::{Settings, Timings};
use berth_discover::{CommandAttach, SystemLister};
use berth_store::StorePaths;

/// Run the coordination daemon: poll for debuggable processes, diff the key
/// set, drive auto-attach through the lease protocol, and reap stale shared
/// records on their own interval. Ctrl-C triggers the clean-exit sweep.
pub fn execute(paths: &StorePaths) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    paths.ensure_layout()?;
    let session = PeerSession::new(paths.clone(), Timings::from_env());
    let mut poller = Poller::new();
    let mut lister = SystemLister::new();

    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    let _ = ctrlc::set_handler(move || {
        flag.store(false, Ordering::SeqCst);
    });

    tracing::info!(
        peer = %session.peer_id,
        store = %paths.root.display(),
        "watch started"
    );

    let mut last_sweep = 0u64;
    while running.load(Ordering::SeqCst) {
        // Settings are re-read every cycle so edits apply within one interval
        let settings = Settings::load(&Settings::default_path());

        if settings.live_monitor {
            let attach = CommandAttach::new(settings.attach_command.clone());
            let report = poller.tick(&session, &settings, &mut lister, &attach);
            for &port in &report.attached {
                tracing::info!(port, "attached debugger");
            }
            for warning in &report.warnings {
                tracing::warn!("{warning}");
            }
            for target in report
                .targets
                .iter()
                .filter(|t| report.new_keys.contains(&t.port))
            {
                tracing::debug!(
                    port = target.port,
                    pid = target.pid,
                    label = %target.label,
                    "discovered debuggable process"
                );
            }
        }

        if epoch_now().saturating_sub(last_sweep) >= session.timings.reap_interval_secs {
            let removed = reaper::sweep_stale_leases(paths, &session.timings);
            if removed > 0 {
                tracing::debug!(removed, "reaped stale lease records");
            }
            last_sweep = epoch_now();
        }

        std::thread::sleep(Duration::from_secs(session.timings.poll_interval_secs));
    }

    reaper::cleanup_own_records(&session);
    tracing::info!("watch stopped, own records cleaned");
    Ok(())
}
