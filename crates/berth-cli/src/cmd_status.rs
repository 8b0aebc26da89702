use berth_coord::{arbiter, lease};
use berth_core::clock::age_secs;
use berth_discover::{ProcessLister, SystemLister};
use berth_store::StorePaths;

/// Print the shared coordination state and currently discovered targets.
pub fn execute(paths: &StorePaths) -> anyhow::Result<()> {
    match arbiter::read_window(paths) {
        Some(window) => println!(
            "active window: {} (activity {}s ago)",
            window.owner_peer_id,
            age_secs(&window.owner_last_activity)
        ),
        None => println!("active window: none"),
    }

    let lease_files = paths.list_lease_files();
    if lease_files.is_empty() {
        println!("leases: none");
    } else {
        println!("leases:");
        for path in lease_files {
            match lease::read_lease(&path) {
                Some(record) => println!(
                    "  port {:<5} held by {} ({}s old)",
                    record.resource_key,
                    record.owner_peer_id,
                    age_secs(&record.granted_at)
                ),
                None => println!("  {} (unparseable)", path.display()),
            }
        }
    }

    let mut lister = SystemLister::new();
    let targets = lister.list();
    if targets.is_empty() {
        println!("debuggable processes: none");
    } else {
        println!("debuggable processes:");
        for target in targets {
            println!(
                "  port {:<5} pid {:<7} {}",
                target.port, target.pid, target.label
            );
        }
    }
    Ok(())
}
