use berth_coord::lease;
use berth_store::StorePaths;

/// Inspect or clear the lease on a port. A one-shot invocation never owns a
/// lease itself, so clearing a live peer's lease requires `--force`; without
/// it the lease is left to expire or be reaped.
pub fn execute(paths: &StorePaths, port: u16, force: bool) -> anyhow::Result<()> {
    let path = paths.lease_path(port);
    match lease::read_lease(&path) {
        None => println!("no lease on port {port}"),
        Some(record) => {
            if force {
                let _ = std::fs::remove_file(&path);
                println!(
                    "released port {port} (was held by {})",
                    record.owner_peer_id
                );
            } else {
                println!(
                    "port {port} is held by {}; it expires naturally, or pass --force",
                    record.owner_peer_id
                );
            }
        }
    }
    Ok(())
}
