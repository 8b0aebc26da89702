use berth_coord::reaper;
use berth_core::Timings;
use berth_store::StorePaths;

/// Run the stale-entry sweep once.
pub fn execute(paths: &StorePaths) -> anyhow::Result<()> {
    let removed = reaper::sweep_stale_leases(paths, &Timings::from_env());
    println!("removed {removed} stale lease record(s)");
    Ok(())
}
