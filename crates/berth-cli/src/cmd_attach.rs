use berth_coord::{lease, reaper, PeerSession};
use berth_core::{Settings, Timings};
use berth_discover::{AttachClient, CommandAttach, ProcessLister, SystemLister};
use berth_store::StorePaths;

/// User-initiated attach: acquire the lease, run the attach command, release
/// after the short manual cooldown. A lease held elsewhere is informational,
/// not an error; an attach failure is surfaced as a warning.
pub fn execute(paths: &StorePaths, port: Option<u16>) -> anyhow::Result<()> {
    let settings = Settings::load(&Settings::default_path());
    let port = port.unwrap_or(settings.default_port);

    paths.ensure_layout()?;
    let mut session = PeerSession::new(paths.clone(), Timings::from_env());
    session.mark_activity();

    if !lease::try_acquire(&session, port) {
        println!("port {port} is already being handled by another window");
        return Ok(());
    }

    let label = SystemLister::new()
        .list()
        .into_iter()
        .find(|t| t.port == port)
        .map(|t| t.label)
        .unwrap_or_else(|| format!("localhost:{port}"));

    let attach = CommandAttach::new(settings.attach_command.clone());
    match attach.attach(port, &label) {
        Ok(()) => {
            println!("attached to localhost:{port} ({label})");
            std::thread::sleep(std::time::Duration::from_secs(
                session.timings.manual_release_secs,
            ));
        }
        Err(e) => eprintln!("warning: attach to localhost:{port} failed: {e}"),
    }

    lease::release(&session, port);
    reaper::cleanup_own_records(&session);
    Ok(())
}
