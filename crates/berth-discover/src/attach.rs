use thiserror::Error;

/// Why an attach attempt failed.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no attach command configured")]
    NotConfigured,
    #[error("attach command exited with status {status}")]
    CommandFailed { status: i32 },
    #[error("failed to spawn attach command: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Protected-action collaborator: starts an external debug session against
/// `localhost:<port>`.
pub trait AttachClient {
    fn attach(&self, port: u16, label: &str) -> Result<(), AttachError>;

    /// Whether an attach is already underway. The poller consults this
    /// before auto-triggering and skips the key for that cycle when true.
    fn attach_in_progress(&self) -> bool;
}

/// Attach client that spawns a user-configured command with `{port}` and
/// `{label}` substituted before each run.
pub struct CommandAttach {
    template: String,
}

impl CommandAttach {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl AttachClient for CommandAttach {
    fn attach(&self, port: u16, label: &str) -> Result<(), AttachError> {
        if self.template.trim().is_empty() {
            return Err(AttachError::NotConfigured);
        }
        let rendered = self
            .template
            .replace("{port}", &port.to_string())
            .replace("{label}", label);
        let mut parts = rendered.split_whitespace();
        let program = parts.next().ok_or(AttachError::NotConfigured)?;
        let status = std::process::Command::new(program).args(parts).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(AttachError::CommandFailed {
                status: status.code().unwrap_or(-1),
            })
        }
    }

    /// A one-shot spawned command leaves no session behind to report.
    fn attach_in_progress(&self) -> bool {
        false
    }
}
