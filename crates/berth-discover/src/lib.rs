pub mod attach;
pub mod ports;
pub mod scan;

pub use attach::{AttachClient, AttachError, CommandAttach};
pub use ports::{extract_port, DEBUG_MARKER};
pub use scan::{DebugTarget, ProcessLister, SystemLister};
