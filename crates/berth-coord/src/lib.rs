//! Peer coordination over shared filesystem state.
//!
//! N peers on one host cooperate through small whole-file records in a
//! shared directory: one active-window record electing the single peer
//! allowed to act, plus one time-bounded lease per resource key gating the
//! protected action itself. There is no server and no peer-to-peer
//! messaging; every peer re-reads the shared store and converges.
//!
//! Error policy, by contract: transient I/O and parse failures on shared
//! records are equivalent to record absence. The coordination layer favors
//! availability; the cost of a wrong guess is a duplicate, user-visible
//! but harmless attach, never data loss.

pub mod arbiter;
pub mod lease;
pub mod poller;
pub mod reaper;
pub mod session;

pub use poller::{KeyState, Poller, TickReport};
pub use session::PeerSession;
