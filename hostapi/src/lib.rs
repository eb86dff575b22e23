//! `l2gen-hostapi`: host-side interface of the layer-2 generator.
//!
//! The generator never performs I/O itself. Every state access crosses the
//! [`HostChannel`] trait, which has one method per syscall code. This crate
//! provides:
//!
//! - `HostChannel` trait: the raw syscall surface
//! - `HostError`: host-side failures with `ErrorCode` conversion
//! - `StateStore` trait: committed key-value storage abstraction
//! - `MemStore`: in-memory `StateStore`
//! - `MemHost`: a complete in-memory host for tests and local runs
//! - `HostConfig`: resource limits enforced by `MemHost`

pub mod error;
pub mod types;
pub mod traits;
pub mod state_store;
pub mod mem_store;
pub mod mem_host;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use types::{HostConfig, LogEntry};
pub use traits::HostChannel;
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use mem_host::MemHost;
