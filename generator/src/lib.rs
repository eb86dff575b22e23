//! `l2gen-generator`: off-chain generator core for layer-2 transactions.
//!
//! The generator runs once per transaction. It reads the transaction and
//! block context from its host, performs every state access through a
//! narrow syscall gateway, and leaves behind a post-state plus a transfer
//! log that an on-chain validator later re-checks.
//!
//! ## Architecture
//!
//! - [`context`]: decodes the host's context buffers into an
//!   [`ExecutionContext`] and binds the gateway to it
//! - [`syscalls::Syscalls`]: existence-checked wrappers over the host channel
//! - [`sudt`]: Simple-UDT balance lookup and transfer
//! - [`handler`]: entry point of a SUDT ledger account
//!
//! All host I/O goes through [`l2gen_hostapi::HostChannel`], injected at
//! context construction.

pub mod error;
pub mod config;
pub mod syscalls;
pub mod context;
pub mod sudt;
pub mod handler;

// Re-export key types for convenience
pub use config::GeneratorConfig;
pub use context::{init_context, init_context_with_config, ExecutionContext};
pub use error::{GeneratorError, GeneratorResult};
pub use handler::{run, run_sudt, SudtArgs};
pub use syscalls::Syscalls;
