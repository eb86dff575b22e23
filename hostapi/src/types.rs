//! Host-side configuration and record types.

use l2gen_primitives::{AccountId, ServiceFlag};

/// Resource limits enforced by [`MemHost`](crate::MemHost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Number of account ids the host can allocate.
    pub max_accounts: u32,
    /// Maximum size of the call's return payload in bytes.
    pub max_return_data_size: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_accounts: u32::MAX,
            max_return_data_size: 24 * 1024,
        }
    }
}

/// A record appended through the `log` syscall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Account the record is attributed to.
    pub account_id: AccountId,
    pub service_flag: ServiceFlag,
    pub data: Vec<u8>,
}
