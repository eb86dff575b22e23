//! Host syscall operation codes.
//!
//! Each gateway operation maps 1:1 to one of these numbers. The table is a
//! stable ABI shared with the host.

use core::fmt;

/// Syscall numbers understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum SyscallCode {
    Store = 3051,
    Load = 3052,
    SetReturnData = 3061,
    Create = 3071,
    // Generator-only syscalls.
    LoadTransaction = 4051,
    LoadBlockInfo = 4052,
    LoadScriptHashByAccountId = 4053,
    LoadAccountIdByScriptHash = 4054,
    LoadAccountScript = 4055,
    StoreData = 4056,
    LoadData = 4057,
    GetBlockHash = 4058,
    Log = 4061,
}

impl SyscallCode {
    /// Return the numeric syscall code.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Returns true for syscalls that touch account key-value storage.
    pub fn touches_storage(self) -> bool {
        matches!(self, Self::Load | Self::Store)
    }
}

impl fmt::Display for SyscallCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.as_u32())
    }
}
