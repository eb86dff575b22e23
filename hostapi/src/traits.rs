//! Host channel trait: the raw syscall surface of the generator.
//!
//! Each method corresponds to exactly one [`SyscallCode`]. The trait works
//! with Rust slices and fixed-size arrays, not raw pointers; it performs no
//! account-existence checks. Those belong to the generator's gateway.
//!
//! Buffer-filling methods follow one convention: the host copies at most
//! `buf.len()` bytes and returns the full length of the data available
//! (from `offset`, where one is taken). A returned length larger than the
//! buffer means the data did not fit.
//!
//! [`SyscallCode`]: l2gen_primitives::SyscallCode

use l2gen_primitives::{AccountId, Hash, ScriptHash, ServiceFlag, StorageKey, Value};

use crate::error::HostError;

/// Host-provided syscalls, one method per operation code.
pub trait HostChannel {
    // ── Account storage ──

    /// `Load` (3052): read a 32-byte value. Absent keys read as zero.
    fn load(&self, key: &StorageKey) -> Result<Value, HostError>;

    /// `Store` (3051): write a 32-byte value.
    fn store(&mut self, key: &StorageKey, value: &Value) -> Result<(), HostError>;

    // ── Call output ──

    /// `SetReturnData` (3061): replace the call's return payload.
    fn set_return_data(&mut self, data: &[u8]) -> Result<(), HostError>;

    // ── Accounts ──

    /// `Create` (3071): allocate a new account bound to `script`.
    fn create(&mut self, script: &[u8]) -> Result<AccountId, HostError>;

    /// `LoadScriptHashByAccountId` (4053). Unknown ids yield the zero hash.
    fn get_script_hash_by_account_id(&self, account_id: AccountId) -> Result<ScriptHash, HostError>;

    /// `LoadAccountIdByScriptHash` (4054). `NotFound` if no account has this hash.
    fn get_account_id_by_script_hash(&self, script_hash: &ScriptHash) -> Result<AccountId, HostError>;

    /// `LoadAccountScript` (4055): copy the account's script from `offset`.
    fn load_account_script(
        &self,
        account_id: AccountId,
        offset: usize,
        buf: &mut [u8],
    ) -> Result<usize, HostError>;

    // ── Content-addressed data ──

    /// `StoreData` (4056): file `data` under an address the host computes.
    fn store_data(&mut self, data: &[u8]) -> Result<(), HostError>;

    /// `LoadData` (4057): copy a stored blob from `offset`. `NotFound` if unknown.
    fn load_data(&self, data_hash: &Hash, offset: usize, buf: &mut [u8]) -> Result<usize, HostError>;

    // ── Context ──

    /// `LoadTransaction` (4051): copy the serialized transaction.
    fn load_transaction(&self, buf: &mut [u8]) -> Result<usize, HostError>;

    /// `LoadBlockInfo` (4052): copy the serialized block info.
    fn load_block_info(&self, buf: &mut [u8]) -> Result<usize, HostError>;

    /// `GetBlockHash` (4058). `NotFound` for unknown block numbers.
    fn get_block_hash(&self, number: u64) -> Result<Hash, HostError>;

    // ── Logs ──

    /// `Log` (4061): append a record attributed to `account_id`.
    fn log(&mut self, account_id: AccountId, service_flag: ServiceFlag, data: &[u8]) -> Result<(), HostError>;
}

impl<T: HostChannel + ?Sized> HostChannel for &mut T {
    fn load(&self, key: &StorageKey) -> Result<Value, HostError> {
        (**self).load(key)
    }

    fn store(&mut self, key: &StorageKey, value: &Value) -> Result<(), HostError> {
        (**self).store(key, value)
    }

    fn set_return_data(&mut self, data: &[u8]) -> Result<(), HostError> {
        (**self).set_return_data(data)
    }

    fn create(&mut self, script: &[u8]) -> Result<AccountId, HostError> {
        (**self).create(script)
    }

    fn get_script_hash_by_account_id(&self, account_id: AccountId) -> Result<ScriptHash, HostError> {
        (**self).get_script_hash_by_account_id(account_id)
    }

    fn get_account_id_by_script_hash(&self, script_hash: &ScriptHash) -> Result<AccountId, HostError> {
        (**self).get_account_id_by_script_hash(script_hash)
    }

    fn load_account_script(
        &self,
        account_id: AccountId,
        offset: usize,
        buf: &mut [u8],
    ) -> Result<usize, HostError> {
        (**self).load_account_script(account_id, offset, buf)
    }

    fn store_data(&mut self, data: &[u8]) -> Result<(), HostError> {
        (**self).store_data(data)
    }

    fn load_data(&self, data_hash: &Hash, offset: usize, buf: &mut [u8]) -> Result<usize, HostError> {
        (**self).load_data(data_hash, offset, buf)
    }

    fn load_transaction(&self, buf: &mut [u8]) -> Result<usize, HostError> {
        (**self).load_transaction(buf)
    }

    fn load_block_info(&self, buf: &mut [u8]) -> Result<usize, HostError> {
        (**self).load_block_info(buf)
    }

    fn get_block_hash(&self, number: u64) -> Result<Hash, HostError> {
        (**self).get_block_hash(number)
    }

    fn log(&mut self, account_id: AccountId, service_flag: ServiceFlag, data: &[u8]) -> Result<(), HostError> {
        (**self).log(account_id, service_flag, data)
    }
}

/// Copy `data[offset..]` into `buf`, returning the full remaining length.
pub fn copy_from_offset(data: &[u8], offset: usize, buf: &mut [u8]) -> usize {
    let remaining = data.get(offset..).unwrap_or(&[]);
    let n = remaining.len().min(buf.len());
    buf[..n].copy_from_slice(&remaining[..n]);
    remaining.len()
}
