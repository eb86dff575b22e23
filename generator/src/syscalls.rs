//! Syscall gateway: typed, existence-checked access to the host.
//!
//! `Syscalls` wraps a [`HostChannel`] and is the only way generator code
//! reaches host state. It exposes one method per gateway operation.
//!
//! # Account existence contract
//!
//! The host's storage layer guarantees that an account exists if and only if
//! its script hash is non-zero. Every operation whose subject is an account
//! (`load`, `store`, `load_nonce`, `log`) looks the script hash up again on
//! each call and fails with [`GeneratorError::AccountNotFound`] before any
//! storage syscall is issued. Results are never cached.

use l2gen_hostapi::{HostChannel, HostError};
use l2gen_primitives::{
    build_account_key, build_nonce_key, types::{is_zero_hash, u32_from_le_bytes}, AccountId, Hash, ScriptHash,
    ServiceFlag, Value,
};

use crate::error::{GeneratorError, GeneratorResult};

/// The gateway operations bound into an execution context.
#[derive(Debug)]
pub struct Syscalls<H> {
    host: H,
}

impl<H: HostChannel> Syscalls<H> {
    pub(crate) fn new(host: H) -> Self {
        Self { host }
    }

    pub(crate) fn into_host(self) -> H {
        self.host
    }

    /// Fail with `AccountNotFound` unless `account_id` exists.
    pub(crate) fn ensure_account_exists(&self, account_id: AccountId) -> GeneratorResult<()> {
        ensure_account_exists(&self.host, account_id)
    }

    /// Read the 32-byte value of `key` in `account_id`'s storage.
    pub fn load(&self, account_id: AccountId, key: &[u8; 32]) -> GeneratorResult<Value> {
        ensure_account_exists(&self.host, account_id)?;
        let raw_key = build_account_key(account_id, key);
        tracing::debug!(account_id, "sys_load");
        Ok(self.host.load(&raw_key)?)
    }

    /// Write the 32-byte value of `key` in `account_id`'s storage.
    pub fn store(&mut self, account_id: AccountId, key: &[u8; 32], value: &Value) -> GeneratorResult<()> {
        ensure_account_exists(&self.host, account_id)?;
        let raw_key = build_account_key(account_id, key);
        tracing::debug!(account_id, "sys_store");
        Ok(self.host.store(&raw_key, value)?)
    }

    /// Read `account_id`'s nonce slot.
    pub fn load_nonce(&self, account_id: AccountId) -> GeneratorResult<Value> {
        ensure_account_exists(&self.host, account_id)?;
        let raw_key = build_nonce_key(account_id);
        tracing::debug!(account_id, "sys_load_nonce");
        Ok(self.host.load(&raw_key)?)
    }

    /// `account_id`'s nonce, taken from the low 4 bytes of its nonce slot.
    pub fn account_nonce(&self, account_id: AccountId) -> GeneratorResult<u32> {
        let value = self.load_nonce(account_id)?;
        Ok(u32_from_le_bytes(&value).unwrap_or_default())
    }

    /// Set the call's return payload.
    pub fn set_return_data(&mut self, data: &[u8]) -> GeneratorResult<()> {
        tracing::debug!(len = data.len(), "sys_set_return_data");
        Ok(self.host.set_return_data(data)?)
    }

    /// Look up the account bound to `script_hash`.
    pub fn get_account_id_by_script_hash(&self, script_hash: &ScriptHash) -> GeneratorResult<AccountId> {
        tracing::debug!("sys_get_account_id_by_script_hash");
        self.host
            .get_account_id_by_script_hash(script_hash)
            .map_err(GeneratorError::from_lookup)
    }

    /// Look up the script hash of `account_id`. Zero means the account does not exist.
    pub fn get_script_hash_by_account_id(&self, account_id: AccountId) -> GeneratorResult<ScriptHash> {
        tracing::debug!(account_id, "sys_get_script_hash_by_account_id");
        Ok(self.host.get_script_hash_by_account_id(account_id)?)
    }

    /// Read up to `max_len` bytes of `account_id`'s script, starting at `offset`.
    pub fn get_account_script(
        &self,
        account_id: AccountId,
        offset: usize,
        max_len: usize,
    ) -> GeneratorResult<Vec<u8>> {
        tracing::debug!(account_id, offset, max_len, "sys_get_account_script");
        Ok(read_page(max_len, |buf| {
            self.host.load_account_script(account_id, offset, buf)
        })?)
    }

    /// Store a blob; the host addresses it by its hash.
    pub fn store_data(&mut self, data: &[u8]) -> GeneratorResult<()> {
        tracing::debug!(len = data.len(), "sys_store_data");
        Ok(self.host.store_data(data)?)
    }

    /// Read up to `max_len` bytes of the blob stored under `data_hash`, from `offset`.
    pub fn load_data(&self, data_hash: &Hash, offset: usize, max_len: usize) -> GeneratorResult<Vec<u8>> {
        tracing::debug!(offset, max_len, "sys_load_data");
        read_page(max_len, |buf| self.host.load_data(data_hash, offset, buf))
            .map_err(GeneratorError::from_lookup)
    }

    /// Hash of historical block `number`.
    pub fn get_block_hash(&self, number: u64) -> GeneratorResult<Hash> {
        tracing::debug!(number, "sys_get_block_hash");
        self.host.get_block_hash(number).map_err(GeneratorError::from_lookup)
    }

    /// Create a new account bound to `script`.
    pub fn create(&mut self, script: &[u8]) -> GeneratorResult<AccountId> {
        let account_id = self.host.create(script)?;
        tracing::debug!(account_id, "sys_create");
        Ok(account_id)
    }

    /// Append a log record attributed to `account_id`.
    pub fn log(&mut self, account_id: AccountId, service_flag: ServiceFlag, data: &[u8]) -> GeneratorResult<()> {
        ensure_account_exists(&self.host, account_id)?;
        tracing::debug!(account_id, service_flag = %service_flag, len = data.len(), "sys_log");
        Ok(self.host.log(account_id, service_flag, data)?)
    }
}

/// Read one page through a host call that reports the bytes left past its offset.
///
/// The host is asked for the remaining length first, so the buffer is never
/// larger than the data behind it whatever `max_len` the caller passes.
fn read_page<F>(max_len: usize, mut read: F) -> Result<Vec<u8>, HostError>
where
    F: FnMut(&mut [u8]) -> Result<usize, HostError>,
{
    let available = read(&mut [0u8; 0][..])?;
    let mut buf = vec![0u8; available.min(max_len)];
    if !buf.is_empty() {
        let copied = read(&mut buf)?;
        buf.truncate(copied.min(buf.len()));
    }
    Ok(buf)
}

/// Returns whether `account_id` has a non-zero script hash.
fn account_exists<H: HostChannel>(host: &H, account_id: AccountId) -> GeneratorResult<bool> {
    let script_hash = host.get_script_hash_by_account_id(account_id)?;
    Ok(!is_zero_hash(&script_hash))
}

fn ensure_account_exists<H: HostChannel>(host: &H, account_id: AccountId) -> GeneratorResult<()> {
    if account_exists(host, account_id)? {
        Ok(())
    } else {
        tracing::debug!(account_id, "account not found");
        Err(GeneratorError::AccountNotFound(account_id))
    }
}
