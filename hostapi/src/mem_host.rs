//! In-memory host for deterministic testing and local runs.
//!
//! `MemHost` implements every [`HostChannel`] syscall over plain
//! collections. Account storage writes are buffered in front of a
//! [`StateStore`] and applied only by [`MemHost::commit`], so a failed run
//! can be dropped whole with [`MemHost::discard`]. Every syscall is
//! recorded in a trace that tests inspect to check which host operations a
//! gateway call actually issued.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use l2gen_primitives::{
    crypto::{data_hash, script_hash},
    AccountId, BlockInfo, Hash, ScriptHash, ServiceFlag, StorageKey, SyscallCode, Value,
    ZERO_HASH,
};

use crate::error::HostError;
use crate::mem_store::MemStore;
use crate::state_store::StateStore;
use crate::traits::{copy_from_offset, HostChannel};
use crate::types::{HostConfig, LogEntry};

/// In-memory implementation of the generator host.
#[derive(Debug, Default)]
pub struct MemHost {
    config: HostConfig,
    /// Committed account storage.
    store: MemStore,
    /// Writes of the current run, not yet committed.
    pending: BTreeMap<StorageKey, Value>,
    script_hashes: BTreeMap<AccountId, ScriptHash>,
    account_ids: BTreeMap<ScriptHash, AccountId>,
    scripts: BTreeMap<AccountId, Vec<u8>>,
    next_account_id: AccountId,
    data: BTreeMap<Hash, Vec<u8>>,
    block_hashes: BTreeMap<u64, Hash>,
    transaction: Vec<u8>,
    block_info: Vec<u8>,
    /// Overrides the transaction length reported to the guest.
    reported_tx_len: Option<usize>,
    return_data: Vec<u8>,
    logs: Vec<LogEntry>,
    calls: RefCell<Vec<SyscallCode>>,
    failing: BTreeSet<SyscallCode>,
}

impl MemHost {
    /// Create an empty host with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty host with explicit limits.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ── Setup ──

    /// Register an account outside of any run and return its id.
    ///
    /// Unlike `create`, this is not a syscall and is not traced.
    pub fn add_account(&mut self, script: &[u8]) -> Result<AccountId, HostError> {
        self.register_account(script)
    }

    /// Bind `script_hash` to a specific id, as if the account had been
    /// created earlier with a script whose bytes are unknown.
    pub fn insert_account(&mut self, account_id: AccountId, script_hash: ScriptHash) {
        self.script_hashes.insert(account_id, script_hash);
        self.account_ids.insert(script_hash, account_id);
        self.next_account_id = self.next_account_id.max(account_id.saturating_add(1));
    }

    /// Set the serialized transaction returned by `load_transaction`.
    pub fn set_transaction(&mut self, raw: Vec<u8>) {
        self.transaction = raw;
    }

    /// Make `load_transaction` report `len` instead of the true length.
    pub fn report_transaction_len(&mut self, len: usize) {
        self.reported_tx_len = Some(len);
    }

    /// Set the serialized block info returned by `load_block_info`.
    pub fn set_block_info_raw(&mut self, raw: Vec<u8>) {
        self.block_info = raw;
    }

    /// Set the block info returned by `load_block_info`.
    pub fn set_block_info(&mut self, info: &BlockInfo) {
        self.block_info = info.encode().to_vec();
    }

    /// Record the hash of a historical block.
    pub fn insert_block_hash(&mut self, number: u64, hash: Hash) {
        self.block_hashes.insert(number, hash);
    }

    /// Write directly to committed storage.
    pub fn set_committed(&mut self, key: StorageKey, value: Value) {
        self.store.insert(key, value);
    }

    /// Make every subsequent call of `code` fail with an I/O error.
    pub fn fail_on(&mut self, code: SyscallCode) {
        self.failing.insert(code);
    }

    /// Stop injecting failures for `code`.
    pub fn clear_failure(&mut self, code: SyscallCode) {
        self.failing.remove(&code);
    }

    // ── Run lifecycle ──

    /// Apply the run's buffered writes to committed storage.
    pub fn commit(&mut self) -> Result<(), HostError> {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        for (key, value) in pending {
            self.store.put(key, value)?;
        }
        tracing::debug!(writes = count, "committed generator run");
        Ok(())
    }

    /// Drop the run's buffered writes, logs and return data.
    pub fn discard(&mut self) {
        tracing::debug!(writes = self.pending.len(), logs = self.logs.len(), "discarded generator run");
        self.pending.clear();
        self.logs.clear();
        self.return_data.clear();
    }

    // ── Inspection ──

    /// Read a value as the guest would see it (pending writes first).
    pub fn value(&self, key: &StorageKey) -> Value {
        self.read(key).unwrap_or([0u8; 32])
    }

    /// Committed storage, excluding pending writes.
    pub fn committed_state(&self) -> &MemStore {
        &self.store
    }

    /// Number of buffered, uncommitted writes.
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    pub fn return_data(&self) -> &[u8] {
        &self.return_data
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Move out the logs emitted so far.
    pub fn take_logs(&mut self) -> Vec<LogEntry> {
        std::mem::take(&mut self.logs)
    }

    /// Move out the current return data, leaving it empty for the next run.
    pub fn take_return_data(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.return_data)
    }

    /// Syscalls issued so far, in order.
    pub fn calls(&self) -> Vec<SyscallCode> {
        self.calls.borrow().clone()
    }

    /// Forget the recorded syscall trace.
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    // ── Internals ──

    fn enter(&self, code: SyscallCode) -> Result<(), HostError> {
        tracing::trace!(syscall = %code, "host syscall");
        self.calls.borrow_mut().push(code);
        if self.failing.contains(&code) {
            return Err(HostError::io(format!("injected failure for {}", code)));
        }
        Ok(())
    }

    fn read(&self, key: &StorageKey) -> Result<Value, HostError> {
        if let Some(value) = self.pending.get(key) {
            return Ok(*value);
        }
        Ok(self.store.get(key)?.unwrap_or([0u8; 32]))
    }

    fn register_account(&mut self, script: &[u8]) -> Result<AccountId, HostError> {
        let hash = script_hash(script);
        if self.account_ids.contains_key(&hash) {
            return Err(HostError::DuplicatedScriptHash);
        }
        let id = self.next_account_id;
        if id >= self.config.max_accounts || id == AccountId::MAX {
            return Err(HostError::ResourceExhausted("account ids".into()));
        }
        self.next_account_id = id + 1;
        self.script_hashes.insert(id, hash);
        self.account_ids.insert(hash, id);
        self.scripts.insert(id, script.to_vec());
        Ok(id)
    }
}

impl HostChannel for MemHost {
    fn load(&self, key: &StorageKey) -> Result<Value, HostError> {
        self.enter(SyscallCode::Load)?;
        self.read(key)
    }

    fn store(&mut self, key: &StorageKey, value: &Value) -> Result<(), HostError> {
        self.enter(SyscallCode::Store)?;
        self.pending.insert(*key, *value);
        Ok(())
    }

    fn set_return_data(&mut self, data: &[u8]) -> Result<(), HostError> {
        self.enter(SyscallCode::SetReturnData)?;
        if data.len() > self.config.max_return_data_size {
            return Err(HostError::ResourceExhausted(format!(
                "return data of {} bytes exceeds {}",
                data.len(),
                self.config.max_return_data_size
            )));
        }
        self.return_data = data.to_vec();
        Ok(())
    }

    fn create(&mut self, script: &[u8]) -> Result<AccountId, HostError> {
        self.enter(SyscallCode::Create)?;
        self.register_account(script)
    }

    fn get_script_hash_by_account_id(&self, account_id: AccountId) -> Result<ScriptHash, HostError> {
        self.enter(SyscallCode::LoadScriptHashByAccountId)?;
        Ok(self.script_hashes.get(&account_id).copied().unwrap_or(ZERO_HASH))
    }

    fn get_account_id_by_script_hash(&self, script_hash: &ScriptHash) -> Result<AccountId, HostError> {
        self.enter(SyscallCode::LoadAccountIdByScriptHash)?;
        self.account_ids.get(script_hash).copied().ok_or(HostError::NotFound)
    }

    fn load_account_script(
        &self,
        account_id: AccountId,
        offset: usize,
        buf: &mut [u8],
    ) -> Result<usize, HostError> {
        self.enter(SyscallCode::LoadAccountScript)?;
        let script = self.scripts.get(&account_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(copy_from_offset(script, offset, buf))
    }

    fn store_data(&mut self, data: &[u8]) -> Result<(), HostError> {
        self.enter(SyscallCode::StoreData)?;
        self.data.insert(data_hash(data), data.to_vec());
        Ok(())
    }

    fn load_data(&self, data_hash: &Hash, offset: usize, buf: &mut [u8]) -> Result<usize, HostError> {
        self.enter(SyscallCode::LoadData)?;
        let data = self.data.get(data_hash).ok_or(HostError::NotFound)?;
        Ok(copy_from_offset(data, offset, buf))
    }

    fn load_transaction(&self, buf: &mut [u8]) -> Result<usize, HostError> {
        self.enter(SyscallCode::LoadTransaction)?;
        let len = copy_from_offset(&self.transaction, 0, buf);
        Ok(self.reported_tx_len.unwrap_or(len))
    }

    fn load_block_info(&self, buf: &mut [u8]) -> Result<usize, HostError> {
        self.enter(SyscallCode::LoadBlockInfo)?;
        Ok(copy_from_offset(&self.block_info, 0, buf))
    }

    fn get_block_hash(&self, number: u64) -> Result<Hash, HostError> {
        self.enter(SyscallCode::GetBlockHash)?;
        self.block_hashes.get(&number).copied().ok_or(HostError::NotFound)
    }

    fn log(&mut self, account_id: AccountId, service_flag: ServiceFlag, data: &[u8]) -> Result<(), HostError> {
        self.enter(SyscallCode::Log)?;
        self.logs.push(LogEntry {
            account_id,
            service_flag,
            data: data.to_vec(),
        });
        Ok(())
    }
}
