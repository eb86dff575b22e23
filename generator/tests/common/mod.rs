//! Shared test helpers for integration tests.
//!
//! Provides account setup, balance seeding and inspection, SUDT call
//! encoding, and a run wrapper that commits or discards like a real host.

#![allow(dead_code)]

use l2gen_generator::{run, SudtArgs};
use l2gen_hostapi::MemHost;
use l2gen_primitives::{
    build_account_key, codec::encode_transaction, crypto::script_hash, sudt_balance_sub_key,
    types::{u128_from_value, u128_to_value},
    AccountId, BlockInfo,
};

/// Ledger account used by the worked example.
pub const LEDGER: AccountId = 5;
pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CAROL: AccountId = 3;

/// Install a `tracing` subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ── Host Setup ──

/// Deterministic script bytes for account `id`.
pub fn script_for(id: AccountId) -> Vec<u8> {
    format!("account-script-{}", id).into_bytes()
}

/// A host where every id in `ids` exists, with a default block.
pub fn host_with_accounts(ids: &[AccountId]) -> MemHost {
    let mut host = MemHost::new();
    for id in ids {
        host.insert_account(*id, script_hash(&script_for(*id)));
    }
    host.set_block_info(&default_block());
    host
}

/// Ledger 5 with holders 1, 2 and 3.
pub fn ledger_host() -> MemHost {
    host_with_accounts(&[ALICE, BOB, CAROL, LEDGER])
}

pub fn default_block() -> BlockInfo {
    BlockInfo {
        number: 100,
        timestamp: 1_700_000_000_000,
        block_producer_id: 0,
    }
}

// ── Balances ──

/// Seed a committed balance for `holder` in `ledger`.
pub fn fund(host: &mut MemHost, ledger: AccountId, holder: AccountId, amount: u128) {
    host.set_committed(
        build_account_key(ledger, &sudt_balance_sub_key(holder)),
        u128_to_value(amount),
    );
}

/// Balance as currently visible to a run, read without issuing syscalls.
pub fn balance_of(host: &MemHost, ledger: AccountId, holder: AccountId) -> u128 {
    u128_from_value(&host.value(&build_account_key(ledger, &sudt_balance_sub_key(holder))))
}

// ── Calls ──

/// Load a SUDT call from `from` to `ledger` as the host's transaction.
pub fn set_call(host: &mut MemHost, from: AccountId, ledger: AccountId, nonce: u32, args: SudtArgs) {
    host.set_transaction(encode_transaction(from, ledger, nonce, &args.encode()));
}

/// Run one SUDT call; commit on success, discard otherwise. Returns the exit code.
pub fn execute(host: &mut MemHost, from: AccountId, ledger: AccountId, args: SudtArgs) -> i32 {
    set_call(host, from, ledger, 0, args);
    let code = run(&mut *host);
    if code == 0 {
        if let Err(err) = host.commit() {
            panic!("commit failed: {}", err);
        }
    } else {
        host.discard();
    }
    code
}
