//! SUDT ledger tests: the worked transfer example and call sequences.

mod common;

use l2gen_generator::{init_context, sudt, GeneratorError, SudtArgs};
use l2gen_primitives::{codec::encode_transaction, ErrorCode, ServiceFlag, TransferLog};

use common::*;

// ── Test: worked example through the ledger API ──

#[test]
fn test_transfer_example() {
    init_tracing();
    let mut host = ledger_host();
    fund(&mut host, LEDGER, ALICE, 100);
    host.set_transaction(encode_transaction(ALICE, LEDGER, 0, &[]));

    let mut ctx = init_context(&mut host).unwrap();
    assert_eq!(sudt::get_balance(ctx.sys(), LEDGER, ALICE).unwrap(), 100);
    assert_eq!(sudt::get_balance(ctx.sys(), LEDGER, BOB).unwrap(), 0);

    sudt::transfer(ctx.sys_mut(), LEDGER, ALICE, BOB, 40).unwrap();

    assert_eq!(sudt::get_balance(ctx.sys(), LEDGER, ALICE).unwrap(), 60);
    assert_eq!(sudt::get_balance(ctx.sys(), LEDGER, BOB).unwrap(), 40);
    ctx.finalize();

    let logs = host.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].account_id, LEDGER);
    assert_eq!(logs[0].service_flag, ServiceFlag::SUDT_OPERATION);
    assert_eq!(logs[0].data[0], 0, "transfer tag");
    assert_eq!(
        TransferLog::decode(&logs[0].data).unwrap(),
        TransferLog { from_id: ALICE, to_id: BOB, amount: 40 }
    );
}

// ── Test: worked example through the call handler ──

#[test]
fn test_transfer_example_via_handler() {
    init_tracing();
    let mut host = ledger_host();
    fund(&mut host, LEDGER, ALICE, 100);

    let code = execute(&mut host, ALICE, LEDGER, SudtArgs::Transfer { to_id: BOB, amount: 40 });
    assert_eq!(code, 0);
    assert_eq!(balance_of(&host, LEDGER, ALICE), 60);
    assert_eq!(balance_of(&host, LEDGER, BOB), 40);
    assert_eq!(host.pending_writes(), 0);
}

// ── Test: committed state carries over between runs ──

#[test]
fn test_sequential_runs() {
    let mut host = ledger_host();
    fund(&mut host, LEDGER, ALICE, 1_000);

    assert_eq!(execute(&mut host, ALICE, LEDGER, SudtArgs::Transfer { to_id: BOB, amount: 300 }), 0);
    assert_eq!(execute(&mut host, BOB, LEDGER, SudtArgs::Transfer { to_id: CAROL, amount: 100 }), 0);
    assert_eq!(execute(&mut host, CAROL, LEDGER, SudtArgs::Transfer { to_id: ALICE, amount: 1 }), 0);

    assert_eq!(balance_of(&host, LEDGER, ALICE), 701);
    assert_eq!(balance_of(&host, LEDGER, BOB), 200);
    assert_eq!(balance_of(&host, LEDGER, CAROL), 99);
}

// ── Test: a failed run leaves no trace ──

#[test]
fn test_failed_run_is_discarded() {
    let mut host = ledger_host();
    fund(&mut host, LEDGER, ALICE, 10);

    let code = execute(&mut host, ALICE, LEDGER, SudtArgs::Transfer { to_id: BOB, amount: 11 });
    assert_eq!(code, ErrorCode::InsufficientBalance.as_i32());
    assert_eq!(balance_of(&host, LEDGER, ALICE), 10);
    assert_eq!(balance_of(&host, LEDGER, BOB), 0);
    assert!(host.logs().is_empty());
}

// ── Test: query returns the balance as return data ──

#[test]
fn test_query_call() {
    let mut host = ledger_host();
    fund(&mut host, LEDGER, BOB, 77);

    assert_eq!(execute(&mut host, ALICE, LEDGER, SudtArgs::Query { account_id: BOB }), 0);
    assert_eq!(host.return_data(), 77u128.to_le_bytes());
}

// ── Test: each rejection maps to its stable code ──

#[test]
fn test_rejections() {
    let mut host = ledger_host();
    fund(&mut host, LEDGER, ALICE, 10);
    fund(&mut host, LEDGER, BOB, u128::MAX);

    let cases = [
        (ALICE, SudtArgs::Transfer { to_id: ALICE, amount: 0 }, ErrorCode::InvalidDestination),
        (ALICE, SudtArgs::Transfer { to_id: 42, amount: 1 }, ErrorCode::AccountNotFound),
        (42, SudtArgs::Transfer { to_id: ALICE, amount: 1 }, ErrorCode::AccountNotFound),
        (ALICE, SudtArgs::Transfer { to_id: BOB, amount: 1 }, ErrorCode::AmountOverflow),
        (ALICE, SudtArgs::Query { account_id: 42 }, ErrorCode::AccountNotFound),
    ];
    for (from, args, expected) in cases {
        assert_eq!(execute(&mut host, from, LEDGER, args), expected.as_i32(), "{:?}", args);
    }
    assert_eq!(balance_of(&host, LEDGER, ALICE), 10);
    assert_eq!(balance_of(&host, LEDGER, BOB), u128::MAX);
}

// ── Test: a call addressed to a missing ledger ──

#[test]
fn test_missing_ledger() {
    let mut host = host_with_accounts(&[ALICE, BOB]);
    let code = execute(&mut host, ALICE, LEDGER, SudtArgs::Transfer { to_id: BOB, amount: 0 });
    assert_eq!(code, ErrorCode::AccountNotFound.as_i32());

    let mut host = host_with_accounts(&[ALICE, BOB]);
    host.set_transaction(encode_transaction(ALICE, LEDGER, 0, &[]));
    let ctx = init_context(&mut host).unwrap();
    assert_eq!(
        sudt::get_balance(ctx.sys(), LEDGER, ALICE),
        Err(GeneratorError::AccountNotFound(LEDGER))
    );
}

// ── Test: the caller's nonce is readable during a run ──

#[test]
fn test_nonce_visible_during_run() {
    let mut host = ledger_host();
    let mut slot = [0u8; 32];
    slot[..4].copy_from_slice(&9u32.to_le_bytes());
    host.set_committed(l2gen_primitives::build_nonce_key(ALICE), slot);
    host.set_transaction(encode_transaction(ALICE, LEDGER, 9, &[]));

    let ctx = init_context(&mut host).unwrap();
    let from_id = ctx.transaction_context().from_id;
    assert_eq!(ctx.sys().account_nonce(from_id).unwrap(), ctx.transaction_context().nonce);
}
