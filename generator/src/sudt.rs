//! Simple-UDT ledger.
//!
//! A SUDT ledger is an account whose storage holds one balance slot per
//! holder. The slot for holder `h` lives under the ledger account at the
//! logical key [`sudt_balance_sub_key`]`(h)`; its value is a `u128` in the
//! low 16 bytes. The ledger keeps no state of its own and reaches the host
//! only through [`Syscalls`].
//!
//! A transfer writes two balances and then appends one [`TransferLog`].
//! There is no rollback: if a write fails midway the whole run must be
//! discarded by the caller.

use l2gen_hostapi::HostChannel;
use l2gen_primitives::{
    sudt_balance_sub_key,
    types::{u128_from_value, u128_to_value},
    AccountId, ServiceFlag, TransferLog,
};

use crate::error::{GeneratorError, GeneratorResult};
use crate::syscalls::Syscalls;

/// Balance of `account_id` in the ledger `sudt_id`.
pub fn get_balance<H: HostChannel>(
    sys: &Syscalls<H>,
    sudt_id: AccountId,
    account_id: AccountId,
) -> GeneratorResult<u128> {
    sys.ensure_account_exists(account_id)?;
    read_balance(sys, sudt_id, account_id)
}

/// Move `amount` from `from_id` to `to_id` in the ledger `sudt_id`.
///
/// All checks happen before the first write: a rejected transfer leaves
/// both balances untouched.
pub fn transfer<H: HostChannel>(
    sys: &mut Syscalls<H>,
    sudt_id: AccountId,
    from_id: AccountId,
    to_id: AccountId,
    amount: u128,
) -> GeneratorResult<()> {
    if from_id == to_id {
        tracing::warn!(sudt_id, from_id, "rejected self-transfer");
        return Err(GeneratorError::InvalidDestination(to_id));
    }
    sys.ensure_account_exists(from_id)?;
    sys.ensure_account_exists(to_id)?;

    let from_balance = read_balance(sys, sudt_id, from_id)?;
    let new_from_balance = from_balance.checked_sub(amount).ok_or_else(|| {
        tracing::warn!(sudt_id, from_id, %from_balance, %amount, "insufficient balance");
        GeneratorError::InsufficientBalance {
            balance: from_balance,
            amount,
        }
    })?;

    let to_balance = read_balance(sys, sudt_id, to_id)?;
    let new_to_balance = to_balance.checked_add(amount).ok_or_else(|| {
        tracing::warn!(sudt_id, to_id, %to_balance, %amount, "balance overflow");
        GeneratorError::AmountOverflow {
            balance: to_balance,
            amount,
        }
    })?;

    write_balance(sys, sudt_id, from_id, new_from_balance)?;
    write_balance(sys, sudt_id, to_id, new_to_balance)?;

    let log = TransferLog { from_id, to_id, amount };
    sys.log(sudt_id, ServiceFlag::SUDT_OPERATION, &log.encode())?;

    tracing::info!(sudt_id, from_id, to_id, %amount, "sudt transfer");
    Ok(())
}

fn read_balance<H: HostChannel>(
    sys: &Syscalls<H>,
    sudt_id: AccountId,
    holder: AccountId,
) -> GeneratorResult<u128> {
    let value = sys.load(sudt_id, &sudt_balance_sub_key(holder))?;
    Ok(u128_from_value(&value))
}

fn write_balance<H: HostChannel>(
    sys: &mut Syscalls<H>,
    sudt_id: AccountId,
    holder: AccountId,
    balance: u128,
) -> GeneratorResult<()> {
    sys.store(sudt_id, &sudt_balance_sub_key(holder), &u128_to_value(balance))
}
