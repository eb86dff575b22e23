//! Entry point of a SUDT ledger account.
//!
//! The transaction's `to_id` is the ledger and its `from_id` is the caller.
//! Arguments are a one-byte tag followed by the operation's fields:
//!
//! ```text
//! 0x00 Query    [account_id: u32]
//! 0x01 Transfer [to_id: u32] [amount: u128]
//! ```

use l2gen_hostapi::HostChannel;
use l2gen_primitives::{codec::Reader, AccountId, CodecError, ErrorCode};

use crate::context::{init_context, ExecutionContext};
use crate::error::{GeneratorError, GeneratorResult};
use crate::sudt;

const TAG_QUERY: u8 = 0;
const TAG_TRANSFER: u8 = 1;

/// A decoded SUDT call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SudtArgs {
    /// Return the balance of `account_id` as 16 little-endian bytes.
    Query { account_id: AccountId },
    /// Move `amount` from the caller to `to_id`.
    Transfer { to_id: AccountId, amount: u128 },
}

impl SudtArgs {
    pub fn encode(&self) -> Vec<u8> {
        match self {
            SudtArgs::Query { account_id } => {
                let mut buf = Vec::with_capacity(5);
                buf.push(TAG_QUERY);
                buf.extend_from_slice(&account_id.to_le_bytes());
                buf
            }
            SudtArgs::Transfer { to_id, amount } => {
                let mut buf = Vec::with_capacity(21);
                buf.push(TAG_TRANSFER);
                buf.extend_from_slice(&to_id.to_le_bytes());
                buf.extend_from_slice(&amount.to_le_bytes());
                buf
            }
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut r = Reader::new(data);
        let args = match r.read_u8()? {
            TAG_QUERY => SudtArgs::Query {
                account_id: r.read_u32()?,
            },
            TAG_TRANSFER => SudtArgs::Transfer {
                to_id: r.read_u32()?,
                amount: r.read_u128()?,
            },
            tag => return Err(CodecError::UnknownTag(tag)),
        };
        r.finish()?;
        Ok(args)
    }
}

/// Execute the call carried by `ctx`'s transaction against its ledger.
pub fn run_sudt<H: HostChannel>(ctx: &mut ExecutionContext<H>) -> GeneratorResult<()> {
    let tx = ctx.transaction_context();
    let sudt_id = tx.to_id;
    let from_id = tx.from_id;
    let args = SudtArgs::decode(&tx.args)
        .map_err(|source| GeneratorError::Parse { what: "sudt args", source })?;

    match args {
        SudtArgs::Query { account_id } => {
            let balance = sudt::get_balance(ctx.sys(), sudt_id, account_id)?;
            ctx.sys_mut().set_return_data(&balance.to_le_bytes())
        }
        SudtArgs::Transfer { to_id, amount } => {
            sudt::transfer(ctx.sys_mut(), sudt_id, from_id, to_id, amount)
        }
    }
}

/// Run one SUDT call end to end and return its exit code.
///
/// Zero means success. On any other code the caller must discard the
/// host's writes for this run.
pub fn run<H: HostChannel>(host: H) -> i32 {
    let result = init_context(host).and_then(|mut ctx| {
        run_sudt(&mut ctx)?;
        ctx.finalize();
        Ok(())
    });
    match result {
        Ok(()) => ErrorCode::Ok.as_i32(),
        Err(err) => {
            tracing::warn!(%err, code = err.code().as_i32(), "sudt call failed");
            err.code().as_i32()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use l2gen_hostapi::MemHost;
    use l2gen_primitives::{
        build_account_key, codec::encode_transaction, sudt_balance_sub_key, types::u128_to_value,
        BlockInfo,
    };

    const LEDGER: AccountId = 0;
    const ALICE: AccountId = 1;
    const BOB: AccountId = 2;

    fn host_with_call(args: &[u8]) -> MemHost {
        let mut host = MemHost::new();
        host.add_account(b"sudt-ledger").unwrap();
        host.add_account(b"alice").unwrap();
        host.add_account(b"bob").unwrap();
        host.set_committed(
            build_account_key(LEDGER, &sudt_balance_sub_key(ALICE)),
            u128_to_value(100),
        );
        host.set_transaction(encode_transaction(ALICE, LEDGER, 0, args));
        host.set_block_info(&BlockInfo::default());
        host
    }

    #[test]
    fn test_decode_args() {
        let query = SudtArgs::Query { account_id: 7 };
        assert_eq!(SudtArgs::decode(&query.encode()).unwrap(), query);

        let transfer = SudtArgs::Transfer { to_id: 2, amount: 1 << 100 };
        assert_eq!(transfer.encode().len(), 21);
        assert_eq!(SudtArgs::decode(&transfer.encode()).unwrap(), transfer);
    }

    #[test]
    fn test_decode_rejects_malformed_args() {
        assert_eq!(SudtArgs::decode(&[9, 0, 0, 0, 0]), Err(CodecError::UnknownTag(9)));
        assert!(matches!(
            SudtArgs::decode(&[TAG_QUERY, 1, 0]),
            Err(CodecError::UnexpectedEnd { .. })
        ));
        assert_eq!(
            SudtArgs::decode(&[TAG_QUERY, 1, 0, 0, 0, 0xff]),
            Err(CodecError::TrailingBytes(1))
        );
        assert!(SudtArgs::decode(&[]).is_err());
    }

    #[test]
    fn test_query_returns_balance() {
        let mut host = host_with_call(&SudtArgs::Query { account_id: ALICE }.encode());
        assert_eq!(run(&mut host), 0);
        assert_eq!(host.return_data(), 100u128.to_le_bytes());
        assert!(host.logs().is_empty());
    }

    #[test]
    fn test_transfer_from_caller() {
        let mut host = host_with_call(&SudtArgs::Transfer { to_id: BOB, amount: 30 }.encode());
        assert_eq!(run(&mut host), 0);
        host.commit().unwrap();

        assert_eq!(
            host.value(&build_account_key(LEDGER, &sudt_balance_sub_key(ALICE))),
            u128_to_value(70)
        );
        assert_eq!(
            host.value(&build_account_key(LEDGER, &sudt_balance_sub_key(BOB))),
            u128_to_value(30)
        );
        assert_eq!(host.logs().len(), 1);
        assert!(host.return_data().is_empty());
    }

    #[test]
    fn test_error_codes() {
        let mut host = host_with_call(&[7]);
        assert_eq!(run(&mut host), ErrorCode::InvalidData.as_i32());

        let mut host = host_with_call(&SudtArgs::Transfer { to_id: ALICE, amount: 1 }.encode());
        assert_eq!(run(&mut host), ErrorCode::InvalidDestination.as_i32());

        let mut host = host_with_call(&SudtArgs::Transfer { to_id: BOB, amount: 101 }.encode());
        assert_eq!(run(&mut host), ErrorCode::InsufficientBalance.as_i32());

        let mut host = host_with_call(&SudtArgs::Query { account_id: 9 }.encode());
        assert_eq!(run(&mut host), ErrorCode::AccountNotFound.as_i32());
    }

    #[test]
    fn test_missing_block_info_fails_init() {
        let mut host = host_with_call(&SudtArgs::Query { account_id: ALICE }.encode());
        host.set_block_info_raw(Vec::new());
        assert_eq!(run(&mut host), ErrorCode::InvalidData.as_i32());
        assert!(host.return_data().is_empty());
    }
}
