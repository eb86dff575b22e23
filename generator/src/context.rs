//! Execution context: the typed view of one generator run.
//!
//! [`init_context`] is called exactly once per run. It fetches the
//! serialized transaction and block info from the host into buffers of a
//! fixed capacity, decodes both, and binds the syscall gateway to the
//! injected host channel. The context is immutable afterwards; only the
//! gateway is handed out mutably.

use l2gen_hostapi::{HostChannel, HostError};
use l2gen_primitives::{BlockInfo, TransactionContext};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::syscalls::Syscalls;

/// Everything a run needs: the transaction, its block, and the gateway.
#[derive(Debug)]
pub struct ExecutionContext<H> {
    transaction_context: TransactionContext,
    block_info: BlockInfo,
    sys: Syscalls<H>,
}

impl<H: HostChannel> ExecutionContext<H> {
    pub fn transaction_context(&self) -> &TransactionContext {
        &self.transaction_context
    }

    pub fn block_info(&self) -> &BlockInfo {
        &self.block_info
    }

    /// The gateway, for read-only operations.
    pub fn sys(&self) -> &Syscalls<H> {
        &self.sys
    }

    /// The gateway, for operations that write.
    pub fn sys_mut(&mut self) -> &mut Syscalls<H> {
        &mut self.sys
    }

    /// End the run. Releases nothing today and always succeeds; the host
    /// channel is handed back so the caller can commit or discard the run.
    pub fn finalize(self) -> H {
        self.sys.into_host()
    }
}

/// Build the execution context with the default buffer capacities.
pub fn init_context<H: HostChannel>(host: H) -> GeneratorResult<ExecutionContext<H>> {
    init_context_with_config(host, &GeneratorConfig::default())
}

/// Build the execution context with explicit buffer capacities.
pub fn init_context_with_config<H: HostChannel>(
    host: H,
    config: &GeneratorConfig,
) -> GeneratorResult<ExecutionContext<H>> {
    let raw_tx = fetch_bounded("transaction", config.max_tx_size, |buf| {
        host.load_transaction(buf)
    })
    .inspect_err(|err| tracing::warn!(%err, "failed to load transaction"))?;
    let transaction_context = TransactionContext::decode(&raw_tx)
        .map_err(|source| GeneratorError::Parse { what: "transaction", source })
        .inspect_err(|err| tracing::warn!(%err, "failed to decode transaction"))?;

    let raw_block_info = fetch_bounded("block info", config.max_block_info_size, |buf| {
        host.load_block_info(buf)
    })
    .inspect_err(|err| tracing::warn!(%err, "failed to load block info"))?;
    let block_info = BlockInfo::decode(&raw_block_info)
        .map_err(|source| GeneratorError::Parse { what: "block info", source })
        .inspect_err(|err| tracing::warn!(%err, "failed to decode block info"))?;

    tracing::debug!(
        from_id = transaction_context.from_id,
        to_id = transaction_context.to_id,
        block_number = block_info.number,
        "initialized execution context"
    );

    Ok(ExecutionContext {
        transaction_context,
        block_info,
        sys: Syscalls::new(host),
    })
}

/// Fetch a host buffer into `max` bytes of capacity.
///
/// The host reports the full length of its data. If that exceeds `max`
/// the fetch fails; nothing beyond `max` is ever read.
fn fetch_bounded(
    what: &'static str,
    max: usize,
    load: impl FnOnce(&mut [u8]) -> Result<usize, HostError>,
) -> GeneratorResult<Vec<u8>> {
    let mut buf = vec![0u8; max];
    let len = load(&mut buf)?;
    if len > max {
        return Err(GeneratorError::InvalidData { what, len, max });
    }
    buf.truncate(len);
    Ok(buf)
}
