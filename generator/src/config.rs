//! Generator configuration.

use l2gen_primitives::codec::BLOCK_INFO_SIZE;

/// Capacity of the transaction buffer fetched from the host.
pub const MAX_L2TX_SIZE: usize = 20 * 1024;

/// Buffer capacities used while building the execution context.
///
/// A host-reported length above a capacity fails initialization; the
/// buffers are never grown to fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum serialized transaction size in bytes.
    pub max_tx_size: usize,
    /// Maximum serialized block info size in bytes.
    pub max_block_info_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_tx_size: MAX_L2TX_SIZE,
            max_block_info_size: BLOCK_INFO_SIZE,
        }
    }
}
