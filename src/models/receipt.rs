// ============================================================================
// TX RECEIPT - Recibo de transacción confirmada
// ============================================================================

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use crate::models::WalletError;

/// Recibo tal como llega de `eth_getTransactionReceipt`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcReceipt {
    pub transaction_hash: String,
    pub block_number: Option<String>,
    pub status: Option<String>,
}

/// Recibo normalizado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub transaction_hash: String,
    pub block_number: Option<u64>,
    pub succeeded: bool,
}

impl TryFrom<RpcReceipt> for TxReceipt {
    type Error = WalletError;

    fn try_from(raw: RpcReceipt) -> Result<Self, Self::Error> {
        let block_number = match raw.block_number.as_deref() {
            Some(hex) => Some(parse_quantity(hex)?),
            None => None,
        };
        // Pre-Byzantium no trae status: se asume éxito
        let succeeded = match raw.status.as_deref() {
            Some(status) => parse_quantity(status)? == 1,
            None => true,
        };
        Ok(Self {
            transaction_hash: raw.transaction_hash,
            block_number,
            succeeded,
        })
    }
}

/// Parsear quantity hex ("0x1a") a u64 pasando por U256
pub fn parse_quantity(hex: &str) -> Result<u64, WalletError> {
    let digits = hex.trim_start_matches("0x");
    if digits.is_empty() {
        return Ok(0);
    }
    let value = U256::from_str_radix(digits, 16)
        .map_err(|e| WalletError::ExternalCallFailed(format!("Invalid quantity '{}': {}", hex, e)))?;
    u64::try_from(value)
        .map_err(|_| WalletError::ExternalCallFailed(format!("Quantity '{}' does not fit in u64", hex)))
}
