// ============================================================================
// MINT REQUEST + FEE POLICY
// ============================================================================
// El fee se calcula SOLO al enviar: ticket_count * wei_per_ticket
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::WalletError;
use crate::utils::format_wei;

/// 1 unidad nativa (MATIC) en wei
pub const WEI_PER_UNIT: u128 = 1_000_000_000_000_000_000;

/// Input del holder tal cual lo escribió
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MintRequest {
    pub ticket_count: String,
}

impl MintRequest {
    pub fn new(ticket_count: impl Into<String>) -> Self {
        Self {
            ticket_count: ticket_count.into(),
        }
    }

    /// Parsear número de tickets (entero no negativo)
    pub fn parse_ticket_count(&self) -> Result<u64, WalletError> {
        let raw = self.ticket_count.trim();
        if raw.is_empty() {
            return Err(WalletError::PreconditionFailed("ticket count is empty".to_string()));
        }
        raw.parse::<u64>()
            .map_err(|_| WalletError::PreconditionFailed(format!("ticket count '{}' is not a whole number", raw)))
    }
}

/// Política única de fee por ticket (en wei)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePolicy {
    pub wei_per_ticket: u128,
}

impl FeePolicy {
    /// 0.01 MATIC por ticket
    pub const DEFAULT_WEI_PER_TICKET: u128 = WEI_PER_UNIT / 100;

    pub fn new(wei_per_ticket: u128) -> Self {
        Self { wei_per_ticket }
    }

    /// Valor a adjuntar al mint
    pub fn value_for(&self, ticket_count: u64) -> Result<u128, WalletError> {
        self.wei_per_ticket
            .checked_mul(ticket_count as u128)
            .ok_or_else(|| WalletError::PreconditionFailed(format!("fee overflow for {} tickets", ticket_count)))
    }

    /// Texto del fee, p.ej. "0.01 MATIC"
    pub fn label(&self, currency: &str) -> String {
        format!("{} {}", format_wei(self.wei_per_ticket), currency)
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WEI_PER_TICKET)
    }
}
