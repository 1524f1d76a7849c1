// ============================================================================
// OPERATION RESULT - Estado por operación (connect, mint, refresh, withdraw)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estado de una operación asíncrona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    Idle,
    Pending,
    Success,
    Failed,
}

/// Operaciones que dispara el holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Connect,
    Mint,
    Refresh,
    Withdraw,
}

impl OperationKind {
    pub fn tag(&self) -> &'static str {
        match self {
            OperationKind::Connect => "CONNECT",
            OperationKind::Mint => "MINT",
            OperationKind::Refresh => "REFRESH",
            OperationKind::Withdraw => "WITHDRAW",
        }
    }
}

/// Resultado de la última invocación de una operación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub status: OperationStatus,
    pub error_detail: Option<String>,
    pub payload: Option<String>,
}

impl OperationResult {
    pub fn idle() -> Self {
        Self {
            status: OperationStatus::Idle,
            error_detail: None,
            payload: None,
        }
    }

    /// Nueva invocación: se re-entra en Pending desde cualquier estado terminal
    pub fn begin(&mut self) {
        *self = Self {
            status: OperationStatus::Pending,
            error_detail: None,
            payload: None,
        };
    }

    pub fn succeed(&mut self, payload: Option<String>) {
        self.status = OperationStatus::Success;
        self.error_detail = None;
        self.payload = payload;
    }

    pub fn fail(&mut self, detail: String) {
        self.status = OperationStatus::Failed;
        self.error_detail = Some(detail);
    }

    pub fn is_pending(&self) -> bool {
        self.status == OperationStatus::Pending
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == OperationStatus::Failed
    }
}

impl Default for OperationResult {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_resets_previous_outcome() {
        let mut result = OperationResult::idle();
        result.begin();
        result.fail("execution reverted".to_string());
        assert!(result.is_failed());

        result.begin();
        assert!(result.is_pending());
        assert_eq!(result.error_detail, None);
        assert_eq!(result.payload, None);

        result.succeed(Some("0xabc".to_string()));
        assert!(result.is_success());
        assert_eq!(result.payload.as_deref(), Some("0xabc"));
    }
}
