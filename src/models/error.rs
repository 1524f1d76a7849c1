// ============================================================================
// WALLET ERROR - Taxonomía de errores de wallet/contrato
// ============================================================================

/// Error en la frontera wallet/contrato
#[derive(Debug, Clone, PartialEq)]
pub enum WalletError {
    /// No hay `window.ethereum` inyectado
    ProviderUnavailable,
    /// El holder rechazó la conexión o la firma
    AuthorizationRejected(String),
    /// Chain id distinto al aceptado
    NetworkMismatch { expected: u64, actual: u64 },
    /// Input o estado local inválido (se previene deshabilitando el control)
    PreconditionFailed(String),
    /// Revert, fallo de broadcast o de confirmación
    ExternalCallFailed(String),
}

impl WalletError {
    /// Código EIP-1193 "User Rejected Request"
    pub const USER_REJECTED_CODE: i64 = 4001;

    /// Clasificar un error devuelto por el provider según su código EIP-1193
    pub fn from_provider(code: Option<i64>, message: String) -> Self {
        match code {
            Some(Self::USER_REJECTED_CODE) => WalletError::AuthorizationRejected(message),
            _ => WalletError::ExternalCallFailed(message),
        }
    }
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletError::ProviderUnavailable => write!(f, "No wallet provider found, install MetaMask"),
            WalletError::AuthorizationRejected(msg) => write!(f, "Authorization rejected: {}", msg),
            WalletError::NetworkMismatch { expected, actual } => {
                write!(f, "Wrong network: expected chain {}, got {}", expected, actual)
            }
            WalletError::PreconditionFailed(msg) => write!(f, "Precondition failed: {}", msg),
            WalletError::ExternalCallFailed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for WalletError {}
