// ============================================================================
// PROVIDER GATEWAY - Frontera wallet/contrato
// ============================================================================
// Trait que abstrae `window.ethereum` + el contrato L3 Ticket.
// Sin lógica de negocio: el ViewModel decide, el gateway solo llama.
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use crate::models::{TxReceipt, WalletError};

/// Handler de `accountsChanged`
pub type AccountsHandler = Rc<dyn Fn(Vec<String>)>;

/// Suscripción activa a `accountsChanged`.
/// Al hacer drop se libera el listener en el provider.
pub struct AccountsSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl AccountsSubscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for AccountsSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Operaciones que el frontend necesita del wallet y del contrato
#[async_trait(?Send)]
pub trait ProviderGateway {
    /// Hay un wallet inyectado
    fn is_present(&self) -> bool;

    /// Pedir autorización de cuentas (puede abrir popup)
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Cuentas ya autorizadas (silencioso)
    async fn list_authorized_accounts(&self) -> Result<Vec<String>, WalletError>;

    async fn chain_id(&self) -> Result<u64, WalletError>;

    async fn signer_address(&self) -> Result<String, WalletError>;

    /// Suscribirse a `accountsChanged`
    fn subscribe_accounts_changed(&self, handler: AccountsHandler) -> Result<AccountsSubscription, WalletError>;

    /// `mintNFT(ticket_count)` con `value_wei` adjunto; espera confirmación
    async fn mint(&self, ticket_count: u64, value_wei: u128) -> Result<TxReceipt, WalletError>;

    /// `withdraw()`; espera confirmación
    async fn withdraw(&self) -> Result<TxReceipt, WalletError>;

    /// `getMostRecentNFTTokenId(owner)`
    async fn latest_token_id(&self, owner: &str) -> Result<String, WalletError>;

    /// `owner()` del contrato
    async fn owner(&self) -> Result<String, WalletError>;
}

/// Aviso interruptivo al holder (alert en el navegador)
pub trait UserNotifier {
    fn notify(&self, message: &str);
}
