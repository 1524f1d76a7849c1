// ============================================================================
// WALLET VIEWMODEL - Controlador de operaciones del wallet
// ============================================================================
// Cada operación: provider -> precondiciones -> llamada externa -> await
// -> actualizar OperationResult + SessionState -> notificar a las views.
// Ningún error sale de aquí: todo termina en el OperationResult.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::{FeePolicy, WalletError};
use crate::services::{AccountsSubscription, ProviderGateway, UserNotifier};
use crate::state::AppState;
use crate::utils::marketplace_url;

/// Ajustes del controlador derivados de la configuración
#[derive(Debug, Clone)]
pub struct WalletSettings {
    pub accepted_chain_id: u64,
    pub network_name: String,
    pub fee_policy: FeePolicy,
    pub collection_address: String,
    pub marketplace_base_url: String,
    pub marketplace_network: String,
}

impl WalletSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            accepted_chain_id: config.network.accepted_chain_id,
            network_name: config.network.network_name.clone(),
            fee_policy: config.fee_policy(),
            collection_address: config.contract.address.clone(),
            marketplace_base_url: config.marketplace.base_url.clone(),
            marketplace_network: config.marketplace.network_slug.clone(),
        }
    }
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// ViewModel del wallet - único que muta SessionState y los OperationResult
#[derive(Clone)]
pub struct WalletViewModel {
    provider: Rc<dyn ProviderGateway>,
    notifier: Rc<dyn UserNotifier>,
    state: AppState,
    settings: WalletSettings,
    subscription: Rc<RefCell<Option<AccountsSubscription>>>,
}

impl WalletViewModel {
    pub fn new(
        provider: Rc<dyn ProviderGateway>,
        notifier: Rc<dyn UserNotifier>,
        state: AppState,
        settings: WalletSettings,
    ) -> Self {
        Self {
            provider,
            notifier,
            state,
            settings,
            subscription: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &WalletSettings {
        &self.settings
    }

    /// Arranque: reconectar en silencio si ya hay cuentas autorizadas
    pub async fn initialize(&self) {
        if !self.provider.is_present() {
            log::warn!("🦊 [WALLET] No hay wallet inyectado (window.ethereum)");
            return;
        }

        self.ensure_subscription();

        match self.provider.list_authorized_accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(account) => {
                    log::info!("🔁 [WALLET] Cuenta ya autorizada, restaurando sesión");
                    self.establish_session(account).await;
                }
                None => log::info!("🦊 [WALLET] Sin cuentas autorizadas, esperando connect"),
            },
            Err(e) => log::error!("❌ [WALLET] Error listando cuentas: {}", e),
        }
        self.state.notify_subscribers();
    }

    /// Connect: pide autorización de cuentas (puede abrir popup)
    pub async fn connect(&self) {
        if self.state.connect.is_pending() {
            log::warn!("⚠️ [CONNECT] Ya hay una autorización en curso, ignorando");
            return;
        }
        if self.state.session.is_connected() {
            log::info!("🦊 [CONNECT] Ya conectado, nada que hacer");
            return;
        }

        self.state.connect.begin();
        self.state.notify_subscribers();

        if !self.provider.is_present() {
            self.state.connect.fail(WalletError::ProviderUnavailable.to_string());
            self.state.notify_subscribers();
            return;
        }

        let accounts = match self.provider.request_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                self.state.connect.fail(e.to_string());
                self.state.notify_subscribers();
                return;
            }
        };

        let Some(account) = accounts.into_iter().next() else {
            let e = WalletError::AuthorizationRejected("no account authorized".to_string());
            self.state.connect.fail(e.to_string());
            self.state.notify_subscribers();
            return;
        };

        self.ensure_subscription();
        self.establish_session(account).await;
        self.state.connect.succeed(None);
        log::info!("✅ [CONNECT] Wallet conectado: {}", self.state.session.signer_address());
        self.state.notify_subscribers();
    }

    /// Chequeo explícito de red. Avisa UNA vez si la red no es la aceptada.
    pub async fn check_network(&self) -> bool {
        match self.provider.chain_id().await {
            Ok(chain_id) => {
                let valid = self
                    .state
                    .session
                    .set_network(chain_id, self.settings.accepted_chain_id);
                if !valid {
                    let mismatch = WalletError::NetworkMismatch {
                        expected: self.settings.accepted_chain_id,
                        actual: chain_id,
                    };
                    log::warn!("⚠️ [NETWORK] {}", mismatch);
                    self.notifier
                        .notify(&format!("change to {} network", self.settings.network_name));
                }
                valid
            }
            Err(e) => {
                log::error!("❌ [NETWORK] Error obteniendo chain id: {}", e);
                self.state.session.set_network_valid(false);
                false
            }
        }
    }

    /// Mint de tickets con el fee de la política configurada
    pub async fn mint(&self) {
        if self.state.mint.is_pending() {
            log::warn!("⚠️ [MINT] Mint en curso, ignorando click");
            return;
        }

        let (ticket_count, value_wei) = match self.mint_preconditions() {
            Ok(prepared) => prepared,
            Err(e) => {
                // El botón ya está deshabilitado: no-op
                log::warn!("⚠️ [MINT] {}", e);
                return;
            }
        };

        self.state.mint.begin();
        self.state.notify_subscribers();
        log::info!("🎟️ [MINT] Minteando {} tickets ({} wei)", ticket_count, value_wei);

        match self.provider.mint(ticket_count, value_wei).await {
            Ok(receipt) => {
                log::info!("✅ [MINT] Confirmado: {}", receipt.transaction_hash);
                self.refresh_latest_token().await;
                self.state.mint.succeed(Some(receipt.transaction_hash));
            }
            Err(e) => self.state.mint.fail(e.to_string()),
        }
        self.state.notify_subscribers();
    }

    /// Último token id minteado por el signer
    pub async fn refresh_latest_token(&self) {
        if !self.state.session.is_connected() {
            log::warn!("⚠️ [REFRESH] Sin wallet conectado");
            return;
        }

        let signer = self.state.session.signer_address();
        self.state.refresh.begin();
        match self.provider.latest_token_id(&signer).await {
            Ok(token_id) => {
                log::info!("🎫 [REFRESH] Último token: {}", token_id);
                self.state.refresh.succeed(Some(token_id));
            }
            Err(e) => self.state.refresh.fail_with_payload(e.to_string()),
        }
        self.state.notify_subscribers();
    }

    /// Withdraw de fondos (solo owner; el contrato es quien autoriza de verdad)
    pub async fn withdraw(&self) {
        if self.state.withdraw.is_pending() {
            log::warn!("⚠️ [WITHDRAW] Withdraw en curso, ignorando click");
            return;
        }
        if !self.state.session.is_connected() || !self.state.session.is_owner() {
            log::warn!("⚠️ [WITHDRAW] El signer no es el owner del contrato");
            return;
        }

        self.state.withdraw.begin();
        self.state.notify_subscribers();

        match self.provider.withdraw().await {
            Ok(receipt) => {
                log::info!("💸 [WITHDRAW] Confirmado: {}", receipt.transaction_hash);
                self.state.withdraw.succeed(Some(receipt.transaction_hash));
            }
            Err(e) => self.state.withdraw.fail(format!("Withdrawal failed: {}", e)),
        }
        self.state.notify_subscribers();
    }

    /// Liberar la suscripción a accountsChanged
    pub fn teardown(&self) {
        if self.subscription.borrow_mut().take().is_some() {
            log::info!("🔌 [WALLET] Sesión cerrada, listener liberado");
        }
    }

    /// Link al marketplace si el último mint fue exitoso y hay token id
    pub fn marketplace_link(&self) -> Option<String> {
        if !self.state.mint.is_success() || !self.state.refresh.is_success() {
            return None;
        }
        let token_id = self.state.refresh.payload()?;
        Some(marketplace_url(
            &self.settings.marketplace_base_url,
            &self.settings.marketplace_network,
            &self.settings.collection_address,
            &token_id,
        ))
    }

    /// Texto del fee por ticket, p.ej. "0.01 MATIC"
    pub fn fee_label(&self, currency: &str) -> String {
        self.settings.fee_policy.label(currency)
    }

    fn mint_preconditions(&self) -> Result<(u64, u128), WalletError> {
        let session = &self.state.session;
        if !session.is_connected() {
            return Err(WalletError::PreconditionFailed("wallet not connected".to_string()));
        }
        if !session.is_network_valid() {
            return Err(WalletError::PreconditionFailed("wrong network".to_string()));
        }
        let ticket_count = self.state.mint_request().parse_ticket_count()?;
        let value_wei = self.settings.fee_policy.value_for(ticket_count)?;
        Ok((ticket_count, value_wei))
    }

    /// Signer + red + owner tras autorizar una cuenta
    async fn establish_session(&self, fallback_account: String) {
        let signer = match self.provider.signer_address().await {
            Ok(address) => address,
            Err(e) => {
                log::warn!("⚠️ [WALLET] Error obteniendo signer ({}), usando cuenta autorizada", e);
                fallback_account
            }
        };
        self.state.session.establish(signer);
        self.check_network().await;
        self.load_owner().await;
    }

    async fn load_owner(&self) {
        match self.provider.owner().await {
            Ok(owner) => self.state.session.set_owner(Some(owner)),
            Err(e) => {
                log::warn!("⚠️ [WALLET] Error leyendo owner del contrato: {}", e);
                self.state.session.set_owner(None);
            }
        }
    }

    /// Suscripción única a accountsChanged
    fn ensure_subscription(&self) {
        if self.subscription.borrow().is_some() {
            return;
        }

        let state = self.state.clone();
        let handler = Rc::new(move |accounts: Vec<String>| {
            if accounts.is_empty() {
                log::info!("👋 [WALLET] El wallet ya no expone cuentas, desconectando");
            }
            if state.session.apply_accounts(&accounts) {
                state.notify_subscribers();
            }
        });

        match self.provider.subscribe_accounts_changed(handler) {
            Ok(subscription) => *self.subscription.borrow_mut() = Some(subscription),
            Err(e) => log::error!("❌ [WALLET] Error suscribiendo accountsChanged: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use crate::models::{OperationStatus, TxReceipt, WEI_PER_UNIT};
    use crate::services::AccountsHandler;

    const HOLDER: &str = "0x00000000000000000000000000000000000a11ce";
    const OWNER: &str = "0x0000000000000000000000000000000000000b0b";

    fn receipt(hash: &str) -> TxReceipt {
        TxReceipt {
            transaction_hash: hash.to_string(),
            block_number: Some(1),
            succeeded: true,
        }
    }

    /// Gateway en memoria con respuestas programables
    struct MockProvider {
        present: bool,
        authorized: RefCell<Vec<String>>,
        request_result: RefCell<Result<Vec<String>, WalletError>>,
        chain_id: Cell<u64>,
        owner: String,
        mint_results: RefCell<VecDeque<Result<TxReceipt, WalletError>>>,
        withdraw_result: RefCell<Result<TxReceipt, WalletError>>,
        token_result: RefCell<Result<String, WalletError>>,
        mint_calls: RefCell<Vec<(u64, u128)>>,
        request_calls: Cell<usize>,
        withdraw_calls: Cell<usize>,
        subscribe_calls: Cell<usize>,
        active_subscriptions: Rc<Cell<usize>>,
        handler: RefCell<Option<AccountsHandler>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                present: true,
                authorized: RefCell::new(Vec::new()),
                request_result: RefCell::new(Ok(vec![HOLDER.to_string()])),
                chain_id: Cell::new(80001),
                owner: OWNER.to_string(),
                mint_results: RefCell::new(VecDeque::new()),
                withdraw_result: RefCell::new(Ok(receipt("0xw1"))),
                token_result: RefCell::new(Ok("7".to_string())),
                mint_calls: RefCell::new(Vec::new()),
                request_calls: Cell::new(0),
                withdraw_calls: Cell::new(0),
                subscribe_calls: Cell::new(0),
                active_subscriptions: Rc::new(Cell::new(0)),
                handler: RefCell::new(None),
            }
        }

        fn emit_accounts(&self, accounts: Vec<String>) {
            let handler = self.handler.borrow().clone();
            if let Some(handler) = handler {
                handler(accounts);
            }
        }
    }

    #[async_trait(?Send)]
    impl ProviderGateway for MockProvider {
        fn is_present(&self) -> bool {
            self.present
        }

        async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
            self.request_calls.set(self.request_calls.get() + 1);
            let result = self.request_result.borrow().clone();
            if let Ok(accounts) = &result {
                *self.authorized.borrow_mut() = accounts.clone();
            }
            result
        }

        async fn list_authorized_accounts(&self) -> Result<Vec<String>, WalletError> {
            Ok(self.authorized.borrow().clone())
        }

        async fn chain_id(&self) -> Result<u64, WalletError> {
            Ok(self.chain_id.get())
        }

        async fn signer_address(&self) -> Result<String, WalletError> {
            self.authorized
                .borrow()
                .first()
                .cloned()
                .ok_or_else(|| WalletError::AuthorizationRejected("locked".to_string()))
        }

        fn subscribe_accounts_changed(&self, handler: AccountsHandler) -> Result<AccountsSubscription, WalletError> {
            self.subscribe_calls.set(self.subscribe_calls.get() + 1);
            self.active_subscriptions.set(self.active_subscriptions.get() + 1);
            *self.handler.borrow_mut() = Some(handler);
            let active = self.active_subscriptions.clone();
            Ok(AccountsSubscription::new(move || active.set(active.get() - 1)))
        }

        async fn mint(&self, ticket_count: u64, value_wei: u128) -> Result<TxReceipt, WalletError> {
            self.mint_calls.borrow_mut().push((ticket_count, value_wei));
            self.mint_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(receipt("0xm")))
        }

        async fn withdraw(&self) -> Result<TxReceipt, WalletError> {
            self.withdraw_calls.set(self.withdraw_calls.get() + 1);
            self.withdraw_result.borrow().clone()
        }

        async fn latest_token_id(&self, _owner: &str) -> Result<String, WalletError> {
            self.token_result.borrow().clone()
        }

        async fn owner(&self) -> Result<String, WalletError> {
            Ok(self.owner.clone())
        }
    }

    #[derive(Default)]
    struct CountingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl UserNotifier for CountingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn setup(provider: MockProvider) -> (WalletViewModel, Rc<MockProvider>, Rc<CountingNotifier>) {
        let provider = Rc::new(provider);
        let notifier = Rc::new(CountingNotifier::default());
        let vm = WalletViewModel::new(
            provider.clone(),
            notifier.clone(),
            AppState::new(),
            WalletSettings::default(),
        );
        (vm, provider, notifier)
    }

    /// Estados que ve cada render, en orden
    fn record_statuses(
        vm: &WalletViewModel,
        pick: fn(&AppState) -> OperationStatus,
    ) -> Rc<RefCell<Vec<OperationStatus>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let state = vm.state().clone();
        vm.state().subscribe_to_changes(move || sink.borrow_mut().push(pick(&state)));
        seen
    }

    fn connected(provider: MockProvider) -> (WalletViewModel, Rc<MockProvider>, Rc<CountingNotifier>) {
        let (vm, provider, notifier) = setup(provider);
        block_on(vm.connect());
        assert!(vm.state().session.is_connected());
        (vm, provider, notifier)
    }

    #[test]
    fn test_connect_populates_session() {
        let (vm, provider, notifier) = connected(MockProvider::new());
        let session = &vm.state().session;

        assert_eq!(session.signer_address(), HOLDER);
        assert!(session.is_network_valid());
        assert_eq!(session.owner_address().as_deref(), Some(OWNER));
        assert_eq!(vm.state().connect.status(), OperationStatus::Success);
        assert_eq!(provider.subscribe_calls.get(), 1);
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn test_connect_is_idempotent_once_connected() {
        let (vm, provider, _) = connected(MockProvider::new());
        vm.state().set_ticket_input("5".to_string());

        block_on(vm.connect());
        block_on(vm.connect());

        assert_eq!(provider.request_calls.get(), 1);
        assert_eq!(provider.subscribe_calls.get(), 1);
        assert_eq!(provider.active_subscriptions.get(), 1);
        assert_eq!(vm.state().mint_request().ticket_count, "5");
        assert_eq!(vm.state().session.signer_address(), HOLDER);
    }

    #[test]
    fn test_connect_ignored_while_pending() {
        let (vm, provider, _) = setup(MockProvider::new());
        vm.state().connect.begin();

        block_on(vm.connect());

        assert_eq!(provider.request_calls.get(), 0);
        assert!(!vm.state().session.is_connected());
    }

    #[test]
    fn test_connect_rejected_leaves_session_unconnected() {
        let provider = MockProvider::new();
        *provider.request_result.borrow_mut() =
            Err(WalletError::AuthorizationRejected("User rejected the request.".to_string()));
        let (vm, _, _) = setup(provider);

        block_on(vm.connect());

        let result = vm.state().connect.get();
        assert_eq!(result.status, OperationStatus::Failed);
        assert!(result.error_detail.unwrap().contains("User rejected"));
        assert!(!vm.state().session.is_connected());
        assert!(vm.state().session.signer_address().is_empty());
    }

    #[test]
    fn test_connect_without_provider_fails() {
        let mut provider = MockProvider::new();
        provider.present = false;
        let (vm, provider, _) = setup(provider);

        block_on(vm.connect());

        assert_eq!(vm.state().connect.status(), OperationStatus::Failed);
        assert_eq!(provider.request_calls.get(), 0);
    }

    #[test]
    fn test_wrong_network_notifies_once_per_check() {
        let provider = MockProvider::new();
        provider.chain_id.set(1);
        let (vm, _, notifier) = connected(provider);

        assert!(!vm.state().session.is_network_valid());
        assert_eq!(notifier.messages.borrow().len(), 1);
        assert_eq!(notifier.messages.borrow()[0], "change to Mumbai network");

        for chain_id in [137, 5, 80002] {
            let (vm, provider, notifier) = setup(MockProvider::new());
            provider.chain_id.set(chain_id);
            assert!(!block_on(vm.check_network()));
            assert!(!vm.state().session.is_network_valid());
            assert_eq!(notifier.messages.borrow().len(), 1);
        }
    }

    #[test]
    fn test_initialize_restores_authorized_account_silently() {
        let provider = MockProvider::new();
        *provider.authorized.borrow_mut() = vec![HOLDER.to_string()];
        let (vm, provider, _) = setup(provider);

        block_on(vm.initialize());

        assert!(vm.state().session.is_connected());
        assert_eq!(vm.state().session.signer_address(), HOLDER);
        assert_eq!(provider.request_calls.get(), 0);
        assert_eq!(provider.subscribe_calls.get(), 1);
    }

    #[test]
    fn test_initialize_then_connect_subscribes_once() {
        let (vm, provider, _) = setup(MockProvider::new());

        block_on(vm.initialize());
        assert!(!vm.state().session.is_connected());

        block_on(vm.connect());

        assert!(vm.state().session.is_connected());
        assert_eq!(provider.subscribe_calls.get(), 1);
    }

    #[test]
    fn test_zero_accounts_event_disconnects() {
        let (vm, provider, _) = connected(MockProvider::new());
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        vm.state().subscribe_to_changes(move || counter.set(counter.get() + 1));

        provider.emit_accounts(Vec::new());
        assert!(!vm.state().session.is_connected());
        assert!(vm.state().session.signer_address().is_empty());
        assert_eq!(renders.get(), 1);

        provider.emit_accounts(Vec::new());
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn test_mint_charges_fee_policy_and_refreshes_token() {
        let (vm, provider, _) = connected(MockProvider::new());
        vm.state().set_ticket_input("100".to_string());

        block_on(vm.mint());

        assert_eq!(provider.mint_calls.borrow().as_slice(), &[(100, WEI_PER_UNIT)]);
        assert_eq!(vm.state().mint.status(), OperationStatus::Success);
        assert_eq!(vm.state().refresh.payload().as_deref(), Some("7"));
        assert_eq!(
            vm.marketplace_link().as_deref(),
            Some("https://testnets.opensea.io/assets/mumbai/0x28b8BF4dF88baa2b02ba87Bd13Cc7911e5bbFb55/7")
        );
    }

    #[test]
    fn test_mint_failure_then_successful_retry() {
        let provider = MockProvider::new();
        provider
            .mint_results
            .borrow_mut()
            .push_back(Err(WalletError::ExternalCallFailed("insufficient funds".to_string())));
        let (vm, _, _) = connected(provider);
        vm.state().set_ticket_input("2".to_string());

        block_on(vm.mint());
        let failed = vm.state().mint.get();
        assert_eq!(failed.status, OperationStatus::Failed);
        assert_eq!(failed.error_detail.as_deref(), Some("insufficient funds"));
        assert_eq!(vm.marketplace_link(), None);

        block_on(vm.mint());
        let retried = vm.state().mint.get();
        assert_eq!(retried.status, OperationStatus::Success);
        assert_eq!(retried.error_detail, None);
    }

    #[test]
    fn test_failed_retry_overwrites_success() {
        let provider = MockProvider::new();
        provider.mint_results.borrow_mut().push_back(Ok(receipt("0x1")));
        provider
            .mint_results
            .borrow_mut()
            .push_back(Err(WalletError::ExternalCallFailed("execution reverted".to_string())));
        let (vm, _, _) = connected(provider);
        vm.state().set_ticket_input("1".to_string());

        block_on(vm.mint());
        assert!(vm.state().mint.is_success());

        block_on(vm.mint());
        assert_eq!(vm.state().mint.status(), OperationStatus::Failed);
    }

    #[test]
    fn test_mint_with_empty_input_is_noop() {
        let (vm, provider, _) = connected(MockProvider::new());

        assert!(vm.state().mint_disabled());
        block_on(vm.mint());

        assert!(provider.mint_calls.borrow().is_empty());
        assert_eq!(vm.state().mint.status(), OperationStatus::Idle);
    }

    #[test]
    fn test_mint_renders_pending_before_success() {
        let (vm, _, _) = connected(MockProvider::new());
        vm.state().set_ticket_input("3".to_string());
        let seen = record_statuses(&vm, |state| state.mint.status());

        block_on(vm.mint());

        let seen = seen.borrow();
        assert_eq!(seen.first(), Some(&OperationStatus::Pending));
        assert_eq!(seen.last(), Some(&OperationStatus::Success));
        assert!(seen[..seen.len() - 1].iter().all(|s| *s == OperationStatus::Pending));
    }

    #[test]
    fn test_mint_renders_pending_before_failure() {
        let provider = MockProvider::new();
        provider
            .mint_results
            .borrow_mut()
            .push_back(Err(WalletError::ExternalCallFailed("insufficient funds".to_string())));
        let (vm, _, _) = connected(provider);
        vm.state().set_ticket_input("3".to_string());
        let seen = record_statuses(&vm, |state| state.mint.status());

        block_on(vm.mint());

        assert_eq!(
            seen.borrow().as_slice(),
            &[OperationStatus::Pending, OperationStatus::Failed]
        );
    }

    #[test]
    fn test_mint_with_non_numeric_input_is_noop() {
        let (vm, provider, _) = connected(MockProvider::new());

        for input in ["1.5", "-3", "1e3"] {
            vm.state().set_ticket_input(input.to_string());
            assert!(vm.state().mint_disabled());
            block_on(vm.mint());
        }

        assert!(provider.mint_calls.borrow().is_empty());
        assert_eq!(vm.state().mint.status(), OperationStatus::Idle);
    }

    #[test]
    fn test_mint_requires_valid_network() {
        let provider = MockProvider::new();
        provider.chain_id.set(1);
        let (vm, provider, _) = connected(provider);
        vm.state().set_ticket_input("1".to_string());

        block_on(vm.mint());

        assert!(provider.mint_calls.borrow().is_empty());
    }

    #[test]
    fn test_refresh_failure_lands_in_payload() {
        let provider = MockProvider::new();
        *provider.token_result.borrow_mut() = Err(WalletError::ExternalCallFailed("call reverted".to_string()));
        let (vm, _, _) = connected(provider);

        block_on(vm.refresh_latest_token());

        let result = vm.state().refresh.get();
        assert_eq!(result.status, OperationStatus::Failed);
        assert_eq!(result.payload.as_deref(), Some("call reverted"));
        assert_eq!(result.error_detail.as_deref(), Some("call reverted"));
    }

    #[test]
    fn test_withdraw_gated_on_owner() {
        let (vm, provider, _) = connected(MockProvider::new());

        assert!(!vm.state().withdraw_visible());
        block_on(vm.withdraw());

        assert_eq!(provider.withdraw_calls.get(), 0);
        assert_eq!(vm.state().withdraw.status(), OperationStatus::Idle);
    }

    #[test]
    fn test_owner_withdraw_success_and_failure() {
        let provider = MockProvider::new();
        *provider.request_result.borrow_mut() = Ok(vec![OWNER.to_string()]);
        let (vm, provider, _) = connected(provider);
        assert!(vm.state().withdraw_visible());

        block_on(vm.withdraw());
        assert_eq!(vm.state().withdraw.status(), OperationStatus::Success);

        *provider.withdraw_result.borrow_mut() = Err(WalletError::ExternalCallFailed("reverted".to_string()));
        block_on(vm.withdraw());
        let result = vm.state().withdraw.get();
        assert_eq!(result.status, OperationStatus::Failed);
        assert_eq!(result.error_detail.as_deref(), Some("Withdrawal failed: reverted"));
        assert_eq!(provider.withdraw_calls.get(), 2);
    }

    #[test]
    fn test_withdraw_renders_pending_and_disables_button() {
        let provider = MockProvider::new();
        *provider.request_result.borrow_mut() = Ok(vec![OWNER.to_string()]);
        let (vm, _, _) = connected(provider);
        let seen = record_statuses(&vm, |state| state.withdraw.status());
        let disabled = Rc::new(RefCell::new(Vec::new()));
        let sink = disabled.clone();
        let state = vm.state().clone();
        vm.state().subscribe_to_changes(move || sink.borrow_mut().push(state.withdraw_disabled()));

        block_on(vm.withdraw());

        assert_eq!(
            seen.borrow().as_slice(),
            &[OperationStatus::Pending, OperationStatus::Success]
        );
        assert_eq!(disabled.borrow().as_slice(), &[true, false]);
    }

    #[test]
    fn test_teardown_releases_subscription() {
        let (vm, provider, _) = connected(MockProvider::new());
        assert_eq!(provider.active_subscriptions.get(), 1);

        vm.teardown();
        vm.teardown();
        assert_eq!(provider.active_subscriptions.get(), 0);
    }
}
