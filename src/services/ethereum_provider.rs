// ============================================================================
// ETHEREUM PROVIDER - Implementación EIP-1193 sobre `window.ethereum`
// ============================================================================
// SOLO comunicación con el wallet: requests JSON-RPC + listeners
// ============================================================================

use alloy_primitives::U256;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Promise, Reflect, JSON};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::AppConfig;
use crate::models::{parse_quantity, RpcReceipt, TxReceipt, WalletError};
use crate::services::contract_abi::{decode_address, decode_uint, encode_call, parse_address, to_quantity, AbiArg};
use crate::services::provider_gateway::{AccountsHandler, AccountsSubscription, ProviderGateway, UserNotifier};
use crate::utils::constants::{
    ACCOUNTS_CHANGED_EVENT, LATEST_TOKEN_SIGNATURE, MINT_SIGNATURE, OWNER_SIGNATURE, WITHDRAW_SIGNATURE,
};

/// Provider del navegador (MetaMask y compatibles)
#[derive(Clone)]
pub struct EthereumProvider {
    contract_address: String,
    poll_interval_ms: u32,
}

impl EthereumProvider {
    pub fn new(contract_address: impl Into<String>, poll_interval_ms: u32) -> Self {
        Self {
            contract_address: contract_address.into(),
            poll_interval_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.contract.address.clone(), config.contract.receipt_poll_interval_ms)
    }

    /// `window.ethereum` si existe
    fn ethereum() -> Option<JsValue> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            None
        } else {
            Some(ethereum)
        }
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, WalletError> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| WalletError::ExternalCallFailed(format!("provider has no '{}' method", name)))
    }

    /// `ethereum.request({ method, params })`
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let ethereum = Self::ethereum().ok_or(WalletError::ProviderUnavailable)?;
        let request_fn = Self::method(&ethereum, "request")?;

        let payload = json!({ "method": method, "params": params }).to_string();
        let args = JSON::parse(&payload)
            .map_err(|e| WalletError::ExternalCallFailed(format!("Error serializando request: {:?}", e)))?;

        let promise: Promise = request_fn
            .call1(&ethereum, &args)
            .map_err(provider_error)?
            .dyn_into()
            .map_err(|_| WalletError::ExternalCallFailed(format!("{} did not return a promise", method)))?;

        let result = JsFuture::from(promise).await.map_err(provider_error)?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }

        let text = JSON::stringify(&result)
            .ok()
            .and_then(|s| s.as_string())
            .ok_or_else(|| WalletError::ExternalCallFailed(format!("{} returned a non-JSON value", method)))?;
        serde_json::from_str(&text)
            .map_err(|e| WalletError::ExternalCallFailed(format!("Error parseando respuesta de {}: {}", method, e)))
    }

    async fn accounts(&self, method: &str) -> Result<Vec<String>, WalletError> {
        let value = self.request(method, json!([])).await?;
        serde_json::from_value(value)
            .map_err(|e| WalletError::ExternalCallFailed(format!("Error parseando cuentas: {}", e)))
    }

    /// `eth_call` contra el contrato
    async fn call(&self, data: String) -> Result<String, WalletError> {
        let value = self
            .request("eth_call", json!([{ "to": self.contract_address, "data": data }, "latest"]))
            .await?;
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| WalletError::ExternalCallFailed("eth_call returned no data".to_string()))
    }

    /// Broadcast + espera de inclusión en bloque
    async fn transact(&self, data: String, value_wei: u128) -> Result<TxReceipt, WalletError> {
        let from = self.signer_address().await?;
        let mut tx = json!({ "from": from, "to": self.contract_address, "data": data });
        if value_wei > 0 {
            tx["value"] = Value::String(to_quantity(U256::from(value_wei)));
        }

        let hash = self.request("eth_sendTransaction", json!([tx])).await?;
        let hash = hash
            .as_str()
            .ok_or_else(|| WalletError::ExternalCallFailed("eth_sendTransaction returned no hash".to_string()))?
            .to_string();
        log::info!("📤 [PROVIDER] Transacción enviada: {}", hash);

        self.wait_for_receipt(&hash).await
    }

    /// Polling de `eth_getTransactionReceipt` hasta que el nodo devuelva recibo
    async fn wait_for_receipt(&self, hash: &str) -> Result<TxReceipt, WalletError> {
        loop {
            let value = self.request("eth_getTransactionReceipt", json!([hash])).await?;
            if !value.is_null() {
                let raw: RpcReceipt = serde_json::from_value(value)
                    .map_err(|e| WalletError::ExternalCallFailed(format!("Error parseando recibo: {}", e)))?;
                let receipt = TxReceipt::try_from(raw)?;
                if !receipt.succeeded {
                    return Err(WalletError::ExternalCallFailed(format!("transaction {} reverted", hash)));
                }
                log::info!("⛓️ [PROVIDER] Confirmada en bloque {:?}", receipt.block_number);
                return Ok(receipt);
            }
            TimeoutFuture::new(self.poll_interval_ms).await;
        }
    }
}

#[async_trait(?Send)]
impl ProviderGateway for EthereumProvider {
    fn is_present(&self) -> bool {
        Self::ethereum().is_some()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.accounts("eth_requestAccounts").await
    }

    async fn list_authorized_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.accounts("eth_accounts").await
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let value = self.request("eth_chainId", json!([])).await?;
        let hex = value
            .as_str()
            .ok_or_else(|| WalletError::ExternalCallFailed("eth_chainId returned no value".to_string()))?;
        parse_quantity(hex)
    }

    async fn signer_address(&self) -> Result<String, WalletError> {
        self.list_authorized_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WalletError::AuthorizationRejected("no authorized account".to_string()))
    }

    fn subscribe_accounts_changed(&self, handler: AccountsHandler) -> Result<AccountsSubscription, WalletError> {
        let ethereum = Self::ethereum().ok_or(WalletError::ProviderUnavailable)?;
        let on = Self::method(&ethereum, "on")?;

        let closure = Closure::wrap(Box::new(move |accounts: JsValue| {
            let accounts: Vec<String> = Array::from(&accounts)
                .iter()
                .filter_map(|a| a.as_string())
                .collect();
            handler(accounts);
        }) as Box<dyn FnMut(JsValue)>);

        let event = JsValue::from_str(ACCOUNTS_CHANGED_EVENT);
        on.call2(&ethereum, &event, closure.as_ref())
            .map_err(provider_error)?;
        log::info!("👂 [PROVIDER] Listener accountsChanged registrado");

        // El closure vive dentro de la suscripción (sin forget)
        Ok(AccountsSubscription::new(move || {
            match Self::method(&ethereum, "removeListener") {
                Ok(remove) => {
                    if let Err(e) = remove.call2(&ethereum, &event, closure.as_ref()) {
                        log::warn!("⚠️ [PROVIDER] Error quitando listener: {:?}", e);
                    }
                }
                Err(e) => log::warn!("⚠️ [PROVIDER] {}", e),
            }
            drop(closure);
            log::info!("🔌 [PROVIDER] Listener accountsChanged liberado");
        }))
    }

    async fn mint(&self, ticket_count: u64, value_wei: u128) -> Result<TxReceipt, WalletError> {
        let data = encode_call(MINT_SIGNATURE, &[AbiArg::Uint(U256::from(ticket_count))]);
        self.transact(data, value_wei).await
    }

    async fn withdraw(&self) -> Result<TxReceipt, WalletError> {
        let data = encode_call(WITHDRAW_SIGNATURE, &[]);
        self.transact(data, 0).await
    }

    async fn latest_token_id(&self, owner: &str) -> Result<String, WalletError> {
        let data = encode_call(LATEST_TOKEN_SIGNATURE, &[AbiArg::Address(parse_address(owner)?)]);
        let result = self.call(data).await?;
        decode_uint(&result)
    }

    async fn owner(&self) -> Result<String, WalletError> {
        let data = encode_call(OWNER_SIGNATURE, &[]);
        let result = self.call(data).await?;
        Ok(decode_address(&result)?.to_checksum(None))
    }
}

/// Convertir un error JS del provider ({ code, message }) a WalletError
fn provider_error(error: JsValue) -> WalletError {
    let code = Reflect::get(&error, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", error));
    WalletError::from_provider(code, message)
}

/// Aviso con `window.alert`
#[derive(Clone, Default)]
pub struct BrowserNotifier;

impl UserNotifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("⚠️ No se pudo mostrar alert: {:?}", e);
            }
        }
    }
}
