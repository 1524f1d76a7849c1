// ============================================================================
// SESSION STATE - Quién está conectado, en qué red, y quién es el owner
// ============================================================================
// Invariante: signer_address vacío <=> connected == false
// Solo el WalletViewModel muta este estado; las views solo leen.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use alloy_primitives::Address;

/// Estado de sesión del wallet
#[derive(Clone)]
pub struct SessionState {
    pub connected: Rc<RefCell<bool>>,
    pub signer_address: Rc<RefCell<String>>,
    pub network_valid: Rc<RefCell<bool>>,
    pub owner_address: Rc<RefCell<Option<String>>>,
}

impl SessionState {
    /// Crear nuevo estado de sesión (desconectado)
    pub fn new() -> Self {
        Self {
            connected: Rc::new(RefCell::new(false)),
            signer_address: Rc::new(RefCell::new(String::new())),
            network_valid: Rc::new(RefCell::new(false)),
            owner_address: Rc::new(RefCell::new(None)),
        }
    }

    /// Marcar conectado con su signer (ambos a la vez para mantener la invariante)
    pub fn establish(&self, signer: String) {
        if signer.is_empty() {
            self.reset();
            return;
        }
        *self.signer_address.borrow_mut() = signer;
        *self.connected.borrow_mut() = true;
    }

    /// Volver a desconectado. Devuelve false si ya lo estaba.
    pub fn reset(&self) -> bool {
        let was_connected = self.is_connected();
        *self.connected.borrow_mut() = false;
        self.signer_address.borrow_mut().clear();
        *self.network_valid.borrow_mut() = false;
        *self.owner_address.borrow_mut() = None;
        was_connected
    }

    /// Aplicar un evento `accountsChanged`. Devuelve true si algo cambió.
    pub fn apply_accounts(&self, accounts: &[String]) -> bool {
        match accounts.first() {
            None => self.reset(),
            Some(account) => {
                if !self.is_connected() || addresses_match(account, &self.signer_address.borrow()) {
                    return false;
                }
                *self.signer_address.borrow_mut() = account.clone();
                true
            }
        }
    }

    /// Validar chain id contra el aceptado
    pub fn set_network(&self, chain_id: u64, accepted_chain_id: u64) -> bool {
        let valid = chain_id == accepted_chain_id;
        *self.network_valid.borrow_mut() = valid;
        valid
    }

    pub fn set_network_valid(&self, valid: bool) {
        *self.network_valid.borrow_mut() = valid;
    }

    pub fn set_owner(&self, owner: Option<String>) {
        *self.owner_address.borrow_mut() = owner;
    }

    pub fn is_connected(&self) -> bool {
        *self.connected.borrow()
    }

    pub fn signer_address(&self) -> String {
        self.signer_address.borrow().clone()
    }

    pub fn is_network_valid(&self) -> bool {
        *self.network_valid.borrow()
    }

    pub fn owner_address(&self) -> Option<String> {
        self.owner_address.borrow().clone()
    }

    /// El signer actual es el owner del contrato (solo gate de UX)
    pub fn is_owner(&self) -> bool {
        match self.owner_address.borrow().as_deref() {
            Some(owner) => self.is_connected() && addresses_match(&self.signer_address.borrow(), owner),
            None => false,
        }
    }
}

/// Dos direcciones son la misma si ambas parsean al mismo `Address`
fn addresses_match(a: &str, b: &str) -> bool {
    match (a.parse::<Address>(), b.parse::<Address>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x00000000000000000000000000000000000a11ce";
    const BOB: &str = "0x0000000000000000000000000000000000000b0b";

    #[test]
    fn test_signer_empty_iff_disconnected() {
        let session = SessionState::new();
        assert!(!session.is_connected());
        assert!(session.signer_address().is_empty());

        session.establish(ALICE.to_string());
        assert!(session.is_connected());
        assert_eq!(session.signer_address(), ALICE);

        session.establish(String::new());
        assert!(!session.is_connected());
        assert!(session.signer_address().is_empty());
    }

    #[test]
    fn test_zero_accounts_resets_and_is_idempotent() {
        let session = SessionState::new();
        session.establish(ALICE.to_string());
        session.set_network(80001, 80001);
        session.set_owner(Some(ALICE.to_string()));

        assert!(session.apply_accounts(&[]));
        assert!(!session.is_connected());
        assert!(session.signer_address().is_empty());
        assert!(!session.is_network_valid());
        assert!(!session.is_owner());

        assert!(!session.apply_accounts(&[]));
    }

    #[test]
    fn test_account_switch_updates_signer_only_when_connected() {
        let session = SessionState::new();
        assert!(!session.apply_accounts(&[BOB.to_string()]));
        assert!(!session.is_connected());

        session.establish(ALICE.to_string());
        assert!(session.apply_accounts(&[BOB.to_string()]));
        assert_eq!(session.signer_address(), BOB);
        assert!(!session.apply_accounts(&[BOB.to_uppercase().replace("0X", "0x")]));
    }

    #[test]
    fn test_network_validation() {
        let session = SessionState::new();
        assert!(session.set_network(80001, 80001));
        assert!(!session.set_network(1, 80001));
        assert!(!session.is_network_valid());
    }

    #[test]
    fn test_is_owner_requires_matching_signer() {
        let session = SessionState::new();
        session.set_owner(Some(ALICE.to_string()));
        assert!(!session.is_owner());

        session.establish(BOB.to_string());
        assert!(!session.is_owner());

        session.establish(ALICE.to_uppercase().replace("0X", "0x"));
        assert!(session.is_owner());
    }

    #[test]
    fn test_unparseable_addresses_never_match() {
        let session = SessionState::new();
        session.establish("0xabcd".to_string());
        session.set_owner(Some("0xABCD".to_string()));
        assert!(!session.is_owner());

        assert!(addresses_match(ALICE, &ALICE.to_uppercase().replace("0X", "0x")));
        assert!(!addresses_match(ALICE, BOB));
        assert!(!addresses_match("", ""));
    }
}
