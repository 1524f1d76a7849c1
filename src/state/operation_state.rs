// ============================================================================
// OPERATION STATE - Un OperationResult compartido por operación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{OperationKind, OperationResult, OperationStatus};

#[derive(Clone)]
pub struct OperationState {
    pub kind: OperationKind,
    pub result: Rc<RefCell<OperationResult>>,
}

impl OperationState {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            result: Rc::new(RefCell::new(OperationResult::idle())),
        }
    }

    pub fn begin(&self) {
        self.result.borrow_mut().begin();
        log::debug!("⏳ [{}] Pending", self.kind.tag());
    }

    pub fn succeed(&self, payload: Option<String>) {
        self.result.borrow_mut().succeed(payload);
        log::debug!("✅ [{}] Success", self.kind.tag());
    }

    pub fn fail(&self, detail: String) {
        log::error!("❌ [{}] {}", self.kind.tag(), detail);
        self.result.borrow_mut().fail(detail);
    }

    /// Fallo que además se guarda en el slot de payload (refresh de token id)
    pub fn fail_with_payload(&self, detail: String) {
        let mut result = self.result.borrow_mut();
        result.fail(detail.clone());
        result.payload = Some(detail);
    }

    pub fn get(&self) -> OperationResult {
        self.result.borrow().clone()
    }

    pub fn status(&self) -> OperationStatus {
        self.result.borrow().status
    }

    pub fn is_pending(&self) -> bool {
        self.result.borrow().is_pending()
    }

    pub fn is_success(&self) -> bool {
        self.result.borrow().is_success()
    }

    pub fn payload(&self) -> Option<String> {
        self.result.borrow().payload.clone()
    }

    pub fn error_detail(&self) -> Option<String> {
        self.result.borrow().error_detail.clone()
    }
}
