// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::{MintRequest, OperationKind};
use crate::state::{OperationState, SessionState};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,

    // Un resultado por operación
    pub connect: OperationState,
    pub mint: OperationState,
    pub refresh: OperationState,
    pub withdraw: OperationState,

    // Input "Number of Tickets"
    pub ticket_input: Rc<RefCell<String>>,

    // Reactivity: callbacks para re-renderizar
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            connect: OperationState::new(OperationKind::Connect),
            mint: OperationState::new(OperationKind::Mint),
            refresh: OperationState::new(OperationKind::Refresh),
            withdraw: OperationState::new(OperationKind::Withdraw),
            ticket_input: Rc::new(RefCell::new(String::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_ticket_input(&self, value: String) {
        *self.ticket_input.borrow_mut() = value;
    }

    pub fn mint_request(&self) -> MintRequest {
        MintRequest::new(self.ticket_input.borrow().clone())
    }

    /// Mostrar la tarjeta de mint: conectado y en la red aceptada
    pub fn show_mint_card(&self) -> bool {
        self.session.is_connected() && self.session.is_network_valid()
    }

    /// Botón Mint deshabilitado mientras está Pending o el input no es un entero
    pub fn mint_disabled(&self) -> bool {
        self.mint.is_pending() || self.mint_request().parse_ticket_count().is_err()
    }

    /// Withdraw solo se ofrece al owner
    pub fn withdraw_visible(&self) -> bool {
        self.show_mint_card() && self.session.is_owner()
    }

    pub fn withdraw_disabled(&self) -> bool {
        self.withdraw.is_pending() || !self.withdraw_visible()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        // Copia para no mantener el borrow mientras corren los callbacks
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers.iter() {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Marca de "render programado" compartida entre notificaciones
#[derive(Clone, Default)]
pub struct RenderBatch {
    scheduled: Rc<Cell<bool>>,
}

impl RenderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// true si no había render pendiente y hay que programar uno
    pub fn request(&self) -> bool {
        !self.scheduled.replace(true)
    }

    /// El render programado ya corrió
    pub fn complete(&self) {
        self.scheduled.set(false);
    }
}
