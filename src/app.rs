// ============================================================================
// APP - Aplicación principal: estado + viewmodel + render en #app
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, clear, get_element_by_id};
use crate::services::{BrowserNotifier, EthereumProvider};
use crate::state::{AppState, RenderBatch};
use crate::viewmodels::{WalletSettings, WalletViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    view_model: WalletViewModel,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let view_model = WalletViewModel::new(
            Rc::new(EthereumProvider::from_config(&CONFIG)),
            Rc::new(BrowserNotifier),
            state.clone(),
            WalletSettings::from_config(&CONFIG),
        );

        // Un único Timeout(0) pendiente: los cambios síncronos seguidos se
        // pintan en un solo render
        let batch = RenderBatch::new();
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            if !batch.request() {
                return;
            }
            let batch = batch.clone();
            Timeout::new(0, move || {
                batch.complete();
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { view_model, root })
    }

    /// Reconectar en silencio si el wallet ya autorizó la app
    pub fn start(&self) {
        let vm = self.view_model.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.initialize().await;
        });
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        clear(&self.root);
        let view = render_app(&self.view_model)?;
        append_child(&self.root, &view)
    }

    pub fn view_model(&self) -> &WalletViewModel {
        &self.view_model
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.view_model.teardown();
    }
}
