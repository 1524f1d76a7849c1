// ============================================================================
// L3 LOTTERY NFT TICKET - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: WalletViewModel, único que muta el estado
// - Services: SOLO comunicación con el wallet/contrato
// - State: Rc<RefCell> + subscribers para re-render
// - Models: tipos de dominio (resultados, mint, recibos, errores)
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🎟️ L3 Lottery NFT - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;
    app.start();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: si ya hay un render en curso, el siguiente Timeout lo cubre
        match app_cell.try_borrow_mut() {
            Ok(mut app) => {
                if let Some(app) = app.as_mut() {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
            }
            Err(_) => log::warn!("⚠️ [RERENDER] App ocupada, render omitido"),
        }
    });
}
