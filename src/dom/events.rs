// ============================================================================
// EVENT HANDLING - Listeners de elementos
// ============================================================================
// Los listeners de elementos usan closure.forget(): el closure Rust (y el
// clon del viewmodel que captura) queda vivo aunque clear(root) destruya el
// elemento. Cada render pierde así unos pocos closures; se acepta porque solo
// se re-renderiza tras acciones del usuario o eventos del wallet.
// Los listeners globales (accountsChanged) NO van aquí: los gestiona
// AccountsSubscription.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear input handler simple
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
