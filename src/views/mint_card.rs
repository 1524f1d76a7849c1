// ============================================================================
// MINT CARD - Input de tickets + botones Mint / Withdraw
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, input_value, set_disabled, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::WalletViewModel;
use crate::views::landing::ticket_image;

const MINT_BUTTON_ID: &str = "mint-button";

pub fn render_mint_card(vm: &WalletViewModel) -> Result<Element, JsValue> {
    let state = vm.state();

    let title = ElementBuilder::new("h2")?
        .class("text-3xl font-bold text-gray-800")
        .text("L3 NFT Ticket")
        .build();

    let fee = ElementBuilder::new("p")?
        .class("text-lg mb-4")
        .text(&format!("Mint Fee : {} ", vm.fee_label(&CONFIG.network.native_currency_symbol)))
        .build();

    let input = {
        let state = state.clone();
        let current = state.ticket_input.borrow().clone();
        ElementBuilder::new("input")?
            .class("border border-gray-300 p-2 outline-none rounded")
            .attr("type", "number")?
            .attr("min", "1")?
            .attr("placeholder", "Number of Tickets")?
            .attr("value", &current)?
            .on_input(move |event| {
                if let Some(value) = input_value(&event) {
                    state.set_ticket_input(value);
                    // Solo el botón: un re-render completo perdería el foco del input
                    if let Err(e) = sync_mint_button(&state) {
                        log::warn!("⚠️ [VIEW] Error actualizando botón mint: {:?}", e);
                    }
                }
            })?
            .build()
    };

    let label = ElementBuilder::new("label")?
        .class("inline-flex items-center flex-col")
        .child(fee)?
        .child(input)?
        .build();

    let mint_button = {
        let vm = vm.clone();
        ElementBuilder::new("button")?
            .class("bg-red-500 text-white px-4 py-2 m-2 rounded")
            .id(MINT_BUTTON_ID)?
            .text(if state.mint.is_pending() { "minting..." } else { "Mint NFT" })
            .disabled(state.mint_disabled())?
            .on_click(move |_| {
                let vm = vm.clone();
                spawn_local(async move { vm.mint().await });
            })?
            .build()
    };

    let withdraw_button = if state.withdraw_visible() {
        let vm = vm.clone();
        Some(
            ElementBuilder::new("button")?
                .class("bg-green-500 text-white px-4 py-2 m-2 rounded")
                .text(if state.withdraw.is_pending() { "loading..." } else { "Withdraw" })
                .disabled(state.withdraw_disabled())?
                .on_click(move |_| {
                    let vm = vm.clone();
                    spawn_local(async move { vm.withdraw().await });
                })?
                .build(),
        )
    } else {
        None
    };

    let buttons = ElementBuilder::new("div")?
        .class("flex justify-center items-center h-full")
        .child(mint_button)?
        .child_if(withdraw_button)?
        .build();

    let body = ElementBuilder::new("div")?
        .class("flex flex-col justify-center items-center")
        .child(ticket_image("w-45 h-45")?)?
        .child(ElementBuilder::new("div")?.class("mb-4").child(label)?.build())?
        .child(buttons)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("relative px-4 py-10 bg-white mx-8 md:mx-0 shadow rounded-3xl sm:p-10")
        .child(
            ElementBuilder::new("div")?
                .class("max-w-md mx-auto")
                .child(ElementBuilder::new("div")?.class("flex items-center space-x-5").child(title)?.build())?
                .child(body)?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("min-h-screen bg-gray-100 py-6 flex flex-col justify-center sm:py-12")
        .child(ElementBuilder::new("div")?.class("relative py-3 sm:max-w-xl sm:mx-auto").child(card)?.build())?
        .build())
}

/// Actualización incremental del botón Mint (enabled/disabled)
pub fn sync_mint_button(state: &AppState) -> Result<(), JsValue> {
    match get_element_by_id(MINT_BUTTON_ID) {
        Some(button) => set_disabled(&button, state.mint_disabled()),
        None => Ok(()),
    }
}
