// ============================================================================
// HEADER - Título + botón de conexión / dirección abreviada
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::utils::short_address;
use crate::viewmodels::WalletViewModel;

pub fn render_header(vm: &WalletViewModel) -> Result<Element, JsValue> {
    let state = vm.state();
    let connected = state.session.is_connected();

    let logo = ElementBuilder::new("img")?
        .attr("src", "l3_footer.png")?
        .attr("alt", "headl3")?
        .build();

    let title = ElementBuilder::new("h1")?
        .class("text-white text-5xl font-bold")
        .text(if connected { "Lottery NFT" } else { "Welcome" })
        .build();

    let title_row = ElementBuilder::new("div")?
        .class("flex flex-row items-center")
        .child(logo)?
        .child(title)?
        .build();

    let tagline = if connected {
        Some(
            ElementBuilder::new("p")?
                .class("text-lg text-white")
                .text("Lottery, By the community, for the community")
                .build(),
        )
    } else {
        None
    };

    let container = ElementBuilder::new("div")?
        .class("container mx-auto")
        .child(title_row)?
        .child_if(tagline)?
        .child(render_wallet_button(vm)?)?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("bg-slate-800 py-4")
        .child(container)?
        .build())
}

fn render_wallet_button(vm: &WalletViewModel) -> Result<Element, JsValue> {
    let state = vm.state();
    let button = ElementBuilder::new("button")?
        .class("bg-white hover:bg-blue-200 text-gray font-bold py-2 px-4 mt-5 mr-4 rounded")
        .id("wallet-button")?;

    let button = if state.session.is_connected() {
        button.text(&short_address(&state.session.signer_address()))
    } else {
        let label = if state.connect.is_pending() { "connecting..." } else { "connect wallet" };
        let vm = vm.clone();
        button
            .text(label)
            .disabled(state.connect.is_pending())?
            .on_click(move |_| {
                let vm = vm.clone();
                spawn_local(async move { vm.connect().await });
            })?
    };

    Ok(ElementBuilder::new("div")?
        .class("flex justify-end m-0 p-0")
        .child(button.build())?
        .build())
}
