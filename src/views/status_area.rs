// ============================================================================
// STATUS AREA - Resultado de mint / withdraw / connect
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::WalletViewModel;

pub fn render_status_area(vm: &WalletViewModel) -> Result<Element, JsValue> {
    let state = vm.state();
    let mut area = ElementBuilder::new("div")?.class("status-area");

    if state.mint.is_success() {
        let mut block = ElementBuilder::new("div")?
            .class("text-center bg-gray-100 mb-5")
            .child(
                ElementBuilder::new("p")?
                    .class("text-green-500 text-center text-2xl")
                    .text("mint successful")
                    .build(),
            )?;
        if let Some(url) = vm.marketplace_link() {
            block = block.child(
                ElementBuilder::new("a")?
                    .class("hover:text-red-500 text-2xl font-bold")
                    .attr("target", "_blank")?
                    .attr("rel", "noreferrer")?
                    .attr("href", &url)?
                    .text("view on opensea")
                    .build(),
            )?;
        }
        area = area.child(block.build())?;
    }

    if state.withdraw.is_success() {
        area = area.child(
            ElementBuilder::new("p")?
                .class("text-green-500 text-center text-2xl bg-gray-100 mb-5")
                .text("Withdraw successful")
                .build(),
        )?;
    }

    let errors = [
        state.connect.error_detail(),
        state.mint.error_detail(),
        state.withdraw.error_detail(),
    ];
    for detail in errors.into_iter().flatten() {
        area = area.child(
            ElementBuilder::new("p")?
                .class("text-red-500 mt-2")
                .text(&detail)
                .build(),
        )?;
    }

    Ok(area.build())
}
