// ============================================================================
// APP VIEW - Layout principal (header + tarjeta/landing + estado + footer)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::viewmodels::WalletViewModel;
use crate::views::{render_header, render_landing, render_mint_card, render_status_area};

/// Renderizar la app completa a partir del estado
pub fn render_app(vm: &WalletViewModel) -> Result<Element, JsValue> {
    let main = if vm.state().show_mint_card() {
        render_mint_card(vm)?
    } else {
        render_landing()?
    };

    Ok(ElementBuilder::new("div")?
        .class("flex flex-col min-h-screen")
        .child(render_header(vm)?)?
        .child(main)?
        .child(render_status_area(vm)?)?
        .child(render_footer()?)?
        .build())
}

fn render_footer() -> Result<Element, JsValue> {
    let logo = ElementBuilder::new("img")?
        .class("inline-block w-4 h-4")
        .attr("src", "l3_footer.png")?
        .attr("alt", "l3_footer")?
        .build();

    let line = ElementBuilder::new("p")?
        .class("mt-10 text-center")
        .text("Copyright © 2023 ")
        .child(logo)?
        .build();

    Ok(ElementBuilder::new("footer")?
        .class("bg-slate-800 text-white py-4")
        .child(ElementBuilder::new("div")?.class("container mx-auto text-center").child(line)?.build())?
        .build())
}
