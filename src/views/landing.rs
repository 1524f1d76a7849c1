// ============================================================================
// LANDING - Pantalla cuando no hay wallet conectado (o red incorrecta)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;

pub fn render_landing() -> Result<Element, JsValue> {
    let intro = ElementBuilder::new("div")?
        .child(
            ElementBuilder::new("h1")?
                .class("text-3xl font-bold text-center text-blue-500 mt-20")
                .text("NFT TICKETS")
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("text-lg text-center text-gray-700")
                .text("Lottery, By the community, for the community")
                .build(),
        )?
        .child(
            ElementBuilder::new("h2")?
                .class("text-blue-500 text-center text-3xl font-bold")
                .text("Please connect your wallet to mint your L3 NFT TICKET")
                .build(),
        )?
        .build();

    let image = ElementBuilder::new("div")?
        .class("flex flex-col justify-center items-center")
        .child(
            ElementBuilder::new("div")?
                .class("w-96 h-96")
                .child(ticket_image("w-full h-full")?)?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("h-screen")
        .child(intro)?
        .child(image)?
        .build())
}

pub(crate) fn ticket_image(class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("img")?
        .class(class)
        .attr("src", "L3_Ticket_NFT.png")?
        .attr("alt", "L3_Ticket_NFT")?
        .build())
}
