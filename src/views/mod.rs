pub mod app;
pub mod header;
pub mod mint_card;
pub mod landing;
pub mod status_area;

pub use app::render_app;
pub use header::render_header;
pub use mint_card::{render_mint_card, sync_mint_button};
pub use landing::render_landing;
pub use status_area::render_status_area;
