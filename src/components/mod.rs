//! Presentational components for the session page.

pub mod cart_panel;
pub mod greeting_overlay;
pub mod product_grid;
pub mod shimmer_text;
pub mod status_bar;
pub mod transcript_panel;
