//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `catalog`, `cart`, etc.) so individual
//! components can depend on small focused models.

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod greeting;
pub mod orders;
pub mod session;
pub mod ui;
