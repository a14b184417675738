//! Vitrine
//!
//! Vitrine is the pure storefront domain: product and rating models, the
//! client-side shopping cart, catalog listing derivation, and product form
//! validation. It performs no I/O; callers feed it data fetched elsewhere.

pub mod cart;
pub mod catalog;
pub mod drafts;
pub mod prices;
pub mod products;
