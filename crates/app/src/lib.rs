//! Remote catalog access and application wiring for the Vitrine storefront.

pub mod catalog;
pub mod context;
