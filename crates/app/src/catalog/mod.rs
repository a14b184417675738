//! Remote catalog client
//!
//! The catalog is an external REST collaborator; this module holds the
//! service trait consumed by the UI, its HTTP implementation, the wire
//! records, and the client errors. The domain core never calls it — views
//! fetch here and hand the data down.

mod errors;
mod records;
mod service;

pub use errors::{CatalogError, RequestError};
pub use records::{ProductPayload, ProductRecord, RatingRecord};
pub use service::{CatalogService, DEFAULT_BASE_URL, HttpCatalogService, MockCatalogService};
