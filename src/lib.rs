// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod enrich;
pub mod error;
pub mod telemetry;
pub mod templates;

// ---- Re-exports for stable public API ----
// Convenient router access: `company_enricher::api::router` and `company_enricher::router`
pub use crate::api::router;
