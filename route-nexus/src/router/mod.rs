//! Router module.
//!
//! Provides session `History`, `BaseUrl`/`Location` parsing and the
//! history-backed `AppRouter`.

pub mod app_router;
pub mod history;
pub mod location;

pub use app_router::AppRouter;
pub use history::History;
pub use location::{BaseUrl, Location};
