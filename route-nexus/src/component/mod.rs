//! Component module.
//!
//! Defines the `Component` trait and related utilities.

pub mod traits;

pub use traits::Component;
