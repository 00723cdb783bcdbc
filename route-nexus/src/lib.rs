pub mod application;
pub mod component;
pub mod error;
pub mod route;
pub mod router;
pub mod views;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{Application, AppContext, Context, EventContext};
pub use component::{Component, traits::{Event, Action, AnyComponent}};
pub use route::{RouteEntry, RouteTable};
pub use router::{AppRouter, BaseUrl, History, Location};

#[doc(hidden)]
pub use paste;
