use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Route for '{path}' has an empty name"))]
    EmptyName { path: String },

    #[snafu(display("Invalid route path '{path}': must start with '/'"))]
    InvalidPath { path: String },

    #[snafu(display("Duplicate route path '{path}'"))]
    DuplicatePath { path: String },

    #[snafu(display("Duplicate route name '{name}'"))]
    DuplicateName { name: String },

    #[snafu(display("Invalid base url '{base}'"))]
    InvalidBaseUrl { base: String },

    #[snafu(display("No route named '{name}'"))]
    UnknownRoute { name: String },

    #[snafu(display("Failed to lock mutex: poisoned"))]
    LockPoisoned,

    #[snafu(display("Terminal error: {source}"))]
    Terminal { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
