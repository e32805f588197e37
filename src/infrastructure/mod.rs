//! Infrastructure layer - concrete implementations of domain ports

pub mod generation;
pub mod openapi;
pub mod output;

pub use generation::*;
pub use openapi::{FileOpenApiLoader, OpenApiParser};
pub use output::*;
