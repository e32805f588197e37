//! Generation domain module - orchestrates code generation workflow
//!
//! This module implements the schema-to-artifact pipeline: operations are
//! resolved into bound parameters, request bodies and return types, grouped
//! into controllers, and DTOs are synthesized on the side through a cache
//! owned by a single run.

pub mod context;
pub mod controllers;
pub mod dto;
pub mod errors;
pub mod naming;
pub mod orchestrator;
pub mod parameters;
pub mod request_body;
pub mod responses;
pub mod traits;
pub mod type_mapper;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
