//! Generates ASP.NET Core controllers and DTOs from OpenAPI documents.
//!
//! The crate is layered: [`generation`] holds the synthesis domain,
//! [`infrastructure`] the parser, templates and filesystem output, and
//! [`application`] the use case that wires them together.
#![deny(unsafe_code)]

pub mod application;
pub mod generation;
pub mod infrastructure;
