//! Session-authenticated task listing service.
//!
//! Hexagonal layout: `domain` holds entities and ports, `inbound` the HTTP
//! adapter, `outbound` the persistence adapters. The binary in `main.rs`
//! wires concrete adapters into the HTTP state.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use doc::ApiDoc;
