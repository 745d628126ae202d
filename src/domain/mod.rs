//! Domain layer: the contracts the rest of the service is built around.
//!
//! Nothing in this service outlives a request, so the domain layer is small:
//! it defines the integration client traits and their shared error type,
//! independent of any concrete transport or library.
//!
//! # Architecture
//!
//! - [`integrations`] - outbound client trait definitions and value types
//!
//! Concrete implementations live in [`crate::infrastructure`]; HTTP concerns
//! live in [`crate::api`].

pub mod integrations;
