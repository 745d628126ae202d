//! HTTP surface of the service.
//!
//! Translates incoming requests into integration calls and renders every
//! outcome, success or failure, as the uniform JSON envelope.
//!
//! - [`dto`] - request parameters and response bodies
//! - [`handlers`] - one handler per capability endpoint
//! - [`middleware`] - rate limiting and request tracing
//! - [`routes`] - the `/api` route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
