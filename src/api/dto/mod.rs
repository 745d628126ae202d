//! Request and response shapes for the API endpoints.
//!
//! Serde handles the JSON mapping; query DTOs with semantic constraints
//! carry `validator` derives on top.

pub mod echo;
pub mod health;
pub mod media;
pub mod qrcode;
pub mod shorten;
