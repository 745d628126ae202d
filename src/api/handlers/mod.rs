//! Request handlers, one module per endpoint family.
//!
//! Handlers decode the request, call a domain trait if the endpoint has
//! one, and map the outcome into the response envelope.

pub mod echo;
pub mod fallback;
pub mod health;
pub mod media;
pub mod qrcode;
pub mod shorten;

pub use echo::{get_echo_handler, post_echo_handler};
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use media::ytdl_handler;
pub use qrcode::qrcode_handler;
pub use shorten::tinyurl_handler;
