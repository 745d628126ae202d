//! # Web Toolbox
//!
//! A small toolbox service: typed HTTP endpoints in front of outbound
//! integrations, every call bounded by a timeout and every outcome rendered
//! as one uniform JSON envelope.
//!
//! The layering keeps the integration seams mockable:
//!
//! - [`domain`] defines the client traits ([`domain::integrations::UrlShortener`],
//!   [`domain::integrations::QrEncoder`], [`domain::integrations::MediaFetcher`])
//!   and their shared error contract; nothing here knows about HTTP.
//! - [`infrastructure`] implements them: the retrying TinyURL client, the
//!   SVG QR encoder, the streaming media fetcher and the artifact store.
//! - [`api`] is the HTTP surface: DTOs, handlers, middleware, route tables.
//!
//! [`config`] reads the environment, [`routes`] assembles the router, and
//! [`server`] wires everything together and listens.
//!
//! ## Endpoints
//!
//! | Endpoint | Purpose |
//! |---|---|
//! | `GET /api/get` | liveness probe |
//! | `POST /api/post` | echo a JSON body |
//! | `GET /api/tinyurl` | shorten a URL |
//! | `GET /api/qrcode` | render text as a QR artifact |
//! | `GET /api/ytdl` | download a media resource |
//! | `GET /health` | component health |
//! | `GET /static/*` | serve generated artifacts |
//!
//! ## Running
//!
//! ```bash
//! ARTIFACTS_DIR=./artifacts cargo run
//! ```
//!
//! Every configuration variable has a default; see [`config`] for the list.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
