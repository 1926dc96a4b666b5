//! Synchronous, typed client for the flight-simulator Live API.
//!
//! # Overview
//! Every operation is one authenticated HTTPS round trip: build the request,
//! hand it to a caller-supplied `Transport`, and unwrap the
//! `{errorCode, result}` envelope into a typed value or an error.
//!
//! # Design
//! - `LiveClient` is immutable; it holds the bearer key, the base URL and the
//!   transport.
//! - Request building is public (`build_get` / `build_post`) and
//!   `decode_envelope` is free-standing, so a host can do the I/O itself.
//! - Transport failures and API error codes stay distinct (`Error::Transport`
//!   vs `Error::Api`).
//! - `LiteralTimestamp` and `ZonedTimestamp` model the two timestamp formats
//!   the service emits.
//!
//! ```no_run
//! use liveapi_core::{LiveClient, UreqTransport};
//!
//! let client = LiveClient::new("api-key", UreqTransport::new());
//! for session in client.sessions()? {
//!     println!("{} ({} users)", session.name, session.user_count);
//! }
//! # Ok::<(), liveapi_core::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod timestamp;
pub mod types;

pub use client::LiveClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use envelope::{decode_envelope, Envelope};
pub use error::{ApiError, Error, ErrorKind};
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use timestamp::{LiteralTimestamp, ZonedTimestamp};
pub use types::*;
