//! `enhancer-client` library crate.
//!
//! Holds the session state machine and the HTTP client so they can be
//! unit tested. The terminal entrypoint lives in `main.rs`.

pub mod http;
pub mod session;
