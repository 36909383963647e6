//! Domain logic for the idea enhancer.
//!
//! Pure, I/O-free building blocks shared by the server and the client:
//! script-based language selection, the static fallback templates and
//! formatter, the provider instruction builder, the tagged enhancement
//! result, and the wire types for `POST /api/enhance`.

pub mod enhancement;
pub mod language;
pub mod template;
pub mod types;
