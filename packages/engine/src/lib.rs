// Review Trust Engine - core library
//
// Ingests place and review payloads exported from an external review
// platform, scores every review through the authenticity detector, and
// maintains the derived trust aggregates the client-facing views are built
// from.
//
// Architecture follows domain-driven design: one directory per domain under
// domains/, shared infrastructure in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
