//! Observability for the TechStore storefront.
//!
//! This crate provides:
//! - `SessionId` - identifier correlating every log line of one shopper session
//! - `StructuredLogger` - structured logging with session context
//! - `LogSink` - where formatted lines go (stderr or an in-memory buffer)

mod logging;
mod session;

pub use logging::*;
pub use session::SessionId;
