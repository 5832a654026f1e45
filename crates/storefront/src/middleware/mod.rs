//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. Session layer (tower-sessions with in-memory store)
//! 3. `TraceLayer` (request span)
//! 4. Request ID (record unique ID on the span and response)
//! 5. Security headers (CSP, frame and referrer policies)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
