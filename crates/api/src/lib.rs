//! The HTTP face of the rescue backend: routing, auth middleware, JSON
//! mapping and the error envelope.

pub mod app;
pub mod authz;
pub mod context;
pub mod middleware;
