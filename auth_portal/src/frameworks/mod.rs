// Frameworks layer: configuration, tracing and the HTTP server.

pub mod config;
pub mod server;
