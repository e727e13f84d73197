//! Startup and serving failures for the site server.

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid config: {var}={value:?}: {reason}")]
    InvalidConfig { var: &'static str, value: String, reason: String },

    /// The `[package.metadata.leptos]` settings could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
