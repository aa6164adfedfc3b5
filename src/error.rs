use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("invalid listen address {addr}: {source}")]
    InvalidListen {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("leptos configuration error: {0}")]
    Leptos(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
