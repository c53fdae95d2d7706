use thiserror::Error;

/// Errors raised by [`MusicGroup`](crate::MusicGroup) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MusicGroupError {
    /// A song referenced an album that is not registered.
    #[error("invalid album name: {0}")]
    InvalidAlbum(String),
}

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Group(#[from] MusicGroupError),
}
