mod catalog;
mod error;
mod group;
mod report;
mod song;
mod utils;

pub use catalog::{load_catalog, load_catalog_from_path};
pub use error::{CatalogError, MusicGroupError};
pub use group::MusicGroup;
pub use report::{AlbumSummary, Report};
pub use song::Song;
pub use utils::compare_ignore_case;
