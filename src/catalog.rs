use crate::{error::CatalogError, group::MusicGroup};
use csv::ReaderBuilder;
use log::{info, warn};
use serde::Deserialize;
use std::{io::Read, path::Path};

/// One row of a catalog CSV file.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct CatalogRow {
    #[serde(rename = "Song Name")]
    song_name: String,

    #[serde(rename = "Album Name")]
    album_name: String,

    #[serde(rename = "Album Year")]
    album_year: Option<i32>,

    #[serde(rename = "Duration")]
    duration: f64,
}

impl CatalogRow {
    fn album(&self) -> Option<String> {
        let name = self.album_name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Registers the row's album (when it carries a year) and adds its song.
    fn apply(self, group: &mut MusicGroup) -> Result<(), CatalogError> {
        let album = self.album();
        if let (Some(name), Some(year)) = (&album, self.album_year) {
            group.add_album(name.clone(), year);
        }
        group.add_song(self.song_name, album, self.duration)?;
        Ok(())
    }
}

/// Builds a [`MusicGroup`] from CSV data.
///
/// Rows that fail to parse are skipped. A read failure, or a row referencing
/// an album that was never given a year, aborts the load.
pub fn load_catalog<R: Read>(reader: R) -> Result<MusicGroup, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut group = MusicGroup::new();
    let mut skipped = 0;

    for result in reader.deserialize::<CatalogRow>() {
        match result {
            Ok(row) => row.apply(&mut group)?,
            Err(e) if is_row_error(&e) => {
                warn!("Skipping invalid catalog row: {}", e);
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        "Catalog loaded: {} albums, {} songs ({} rows skipped)",
        group.album_count(),
        group.song_count(),
        skipped
    );

    Ok(group)
}

/// Errors confined to a single record. Anything else means the input itself
/// can't be read any further.
fn is_row_error(error: &csv::Error) -> bool {
    matches!(
        error.kind(),
        csv::ErrorKind::Deserialize { .. }
            | csv::ErrorKind::Utf8 { .. }
            | csv::ErrorKind::UnequalLengths { .. }
    )
}

pub fn load_catalog_from_path(path: &Path) -> Result<MusicGroup, CatalogError> {
    let file = std::fs::File::open(path)?;
    load_catalog(file)
}
