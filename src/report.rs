use crate::group::MusicGroup;
use serde::Serialize;
use std::fmt;

/// Per-album figures of a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumSummary {
    pub name: String,
    pub year: i32,
    pub songs: usize,
    pub average_duration: Option<f64>,
}

/// Every aggregate query of a [`MusicGroup`], collected into one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub songs: Vec<String>,
    pub albums: Vec<AlbumSummary>,
    pub year: Option<i32>,
    pub albums_in_year: Vec<String>,
    pub songs_in_no_album: usize,
    pub longest_song: Option<String>,
    pub longest_album: Option<String>,
}

impl Report {
    /// Builds a report. Albums are listed by name so output is stable.
    pub fn new(group: &MusicGroup, year: Option<i32>) -> Self {
        let mut album_names: Vec<&str> = group.album_names().collect();
        album_names.sort_unstable();

        let albums = album_names
            .into_iter()
            .map(|name| AlbumSummary {
                name: name.to_string(),
                year: group.year_of(name).unwrap_or_default(),
                songs: group.count_songs(name),
                average_duration: group.average_duration_of_songs(name),
            })
            .collect();

        let mut albums_in_year: Vec<String> = year
            .map(|y| group.album_in_year(y).map(String::from).collect())
            .unwrap_or_default();
        albums_in_year.sort_unstable();

        Report {
            songs: group.ordered_song_names().map(String::from).collect(),
            albums,
            year,
            albums_in_year,
            songs_in_no_album: group.count_songs_in_no_album(),
            longest_song: group.longest_song().map(String::from),
            longest_album: group.longest_album().map(String::from),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Songs ({}):", self.songs.len())?;
        for song in &self.songs {
            writeln!(f, "  {}", song)?;
        }

        writeln!(f, "Albums ({}):", self.albums.len())?;
        for album in &self.albums {
            let average = album
                .average_duration
                .map_or_else(|| "-".to_string(), |d| format!("{:.2}", d));
            writeln!(
                f,
                "  {} ({}): {} songs, average {}",
                album.name, album.year, album.songs, average
            )?;
        }

        if let Some(year) = self.year {
            writeln!(f, "Albums in {}: {}", year, self.albums_in_year.join(", "))?;
        }

        writeln!(f, "Songs in no album: {}", self.songs_in_no_album)?;
        writeln!(
            f,
            "Longest song: {}",
            self.longest_song.as_deref().unwrap_or("-")
        )?;
        write!(
            f,
            "Longest album: {}",
            self.longest_album.as_deref().unwrap_or("-")
        )
    }
}
