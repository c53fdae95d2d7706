use std::fmt;
use std::hash::{Hash, Hasher};

/// A single song in a [`MusicGroup`](crate::MusicGroup).
///
/// Two songs are equal when name, album and duration all match. The duration
/// is compared by bit pattern so songs can be stored in a hash set, which
/// makes `0.0` and `-0.0` distinct durations.
#[derive(Debug, Clone)]
pub struct Song {
    name: String,
    album: Option<String>,
    duration: f64,
}

impl Song {
    pub fn new(name: impl Into<String>, album: Option<String>, duration: f64) -> Self {
        Song {
            name: name.into(),
            album,
            duration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// True when the song belongs to the album named `album`.
    pub fn is_in(&self, album: &str) -> bool {
        self.album.as_deref() == Some(album)
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.album == other.album
            && self.duration.to_bits() == other.duration.to_bits()
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration.to_bits().hash(state);
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Song [songName={}, albumName={}, duration={}]",
            self.name,
            self.album.as_deref().unwrap_or("none"),
            self.duration
        )
    }
}
