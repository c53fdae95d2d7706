use crate::error::MusicGroupError;
use crate::song::Song;
use crate::utils::compare_ignore_case;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// An in-memory catalog of albums and the songs that belong to them.
///
/// Albums are keyed by name and carry a release year. Songs may reference
/// an album, which must already be registered when the song is added.
#[derive(Debug, Clone, Default)]
pub struct MusicGroup {
    albums: HashMap<String, i32>,
    songs: HashSet<Song>,
}

impl MusicGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an album, overwriting the year if the name already exists.
    pub fn add_album(&mut self, name: impl Into<String>, year: i32) {
        let name = name.into();
        if let Some(previous) = self.albums.insert(name.clone(), year) {
            debug!("Album {:?} year changed from {} to {}", name, previous, year);
        } else {
            debug!("Album added: {:?} ({})", name, year);
        }
    }

    /// Adds a song. Exact duplicates are silently ignored.
    pub fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<String>,
        duration: f64,
    ) -> Result<(), MusicGroupError> {
        if let Some(ref album) = album
            && !self.albums.contains_key(album)
        {
            return Err(MusicGroupError::InvalidAlbum(album.clone()));
        }

        let song = Song::new(name, album, duration);
        debug!("Adding {}", song);
        if !self.songs.insert(song) {
            trace!("Duplicate song ignored");
        }
        Ok(())
    }

    /// All song names, sorted ignoring ASCII case.
    pub fn ordered_song_names(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.songs.iter().map(Song::name).collect();
        names.sort_by(|a, b| compare_ignore_case(a, b));
        names.into_iter()
    }

    pub fn album_names(&self) -> impl Iterator<Item = &str> {
        self.albums.keys().map(String::as_str)
    }

    /// Names of the albums released in `year`.
    pub fn album_in_year(&self, year: i32) -> impl Iterator<Item = &str> {
        self.albums
            .iter()
            .filter(move |&(_, &album_year)| album_year == year)
            .map(|(name, _)| name.as_str())
    }

    pub fn count_songs(&self, album: &str) -> usize {
        self.songs.iter().filter(|s| s.is_in(album)).count()
    }

    pub fn count_songs_in_no_album(&self) -> usize {
        self.songs.iter().filter(|s| s.album().is_none()).count()
    }

    /// Mean duration of the songs in `album`, or `None` if it has no songs.
    pub fn average_duration_of_songs(&self, album: &str) -> Option<f64> {
        let (total, count) = self
            .songs
            .iter()
            .filter(|s| s.is_in(album))
            .fold((0.0, 0usize), |(total, count), s| {
                (total + s.duration(), count + 1)
            });

        (count > 0).then(|| total / count as f64)
    }

    /// Name of the song with the greatest duration. Ties are broken arbitrarily.
    pub fn longest_song(&self) -> Option<&str> {
        self.songs
            .iter()
            .max_by(|a, b| a.duration().total_cmp(&b.duration()))
            .map(Song::name)
    }

    /// Name of the album whose songs add up to the greatest duration.
    ///
    /// Songs without an album don't count. Ties are broken arbitrarily.
    pub fn longest_album(&self) -> Option<&str> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for song in &self.songs {
            if let Some(album) = song.album() {
                *totals.entry(album).or_default() += song.duration();
            }
        }

        totals
            .into_iter()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(album, _)| album)
    }

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    pub fn year_of(&self, album: &str) -> Option<i32> {
        self.albums.get(album).copied()
    }
}
