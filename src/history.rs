//! Durable design history and favorites.
//!
//! Two independently keyed JSON files under a data directory mirror the two
//! browser-storage keys of the gallery: the design history (capped at 50,
//! newest first) and the favorite-id list. A missing or malformed file reads
//! as an empty collection. Every mutation persists synchronously; the
//! file-level read-modify-write is not guarded across processes, so
//! simultaneous batch completions from separate processes can lose updates
//! (last writer wins).

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::models::GeneratedDesign;

/// Oldest entries are evicted beyond this count.
pub const HISTORY_CAPACITY: usize = 50;

const HISTORY_FILE: &str = "history.json";
const FAVORITES_FILE: &str = "favorites.json";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to persist {file}: {source}")]
    Persist {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {file}: {source}")]
    Encode {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Which subset of the gallery to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryFilter {
    All,
    FavoritesOnly,
    /// Designs added within the last 24 hours.
    Recent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySort {
    Newest,
    Oldest,
    Style,
    Mood,
}

pub struct HistoryStore {
    dir: PathBuf,
    designs: RwLock<Vec<GeneratedDesign>>,
    favorites: RwLock<Vec<Uuid>>,
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "malformed store file, starting empty");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

impl HistoryStore {
    /// Opens the store rooted at `dir`, creating the directory if needed and
    /// loading whatever state is already on disk.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| HistoryError::Persist {
            file: HISTORY_FILE,
            source,
        })?;
        let designs = load_or_default(&dir.join(HISTORY_FILE));
        let favorites = load_or_default(&dir.join(FAVORITES_FILE));
        Ok(Self {
            dir,
            designs: RwLock::new(designs),
            favorites: RwLock::new(favorites),
        })
    }

    fn persist<T: Serialize>(&self, file: &'static str, value: &T) -> Result<(), HistoryError> {
        let raw = serde_json::to_string_pretty(value)
            .map_err(|source| HistoryError::Encode { file, source })?;
        fs::write(self.dir.join(file), raw).map_err(|source| HistoryError::Persist { file, source })
    }

    /// Prepends a design and truncates to the most recent
    /// [`HISTORY_CAPACITY`] entries, persisting before returning.
    pub fn add(&self, design: GeneratedDesign) -> Result<(), HistoryError> {
        let mut designs = self.designs.write();
        designs.insert(0, design);
        designs.truncate(HISTORY_CAPACITY);
        self.persist(HISTORY_FILE, &*designs)
    }

    /// All designs, newest first.
    pub fn list(&self) -> Vec<GeneratedDesign> {
        self.designs.read().clone()
    }

    pub fn len(&self) -> usize {
        self.designs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.read().is_empty()
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        let mut designs = self.designs.write();
        designs.clear();
        self.persist(HISTORY_FILE, &*designs)
    }

    /// Flips the favorite mark for a design id and returns whether it is now
    /// a favorite. The favorite set is independent of the history list: ids
    /// survive eviction.
    pub fn toggle_favorite(&self, id: Uuid) -> Result<bool, HistoryError> {
        let mut favorites = self.favorites.write();
        let now_favorite = if let Some(pos) = favorites.iter().position(|f| *f == id) {
            favorites.remove(pos);
            false
        } else {
            favorites.push(id);
            true
        };
        self.persist(FAVORITES_FILE, &*favorites)?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: Uuid) -> bool {
        self.favorites.read().contains(&id)
    }

    pub fn favorites(&self) -> Vec<Uuid> {
        self.favorites.read().clone()
    }

    /// Gallery read: filter, free-text search and sort, all computed on the
    /// fly with no persisted derived state.
    pub fn gallery(
        &self,
        filter: GalleryFilter,
        sort: GallerySort,
        search: Option<&str>,
    ) -> Vec<GeneratedDesign> {
        let favorites = self.favorites.read().clone();
        let cutoff = Utc::now() - Duration::hours(24);

        let mut designs: Vec<GeneratedDesign> = self
            .designs
            .read()
            .iter()
            .filter(|design| match filter {
                GalleryFilter::All => true,
                GalleryFilter::FavoritesOnly => favorites.contains(&design.id),
                GalleryFilter::Recent => design.timestamp > cutoff,
            })
            .filter(|design| match search {
                None => true,
                Some(term) if term.trim().is_empty() => true,
                Some(term) => matches_search(design, term),
            })
            .cloned()
            .collect();

        match sort {
            GallerySort::Newest => designs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            GallerySort::Oldest => designs.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
            GallerySort::Style => designs.sort_by(|a, b| {
                a.specs
                    .style
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.specs.style.as_deref().unwrap_or(""))
            }),
            GallerySort::Mood => designs.sort_by(|a, b| {
                a.specs
                    .mood
                    .as_deref()
                    .unwrap_or("")
                    .cmp(b.specs.mood.as_deref().unwrap_or(""))
            }),
        }
        designs
    }
}

fn matches_search(design: &GeneratedDesign, term: &str) -> bool {
    let term = term.to_lowercase();
    [
        design.specs.style.as_deref(),
        design.specs.mood.as_deref(),
        design.specs.fabric.as_deref(),
        design.specs.color_theme.as_deref(),
        design.specs.season.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}
