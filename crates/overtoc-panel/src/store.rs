#![forbid(unsafe_code)]

//! Geometry persistence.
//!
//! The host provides a synchronous string key-value store that survives
//! reloads. [`StringStore`] is that collaborator's entire surface;
//! [`GeometryStore`] wraps it with a lenient JSON codec for
//! [`PositionRecord`], the sole persisted record.
//!
//! Malformed or absent stored data decodes to all-defaults rather than
//! failing, and save errors are logged and swallowed: persistence must never
//! break the panel.

use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which screen edge the panel is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Anchored to the left edge.
    Left,
    /// Anchored to the right edge (the default).
    #[default]
    Right,
}

/// The persisted panel geometry.
///
/// Lifecycle: read once at mount, rewritten on every drag-release and every
/// collapse toggle, never otherwise. Absent fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Anchored side.
    #[serde(default)]
    pub side: Side,
    /// Vertical offset as a pixel string (`"240px"`), absent when the panel
    /// has never been dragged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Whether the panel is collapsed to its header.
    #[serde(default)]
    pub collapsed: bool,
}

impl PositionRecord {
    /// Parse the stored `top` as pixels. Unparseable values are treated as
    /// absent.
    #[must_use]
    pub fn top_px(&self) -> Option<f32> {
        let raw = self.top.as_deref()?;
        raw.strip_suffix("px")?.trim().parse().ok()
    }

    /// Format a pixel offset for storage, rounded to whole pixels.
    #[must_use]
    pub fn format_px(top: f32) -> String {
        format!("{:.0}px", top)
    }
}

/// Failure writing to a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be written.
    #[error("store i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// The persistent key-value collaborator: a synchronous string get/set.
pub trait StringStore {
    /// The stored value, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored value.
    fn set(&mut self, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw value.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
        }
    }

    /// The raw stored string, for assertions.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl StringStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) -> Result<(), StoreError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// File-backed store for processes that want geometry to survive runs.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StringStore for FileStore {
    fn get(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn set(&mut self, value: &str) -> Result<(), StoreError> {
        let mut file = std::fs::File::create(&self.path)?;
        file.write_all(value.as_bytes())?;
        Ok(())
    }
}

/// Typed, lenient wrapper over a [`StringStore`].
#[derive(Debug, Clone)]
pub struct GeometryStore<S> {
    inner: S,
}

impl<S: StringStore> GeometryStore<S> {
    /// Wrap a backend.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Load the record. Absent, partial, or corrupt data yields defaults.
    #[must_use]
    pub fn load(&self) -> PositionRecord {
        let Some(raw) = self.inner.get() else {
            return PositionRecord::default();
        };
        match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%err, "discarding corrupt geometry record");
                PositionRecord::default()
            }
        }
    }

    /// Save the record. Failures are logged and swallowed.
    pub fn save(&mut self, record: &PositionRecord) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "geometry record failed to serialize");
                return;
            }
        };
        if let Err(err) = self.inner.set(&json) {
            tracing::warn!(%err, "geometry record failed to persist");
        }
    }

    /// The wrapped backend, for assertions.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.inner
    }
}
