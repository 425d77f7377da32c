use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// URL prefix under which local audio files are served.
pub const AUDIO_ROUTE_PREFIX: &str = "/audio";

/// Where a synthesized artifact ended up.
///
/// `Remote` is the durable object-storage URL. `Local` is the on-disk file kept
/// when the upload could not happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioReference {
    Remote(String),
    Local(PathBuf),
}

impl AudioReference {
    /// Rebuild a reference from its stored string form.
    pub fn from_stored(value: &str) -> Self {
        if value.starts_with("https://") || value.starts_with("http://") {
            AudioReference::Remote(value.to_string())
        } else {
            AudioReference::Local(PathBuf::from(value))
        }
    }

    /// String form used in API responses and database rows.
    pub fn as_stored(&self) -> String {
        match self {
            AudioReference::Remote(url) => url.clone(),
            AudioReference::Local(path) => path.to_string_lossy().into_owned(),
        }
    }

    /// Absolute URL a browser can play. Local files are served by this API
    /// under `base_url`, which may sit on another origin than the frontend.
    pub fn public_url(&self, base_url: &str) -> String {
        match self {
            AudioReference::Remote(url) => url.clone(),
            AudioReference::Local(path) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!(
                    "{}{}/{}",
                    base_url.trim_end_matches('/'),
                    AUDIO_ROUTE_PREFIX,
                    file_name
                )
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AudioReference::Remote(_))
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            AudioReference::Local(path) => Some(path.as_path()),
            AudioReference::Remote(_) => None,
        }
    }
}

impl Serialize for AudioReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_stored())
    }
}
