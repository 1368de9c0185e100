//! Public URLs for stored asset paths.
//!
//! Partitions keep `pdf_url`/`audio_url` relative to the file storage. Clients
//! only ever see them joined onto `{public_url}/{storage_prefix}`.

use configs::AssetsConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    pub fn new(public_url: &str, storage_prefix: &str) -> Self {
        let root = public_url.trim_end_matches('/');
        let prefix = storage_prefix.trim_matches('/');
        let base = if prefix.is_empty() { root.to_string() } else { format!("{root}/{prefix}") };
        Self { base }
    }

    pub fn from_config(cfg: &AssetsConfig) -> Self {
        Self::new(&cfg.public_url, &cfg.storage_prefix)
    }

    /// Prefix every resolved URL starts with.
    pub fn base(&self) -> &str { &self.base }

    pub fn resolve(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}
