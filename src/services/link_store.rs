//! Link store
//!
//! Single source of truth for the quick-link grid and the uploaded image map.
//! Every successful mutation is written back to the key-value store before the
//! call returns. Write failures are logged, never returned: the in-memory state
//! stays authoritative for the session.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::LinksConfig;
use crate::errors::{QuicktabError, Result};
use crate::services::grid::{Grid, Position, relocate};
use crate::services::link_validation::{ensure_icon_resolvable, validate_link, validate_snapshot};
use crate::services::seed::default_grid;
use crate::storage::{
    IMAGES_KEY, IconKind, KvStore, LINKS_KEY, Link, RawLink, UploadedImage, UploadedImages,
};
use crate::utils::generate_image_id;
use crate::utils::image_data::{sniff_image_mime, to_data_uri};

/// Version written by [`LinkStore::export`]
pub const EXPORT_VERSION: &str = "1.1";

// ============ Request/Response DTOs ============

/// Behavior knobs for the store
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Preferred links per row when placing a new link
    pub row_capacity: usize,
    /// Start from the built-in link set when nothing is stored yet
    pub seed_defaults: bool,
    /// Upper bound for uploaded image payloads, in bytes
    pub max_upload_bytes: usize,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self::from(&LinksConfig::default())
    }
}

impl From<&LinksConfig> for LinkSettings {
    fn from(cfg: &LinksConfig) -> Self {
        Self {
            row_capacity: cfg.row_capacity,
            seed_defaults: cfg.seed_defaults,
            max_upload_bytes: cfg.max_upload_bytes,
        }
    }
}

/// Partial update of a link; `None` keeps the current value
///
/// An empty `color` clears the color.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub kind: Option<IconKind>,
    pub icon_ref: Option<String>,
    pub color: Option<String>,
}

/// Portable snapshot of the whole configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub links: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_images: Option<UploadedImages>,
}

/// Result of an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub version: String,
    pub rows: usize,
    pub links: usize,
    /// Number of images imported, `None` when the file carried no image map
    pub images: Option<usize>,
}

// ============ LinkStore Implementation ============

pub struct LinkStore {
    kv: Arc<dyn KvStore>,
    settings: LinkSettings,
    grid: Grid,
    images: UploadedImages,
}

impl LinkStore {
    /// Load the grid and image map from storage
    ///
    /// Missing or unreadable records fall back to the default grid (the
    /// built-in set when `seed_defaults` is on) and an empty image map.
    pub async fn load(kv: Arc<dyn KvStore>, settings: LinkSettings) -> Self {
        let grid = match read_record::<Grid>(kv.as_ref(), LINKS_KEY).await {
            Some(grid) => grid,
            None => {
                if settings.seed_defaults {
                    info!("No stored links, starting from the built-in set");
                    default_grid()
                } else {
                    Grid::new()
                }
            }
        };
        let images = read_record::<UploadedImages>(kv.as_ref(), IMAGES_KEY)
            .await
            .unwrap_or_default();

        debug!(
            "LinkStore loaded from {}: {} links in {} rows, {} images",
            kv.backend_name(),
            grid.link_count(),
            grid.row_count(),
            images.len()
        );

        Self {
            kv,
            settings,
            grid,
            images,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn images(&self) -> &UploadedImages {
        &self.images
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    pub fn backend_name(&self) -> &'static str {
        self.kv.backend_name()
    }

    pub fn get_link(&self, pos: Position) -> Option<&Link> {
        self.grid.get(pos)
    }

    // ============ Link Operations ============

    /// Validate and place a new link
    pub async fn add_link(&mut self, candidate: RawLink) -> Result<Position> {
        let link = validate_link(candidate)?;
        ensure_icon_resolvable(&link, &self.images)?;

        let name = link.name.clone();
        let pos = self.grid.place(link, self.settings.row_capacity);
        self.persist_links().await;

        info!("LinkStore: added '{}' at {}", name, pos);
        Ok(pos)
    }

    /// Merge `patch` into the link at `pos`
    pub async fn update_link(&mut self, pos: Position, patch: LinkPatch) -> Result<Link> {
        let existing = self.grid.get(pos).ok_or_else(|| not_found_at(pos))?;

        let mut raw = RawLink::from(existing.clone());
        if let Some(name) = patch.name {
            raw.name = name;
        }
        if let Some(url) = patch.url {
            raw.url = url;
        }
        if let Some(kind) = patch.kind {
            raw.kind = kind.to_string();
        }
        if let Some(icon_ref) = patch.icon_ref {
            raw.icon_ref = Some(icon_ref);
        }
        if let Some(color) = patch.color {
            raw.color = Some(color);
        }

        // 颜色只对矢量图标有意义，Automatic 不需要 icon
        if let Ok(kind) = raw.kind.parse::<IconKind>() {
            if !kind.is_vector() {
                raw.color = None;
            }
            if kind == IconKind::Automatic {
                raw.icon_ref = None;
            }
        }

        let updated = validate_link(raw)?;
        ensure_icon_resolvable(&updated, &self.images)?;

        if let Some(slot) = self.grid.get_mut(pos) {
            *slot = updated.clone();
        }
        self.persist_links().await;

        info!("LinkStore: updated '{}' at {}", updated.name, pos);
        Ok(updated)
    }

    /// Remove the link at `pos`; an emptied row disappears
    pub async fn remove_link(&mut self, pos: Position) -> Result<Link> {
        let removed = self.grid.remove(pos).ok_or_else(|| not_found_at(pos))?;
        self.persist_links().await;

        info!("LinkStore: removed '{}' from {}", removed.name, pos);
        Ok(removed)
    }

    /// Move a link next to another one, see [`relocate`]
    pub async fn move_link(&mut self, from: Position, to: Position, insert_after: bool) -> Result<()> {
        if from == to {
            return if self.grid.get(from).is_some() {
                Ok(())
            } else {
                Err(not_found_at(from))
            };
        }

        self.grid = relocate(&self.grid, from, to, insert_after)?;
        self.persist_links().await;

        info!(
            "LinkStore: moved {} -> {} ({})",
            from,
            to,
            if insert_after { "after" } else { "before" }
        );
        Ok(())
    }

    /// Remove every link
    pub async fn clear_all(&mut self) {
        self.grid = Grid::new();
        self.persist_links().await;
        info!("LinkStore: cleared all links");
    }

    // ============ Import / Export ============

    pub fn export(&self) -> ExportSnapshot {
        ExportSnapshot {
            version: EXPORT_VERSION.to_string(),
            export_date: Utc::now(),
            links: self.grid.clone(),
            uploaded_images: Some(self.images.clone()),
        }
    }

    /// Replace the grid (and the image map, when present) with `snapshot`
    ///
    /// Nothing changes unless the whole snapshot is valid.
    pub async fn import(&mut self, snapshot: &serde_json::Value) -> Result<ImportSummary> {
        let validated = validate_snapshot(snapshot)?;

        let summary = ImportSummary {
            version: validated.version,
            rows: validated.grid.row_count(),
            links: validated.grid.link_count(),
            images: validated.uploaded_images.as_ref().map(|m| m.len()),
        };

        self.grid = validated.grid;
        self.persist_links().await;

        if let Some(images) = validated.uploaded_images {
            self.images = images;
            self.persist_images().await;
        }

        info!(
            "LinkStore: imported {} links in {} rows (format {})",
            summary.links, summary.rows, summary.version
        );
        Ok(summary)
    }

    /// Parse and import an export file's contents
    pub async fn import_str(&mut self, content: &str) -> Result<ImportSummary> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| QuicktabError::validation(format!("Import file is not valid JSON: {}", e)))?;
        self.import(&value).await
    }

    // ============ Uploaded Images ============

    /// Store an uploaded image and return its identifier
    pub async fn add_uploaded_image(&mut self, name: &str, payload: &[u8]) -> Result<String> {
        if payload.is_empty() {
            return Err(QuicktabError::validation("Image payload is empty"));
        }
        if payload.len() > self.settings.max_upload_bytes {
            return Err(QuicktabError::validation(format!(
                "Image is {} bytes, the limit is {} bytes",
                payload.len(),
                self.settings.max_upload_bytes
            )));
        }
        let mime = sniff_image_mime(payload)
            .ok_or_else(|| QuicktabError::validation("Payload is not a supported image format"))?;

        let id = generate_image_id();
        let name = match name.trim() {
            "" => id.clone(),
            trimmed => trimmed.to_string(),
        };

        self.images.insert(
            id.clone(),
            UploadedImage {
                name,
                data: to_data_uri(mime, payload),
                timestamp: Utc::now().trunc_subsecs(3),
            },
        );
        self.persist_images().await;

        info!("LinkStore: stored uploaded image {} ({})", id, mime);
        Ok(id)
    }

    /// Delete an uploaded image; links referencing it are left alone
    pub async fn remove_uploaded_image(&mut self, id: &str) -> Option<UploadedImage> {
        let removed = self.images.remove(id);
        self.persist_images().await;

        if removed.is_some() {
            let dangling = self
                .grid
                .iter()
                .filter(|(_, link)| link.icon.icon_ref() == Some(id))
                .count();
            info!(
                "LinkStore: removed uploaded image {} ({} links still reference it)",
                id, dangling
            );
        }
        removed
    }

    /// Drop every uploaded image along with its stored record
    pub async fn clear_uploaded_images(&mut self) {
        self.images.clear();
        if let Err(e) = self.kv.remove(IMAGES_KEY).await {
            error!("Failed to remove record '{}': {}", IMAGES_KEY, e);
        }
        info!("LinkStore: cleared uploaded images");
    }

    // ============ Persistence ============

    async fn persist_links(&self) {
        write_record(self.kv.as_ref(), LINKS_KEY, &self.grid).await;
    }

    async fn persist_images(&self) {
        write_record(self.kv.as_ref(), IMAGES_KEY, &self.images).await;
    }
}

fn not_found_at(pos: Position) -> QuicktabError {
    QuicktabError::not_found(format!("No link at position {}", pos))
}

async fn read_record<T: DeserializeOwned>(kv: &dyn KvStore, key: &str) -> Option<T> {
    match kv.get(key).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Stored record '{}' is malformed, using default: {}", key, e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!("Failed to read record '{}', using default: {}", key, e);
            None
        }
    }
}

async fn write_record<T: Serialize>(kv: &dyn KvStore, key: &str, record: &T) {
    let value = match serde_json::to_value(record) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to serialize record '{}': {}", key, e);
            return;
        }
    };
    if let Err(e) = kv.set(key, value).await {
        error!("Failed to persist record '{}': {}", key, e);
    }
}
