//! Icon resolution
//!
//! Turns a link's icon descriptor into something a renderer can show. Every
//! failure path degrades to [`IconSource::None`] or
//! [`IconSource::MissingImage`]; nothing here returns an error.

mod remote;
pub mod svg;

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

pub use remote::{CdnFetcher, SvgFetcher};

use crate::config::IconsConfig;
use crate::storage::{Icon, Link, UploadedImages};
use crate::utils::image_data::decode_data_uri;
use crate::utils::url_validator::favicon_domain;

/// Renderable icon reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Image URL served by the favicon service
    Favicon { url: String },
    /// Inline SVG markup, already recolored
    Svg { markup: String },
    /// File under the bundled asset directory
    LocalFile { path: PathBuf },
    /// Self-contained uploaded image
    DataUri { uri: String },
    /// The link points at an uploaded image that no longer exists
    MissingImage,
    /// Nothing to render
    None,
}

impl IconSource {
    /// Whether an actual image came out of resolution
    pub fn is_renderable(&self) -> bool {
        !matches!(self, IconSource::None | IconSource::MissingImage)
    }
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSource::Favicon { url } => write!(f, "favicon {}", url),
            IconSource::Svg { markup } => write!(f, "inline svg ({} bytes)", markup.len()),
            IconSource::LocalFile { path } => write!(f, "local file {}", path.display()),
            IconSource::DataUri { uri } => match decode_data_uri(uri) {
                Some((mime, bytes)) => {
                    write!(f, "uploaded image ({}, {} bytes)", mime, bytes.len())
                }
                None => write!(f, "uploaded image (undecodable data URI)"),
            },
            IconSource::MissingImage => write!(f, "missing image placeholder"),
            IconSource::None => write!(f, "no icon"),
        }
    }
}

pub struct IconResolver {
    config: IconsConfig,
    fetcher: Arc<dyn SvgFetcher>,
}

impl IconResolver {
    pub fn new(config: IconsConfig, fetcher: Arc<dyn SvgFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Resolver backed by the configured CDNs
    pub fn from_config(config: &IconsConfig) -> Self {
        Self::new(config.clone(), Arc::new(CdnFetcher::new(config)))
    }

    pub async fn resolve(&self, link: &Link, images: &UploadedImages) -> IconSource {
        match &link.icon {
            Icon::Automatic => self.favicon(&link.url),
            Icon::RemoteVector { name, color } => {
                self.vector(&self.config.simple_icons_url, name, color.as_deref(), "fill")
                    .await
            }
            Icon::PaletteVector { name, color } => {
                self.vector(&self.config.lucide_url, name, color.as_deref(), "stroke")
                    .await
            }
            Icon::LocalAsset { file } => self.local(file),
            Icon::Uploaded { id } => match images.get(id) {
                Some(image) => IconSource::DataUri {
                    uri: image.data.clone(),
                },
                None => {
                    debug!("Uploaded image {} not found for '{}'", id, link.name);
                    IconSource::MissingImage
                }
            },
        }
    }

    fn favicon(&self, url: &str) -> IconSource {
        match favicon_domain(url) {
            Some(domain) => IconSource::Favicon {
                url: self
                    .config
                    .favicon_url
                    .replace("{domain}", &urlencoding::encode(&domain)),
            },
            None => IconSource::None,
        }
    }

    async fn vector(
        &self,
        template: &str,
        name: &str,
        color: Option<&str>,
        paint_attr: &str,
    ) -> IconSource {
        let url = template.replace("{name}", &urlencoding::encode(name));
        let markup = match self.fetcher.fetch_svg(&url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!("Could not load icon '{}' via {}: {}", name, self.fetcher.name(), e);
                return IconSource::None;
            }
        };

        let markup = match color {
            Some(color) if svg::is_safe_color(color) => {
                svg::set_root_attr(&markup, paint_attr, color).unwrap_or(markup)
            }
            Some(color) => {
                warn!("Ignoring unsafe color '{}' for icon '{}'", color, name);
                markup
            }
            None => markup,
        };
        IconSource::Svg { markup }
    }

    fn local(&self, file: &str) -> IconSource {
        let relative = Path::new(file);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !contained {
            warn!("Rejecting local icon path outside the asset directory: {}", file);
            return IconSource::None;
        }
        IconSource::LocalFile {
            path: Path::new(&self.config.assets_dir).join(relative),
        }
    }
}
