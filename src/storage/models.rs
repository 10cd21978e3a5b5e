use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::errors::QuicktabError;

/// How a link's icon is sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, IntoStaticStr)]
pub enum IconKind {
    /// Favicon looked up from the link's domain
    Automatic,
    /// Brand icon from the Simple Icons CDN
    RemoteVectorIcon,
    /// Outline icon from the Lucide set
    PaletteVectorIcon,
    /// Image bundled with the page
    LocalAsset,
    /// Image uploaded by the user
    UploadedImage,
}

impl IconKind {
    /// Vector kinds carry an icon name and an optional color
    pub fn is_vector(self) -> bool {
        matches!(self, Self::RemoteVectorIcon | Self::PaletteVectorIcon)
    }

    /// Human readable name of the `icon` field for this kind
    pub fn ref_label(self) -> &'static str {
        match self {
            Self::Automatic => "icon",
            Self::RemoteVectorIcon | Self::PaletteVectorIcon => "icon name",
            Self::LocalAsset => "local filename",
            Self::UploadedImage => "uploaded image id",
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for IconKind {
    type Err = String;

    /// Accepts the canonical names plus the short names older pages wrote
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "automatic" | "auto" | "favicon" => Ok(Self::Automatic),
            "remotevectoricon" | "simple" | "simple-icons" => Ok(Self::RemoteVectorIcon),
            "palettevectoricon" | "lucide" => Ok(Self::PaletteVectorIcon),
            "localasset" | "local" => Ok(Self::LocalAsset),
            "uploadedimage" | "upload" | "uploaded" => Ok(Self::UploadedImage),
            _ => Err(format!(
                "Unrecognized icon type: '{}'. Valid: {}",
                s,
                Self::all_names().join(", ")
            )),
        }
    }
}

/// Icon descriptor, one variant per [`IconKind`] with exactly the data it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    Automatic,
    RemoteVector { name: String, color: Option<String> },
    PaletteVector { name: String, color: Option<String> },
    LocalAsset { file: String },
    Uploaded { id: String },
}

impl Icon {
    /// Build an icon from its loose parts
    ///
    /// `icon_ref` and `color` are ignored where the kind has no use for them.
    pub fn from_parts(
        kind: IconKind,
        icon_ref: Option<&str>,
        color: Option<&str>,
    ) -> Result<Self, QuicktabError> {
        let icon_ref = icon_ref.map(str::trim).filter(|s| !s.is_empty());
        let color = color
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let required = || {
            icon_ref.map(str::to_string).ok_or_else(|| {
                QuicktabError::validation(format!(
                    "{} requires a non-empty {}",
                    kind,
                    kind.ref_label()
                ))
            })
        };

        Ok(match kind {
            IconKind::Automatic => Icon::Automatic,
            IconKind::RemoteVectorIcon => Icon::RemoteVector {
                name: required()?,
                color,
            },
            IconKind::PaletteVectorIcon => Icon::PaletteVector {
                name: required()?,
                color,
            },
            IconKind::LocalAsset => Icon::LocalAsset { file: required()? },
            IconKind::UploadedImage => Icon::Uploaded { id: required()? },
        })
    }

    pub fn kind(&self) -> IconKind {
        match self {
            Icon::Automatic => IconKind::Automatic,
            Icon::RemoteVector { .. } => IconKind::RemoteVectorIcon,
            Icon::PaletteVector { .. } => IconKind::PaletteVectorIcon,
            Icon::LocalAsset { .. } => IconKind::LocalAsset,
            Icon::Uploaded { .. } => IconKind::UploadedImage,
        }
    }

    pub fn icon_ref(&self) -> Option<&str> {
        match self {
            Icon::Automatic => None,
            Icon::RemoteVector { name, .. } | Icon::PaletteVector { name, .. } => Some(name),
            Icon::LocalAsset { file } => Some(file),
            Icon::Uploaded { id } => Some(id),
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Icon::RemoteVector { color, .. } | Icon::PaletteVector { color, .. } => {
                color.as_deref()
            }
            _ => None,
        }
    }
}

/// Loose wire form of a link as found in storage and export files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "icon", default, skip_serializing_if = "Option::is_none")]
    pub icon_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One quick-access entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLink", into = "RawLink")]
pub struct Link {
    pub name: String,
    pub url: String,
    pub icon: Icon,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon,
        }
    }
}

impl From<Link> for RawLink {
    fn from(link: Link) -> Self {
        RawLink {
            kind: link.icon.kind().to_string(),
            icon_ref: link.icon.icon_ref().map(str::to_string),
            color: link.icon.color().map(str::to_string),
            name: link.name,
            url: link.url,
        }
    }
}

impl TryFrom<RawLink> for Link {
    type Error = QuicktabError;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        crate::services::validate_link(raw)
    }
}

/// A user-uploaded icon image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub name: String,
    /// Self-contained `data:image/...;base64,...` reference
    pub data: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Uploaded images keyed by identifier
pub type UploadedImages = BTreeMap<String, UploadedImage>;
