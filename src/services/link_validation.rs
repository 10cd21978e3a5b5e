//! 链接验证逻辑
//!
//! 提供统一的 "raw fields → Link" 转换和验证，供新增、编辑、导入和
//! 存储反序列化共用。

use serde_json::Value;
use tracing::warn;

use crate::errors::{QuicktabError, Result};
use crate::services::grid::Grid;
use crate::storage::{Icon, IconKind, Link, RawLink, UploadedImage, UploadedImages};
use crate::utils::url_validator::validate_url;

/// 验证并转换单个链接
///
/// 验证顺序：
/// 1. name 去空白后非空
/// 2. url 非空且可解析
/// 3. type 可识别
/// 4. 按类型检查 icon 字段
pub fn validate_link(raw: RawLink) -> Result<Link> {
    let name = raw.name.trim();
    if name.is_empty() {
        return Err(QuicktabError::validation("Link name cannot be empty"));
    }

    let url = raw.url.trim();
    validate_url(url).map_err(|e| QuicktabError::validation(format!("Invalid URL: {}", e)))?;

    if raw.kind.trim().is_empty() {
        return Err(QuicktabError::validation("Icon type cannot be empty"));
    }
    let kind: IconKind = raw.kind.parse().map_err(QuicktabError::validation)?;

    let icon = Icon::from_parts(kind, raw.icon_ref.as_deref(), raw.color.as_deref())?;

    Ok(Link::new(name, url, icon))
}

/// 检查上传图片引用是否存在（仅新增/编辑时要求，导入时不要求）
pub fn ensure_icon_resolvable(link: &Link, images: &UploadedImages) -> Result<()> {
    if let Icon::Uploaded { id } = &link.icon
        && !images.contains_key(id)
    {
        return Err(QuicktabError::validation(format!(
            "Uploaded image '{}' does not exist",
            id
        )));
    }
    Ok(())
}

/// Supported export format versions
pub const SUPPORTED_VERSIONS: &[&str] = &["1.0", "1.1"];

/// A snapshot that passed structural validation
#[derive(Debug, Clone)]
pub struct ValidatedSnapshot {
    pub version: String,
    pub grid: Grid,
    /// `None` when the file carries no image map (format 1.0)
    pub uploaded_images: Option<UploadedImages>,
}

/// 验证导入快照
///
/// 任何一处不合法都会返回带位置信息的错误，不做部分导入。
pub fn validate_snapshot(value: &Value) -> Result<ValidatedSnapshot> {
    let obj = value
        .as_object()
        .ok_or_else(|| QuicktabError::validation("Import data must be a JSON object"))?;

    let version = match obj.get("version") {
        None | Some(Value::Null) => "1.0".to_string(),
        Some(Value::String(v)) => v.clone(),
        Some(other) => {
            return Err(QuicktabError::validation(format!(
                "version must be a string, got {}",
                other
            )));
        }
    };
    if !SUPPORTED_VERSIONS.contains(&version.as_str()) {
        return Err(QuicktabError::validation(format!(
            "Unsupported export version '{}'. Supported: {}",
            version,
            SUPPORTED_VERSIONS.join(", ")
        )));
    }

    let rows = obj
        .get("links")
        .ok_or_else(|| QuicktabError::validation("Missing 'links' field"))?
        .as_array()
        .ok_or_else(|| QuicktabError::validation("'links' must be an array of rows"))?;

    let mut grid_rows = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let links = row
            .as_array()
            .ok_or_else(|| QuicktabError::validation(format!("Row {} is not an array", r)))?;

        if links.is_empty() {
            warn!("Import: dropping empty row {}", r);
            continue;
        }

        let mut validated = Vec::with_capacity(links.len());
        for (l, item) in links.iter().enumerate() {
            validated.push(validate_link_value(item).map_err(|e| {
                QuicktabError::validation(format!("Row {}, link {}: {}", r, l, e.message()))
            })?);
        }
        grid_rows.push(validated);
    }

    let uploaded_images = match obj.get("uploadedImages") {
        None | Some(Value::Null) => None,
        Some(images) => Some(validate_images_value(images)?),
    };

    Ok(ValidatedSnapshot {
        version,
        grid: Grid::from_rows(grid_rows),
        uploaded_images,
    })
}

fn validate_link_value(item: &Value) -> Result<Link> {
    let obj = item
        .as_object()
        .ok_or_else(|| QuicktabError::validation("link is not an object"))?;

    let field = |key: &str| -> Result<Option<String>> {
        match obj.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(QuicktabError::validation(format!(
                "'{}' must be a string",
                key
            ))),
        }
    };

    let raw = RawLink {
        name: field("name")?.unwrap_or_default(),
        url: field("url")?.unwrap_or_default(),
        kind: field("type")?.unwrap_or_default(),
        icon_ref: field("icon")?,
        color: field("color")?,
    };
    validate_link(raw)
}

fn validate_images_value(value: &Value) -> Result<UploadedImages> {
    let map = value
        .as_object()
        .ok_or_else(|| QuicktabError::validation("'uploadedImages' must be an object"))?;

    let mut images = UploadedImages::new();
    for (id, entry) in map {
        let image: UploadedImage = serde_json::from_value(entry.clone()).map_err(|e| {
            QuicktabError::validation(format!("Uploaded image '{}': {}", id, e))
        })?;
        if !image.data.starts_with("data:image/") {
            return Err(QuicktabError::validation(format!(
                "Uploaded image '{}' is not an image data URI",
                id
            )));
        }
        images.insert(id.clone(), image);
    }
    Ok(images)
}
