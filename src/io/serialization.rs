// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene serialization and deserialization.
//!
//! A scene document is a flat, ordered array of object records. JSON is the
//! primary format; YAML carries the same records for hand editing.

use crate::error::{EditorError, EditorResult};
use crate::models::object::PlacedObject;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One object as written to a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub template_type: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// On-disk format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(Format::Json),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Flatten the scene into records, one per object, in order.
pub fn save(objects: &[PlacedObject]) -> Vec<ObjectRecord> {
    objects
        .iter()
        .map(|o| ObjectRecord {
            name: o.name.clone(),
            x: o.x,
            y: o.y,
            width: o.width,
            height: o.height,
            template_type: o.template_type.clone(),
            image: o.image_path.clone(),
        })
        .collect()
}

/// Rebuild placed objects from records, rejecting non-finite numbers and
/// non-positive sizes.
pub fn load(records: Vec<ObjectRecord>) -> EditorResult<Vec<PlacedObject>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| {
            if ![r.x, r.y, r.width, r.height].iter().all(|v| v.is_finite()) {
                return Err(EditorError::MalformedScene(format!(
                    "object {} ({:?}) has a non-finite coordinate or size",
                    i, r.name
                )));
            }
            if !(r.width > 0.0 && r.height > 0.0) {
                return Err(EditorError::MalformedScene(format!(
                    "object {} ({:?}) has non-positive size {}x{}",
                    i, r.name, r.width, r.height
                )));
            }
            Ok(PlacedObject {
                name: r.name,
                x: r.x,
                y: r.y,
                width: r.width,
                height: r.height,
                template_type: r.template_type,
                image_path: r.image,
            })
        })
        .collect()
}

/// Encode a scene document as text.
pub fn to_string(objects: &[PlacedObject], format: Format) -> EditorResult<String> {
    let records = save(objects);
    let text = match format {
        Format::Json => serde_json::to_string_pretty(&records)
            .map_err(|e| EditorError::MalformedScene(e.to_string()))?,
        Format::Yaml => serde_yaml::to_string(&records)
            .map_err(|e| EditorError::MalformedScene(e.to_string()))?,
    };
    Ok(text)
}

/// Decode a scene document. Missing or mistyped fields are `MalformedScene`.
pub fn from_str(text: &str, format: Format) -> EditorResult<Vec<PlacedObject>> {
    let records: Vec<ObjectRecord> = match format {
        Format::Json => {
            serde_json::from_str(text).map_err(|e| EditorError::MalformedScene(e.to_string()))?
        }
        Format::Yaml => {
            serde_yaml::from_str(text).map_err(|e| EditorError::MalformedScene(e.to_string()))?
        }
    };
    load(records)
}

/// Write the scene to `path`, picking the format from its extension.
pub fn write_scene(objects: &[PlacedObject], path: &Path) -> EditorResult<()> {
    let format = format_for(path)?;
    let text = to_string(objects, format)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Read a scene from `path`, picking the format from its extension.
pub fn read_scene(path: &Path) -> EditorResult<Vec<PlacedObject>> {
    let format = format_for(path)?;
    let text = std::fs::read_to_string(path)?;
    from_str(&text, format)
}

/// `path` with a `.json` extension added when it has none.
pub fn with_default_extension(path: &Path) -> PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().is_none() {
        path.set_extension("json");
    }
    path
}

fn format_for(path: &Path) -> EditorResult<Format> {
    Format::from_path(path).ok_or_else(|| {
        EditorError::UnsupportedFormat(
            path.extension().map(|e| e.to_string_lossy().into_owned()),
        )
    })
}
