// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Asset export.
//!
//! Every object that carries an image gets a `<name>.png` copy in the
//! destination directory. A failing asset is reported and the rest of the
//! batch still runs. Objects sharing a name overwrite each other.

use crate::error::EditorError;
use crate::models::object::PlacedObject;
use std::path::{Component, Path, PathBuf};

/// Outcome of an export batch.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub exported: Vec<PathBuf>,
    pub failures: Vec<EditorError>,
}

impl ExportReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Re-encode each object image as PNG into `destination`.
pub fn export_assets(objects: &[PlacedObject], destination: &Path) -> ExportReport {
    let mut report = ExportReport::default();

    for object in objects {
        let Some(source) = object.image_path.as_deref() else {
            continue;
        };
        if !is_plain_file_name(&object.name) {
            log::error!("Refusing to export {:?}: not a plain file name", object.name);
            report
                .failures
                .push(EditorError::InvalidAssetName(object.name.clone()));
            continue;
        }
        let target = destination.join(format!("{}.png", object.name));

        let result = image::open(source).and_then(|img| {
            img.save_with_format(&target, image::ImageFormat::Png)
        });
        match result {
            Ok(()) => {
                log::info!("Exported {} -> {}", source, target.display());
                report.exported.push(target);
            }
            Err(e) => {
                log::error!("Failed to export {:?}: {}", object.name, e);
                report.failures.push(EditorError::AssetIo {
                    object: object.name.clone(),
                    path: PathBuf::from(source),
                    source: e,
                });
            }
        }
    }

    log::info!(
        "Export to {} finished: {} exported, {} failed",
        destination.display(),
        report.exported.len(),
        report.failures.len()
    );
    report
}

/// True when `name` is a single normal path component, so the export stays in its folder.
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}
