// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types shared by the scene model and the file formats.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error("malformed template {}: {reason}", path.display())]
    MalformedTemplate { path: PathBuf, reason: String },
    #[error("malformed scene: {0}")]
    MalformedScene(String),
    #[error("asset export failed for {object} ({}): {source}", path.display())]
    AssetIo {
        object: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("object name {0:?} is not a plain file name")]
    InvalidAssetName(String),
    #[error("unsupported scene format: {0:?}")]
    UnsupportedFormat(Option<String>),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EditorResult<T> = Result<T, EditorError>;
