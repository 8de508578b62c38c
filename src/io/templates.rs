// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Template discovery.
//!
//! Templates live one per file in a directory (`templates/` by default).
//! The directory is created on first use. Files are read in sorted name
//! order; when two files declare the same template name the later file
//! wins and a warning is logged.

use super::serialization::Format;
use crate::error::{EditorError, EditorResult};
use crate::models::template::Template;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Snapshot of every template available to the editor, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    dir: Option<PathBuf>,
    templates: BTreeMap<String, Template>,
}

impl TemplateStore {
    /// Read every template record under `dir`, creating the directory if absent.
    ///
    /// Any unreadable or invalid record fails the whole load.
    pub fn load_all(dir: &Path) -> EditorResult<Self> {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
            log::info!("Created template directory {}", dir.display());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && Format::from_path(&path).is_some() {
                files.push(path);
            }
        }
        files.sort();

        let mut templates = BTreeMap::new();
        for path in files {
            let template = read_template(&path)?;
            if templates.contains_key(&template.name) {
                log::warn!(
                    "Template {:?} redefined by {}, keeping the later definition",
                    template.name,
                    path.display()
                );
            }
            templates.insert(template.name.clone(), template);
        }

        log::info!("Loaded {} templates from {}", templates.len(), dir.display());
        Ok(Self {
            dir: Some(dir.to_path_buf()),
            templates,
        })
    }

    /// Build a store from in-memory records; later duplicates win.
    #[cfg(test)]
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        Self {
            dir: None,
            templates: templates.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }

    /// Re-read the directory this store was loaded from.
    pub fn reload(&self) -> EditorResult<Self> {
        match &self.dir {
            Some(dir) => Self::load_all(dir),
            None => Ok(self.clone()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Template names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn read_template(path: &Path) -> EditorResult<Template> {
    let malformed = |reason: String| EditorError::MalformedTemplate {
        path: path.to_path_buf(),
        reason,
    };

    let text = std::fs::read_to_string(path)?;
    let template: Template = match Format::from_path(path) {
        Some(Format::Yaml) => serde_yaml::from_str(&text).map_err(|e| malformed(e.to_string()))?,
        _ => serde_json::from_str(&text).map_err(|e| malformed(e.to_string()))?,
    };
    template.validate().map_err(malformed)?;
    Ok(template)
}
