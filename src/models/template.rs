// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Object templates.
//!
//! A template is the reusable blueprint a placed object is stamped from.
//! Templates are read from disk once per session and never mutated.

use serde::{Deserialize, Serialize};

/// An immutable template record as stored in the template directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl Template {
    /// Reason the record is unusable, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("template name is empty".to_string());
        }
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(format!(
                "template {:?} has non-finite size {}x{}",
                self.name, self.width, self.height
            ));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!(
                "template {:?} has non-positive size {}x{}",
                self.name, self.width, self.height
            ));
        }
        Ok(())
    }
}
