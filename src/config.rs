// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor settings.

use std::path::PathBuf;

/// Startup settings for an editing session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Directory scanned for template records.
    pub templates_dir: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Logical size of the scene canvas.
    pub canvas_size: [f32; 2],
    pub default_scene_file: String,
    pub default_script_file: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            window_size: [1280.0, 800.0],
            min_window_size: [800.0, 600.0],
            canvas_size: [800.0, 600.0],
            default_scene_file: "scene.json".to_string(),
            default_script_file: "script.irl".to_string(),
        }
    }
}
