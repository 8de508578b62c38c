// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Roaming - a 2D scene editor for game objects
//!
//! A cross-platform desktop application for placing objects stamped from
//! templates onto a canvas, dragging them into position, and saving the
//! scene together with a free-form script.

mod app;
mod config;
mod error;
mod interaction;
mod io;
mod models;
mod render;
mod ui;
mod util;

use anyhow::Result;
use app::EditorApp;
use config::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::default();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title("Roaming Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Roaming",
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
