// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns one editing session: the template snapshot, the scene,
//! its render projection, the drag controller and the script buffer. It
//! routes menu, toolbar and canvas input to them and reports outcomes.

use crate::config::EditorConfig;
use crate::interaction::drag::DragController;
use crate::io::templates::TemplateStore;
use crate::io::{assets, script, serialization};
use crate::models::scene::Scene;
use crate::render::sync::RenderSync;
use crate::ui::{canvas, properties, script_panel, toolbar};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A message shown to the user in a closable window.
struct Notice {
    title: String,
    message: String,
    is_error: bool,
}

impl Notice {
    fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            is_error: false,
        }
    }

    fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            is_error: true,
        }
    }
}

/// Main application state.
pub struct EditorApp {
    config: EditorConfig,

    /// Templates available to the toolbar
    templates: TemplateStore,

    /// Authoritative list of placed objects
    scene: Scene,

    /// Visual projection of the scene
    render: RenderSync,

    /// Pointer gesture state
    drag: DragController,

    /// Decoded images for image-backed objects
    textures: canvas::TextureCache,

    /// Template chosen in the toolbar
    selected_template: String,

    /// Name for the next object
    object_name: String,

    /// Free-form script text
    script: String,

    notice: Option<Notice>,
}

impl EditorApp {
    /// Create a new editor session, loading templates from the configured directory.
    pub fn new(config: EditorConfig) -> Self {
        let (templates, notice) = match TemplateStore::load_all(&config.templates_dir) {
            Ok(store) => (store, None),
            Err(e) => {
                log::error!("Failed to load templates: {}", e);
                (
                    TemplateStore::default(),
                    Some(Notice::error("Templates", format!("Failed to load templates: {e}"))),
                )
            }
        };

        Self {
            config,
            templates,
            scene: Scene::new(),
            render: RenderSync::new(),
            drag: DragController::new(),
            textures: canvas::TextureCache::default(),
            selected_template: String::new(),
            object_name: String::new(),
            script: script::STARTER_SCRIPT.to_string(),
            notice,
        }
    }

    /// Instantiate the selected template and draw the new object.
    fn add_object(&mut self) {
        let name = self.object_name.trim();
        if name.is_empty() {
            return;
        }

        match self.scene.instantiate(&self.templates, &self.selected_template, name) {
            Ok(id) => {
                if let Some(object) = self.scene.get(id) {
                    self.render.create(id, object);
                }
            }
            Err(e) => {
                log::error!("Failed to add object: {}", e);
                self.notice = Some(Notice::error("Error", "Select a valid template."));
            }
        }
    }

    /// Write the scene, adding a `.json` extension when `path` has none.
    /// Returns the path actually written.
    fn save_scene(&self, path: &Path) -> Result<PathBuf> {
        let path = serialization::with_default_extension(path);
        serialization::write_scene(self.scene.snapshot(), &path)
            .with_context(|| format!("Failed to save scene to {}", path.display()))?;
        log::info!("Saved {} objects to {}", self.scene.len(), path.display());
        Ok(path)
    }

    /// Replace the scene with the file's contents. On failure the scene is untouched.
    fn load_scene(&mut self, path: &Path) -> Result<()> {
        let objects = serialization::read_scene(path)
            .with_context(|| format!("Failed to load scene from {}", path.display()))?;

        self.drag.reset();
        self.scene.replace_all(objects);
        self.render.rebuild(self.scene.iter());
        log::info!("Loaded {} objects from {}", self.scene.len(), path.display());
        Ok(())
    }

    fn export_assets(&mut self, dir: &Path) {
        let report = assets::export_assets(self.scene.snapshot(), dir);
        if report.is_clean() {
            self.notice = Some(Notice::info(
                "Export",
                format!("Project exported to {}.", dir.display()),
            ));
        } else {
            let failures: Vec<String> = report.failures.iter().map(|e| e.to_string()).collect();
            self.notice = Some(Notice::error(
                "Export",
                format!(
                    "Exported {} assets to {}, {} failed:\n{}",
                    report.exported.len(),
                    dir.display(),
                    failures.len(),
                    failures.join("\n")
                ),
            ));
        }
    }

    fn reload_templates(&mut self) -> Result<()> {
        self.templates = self.templates.reload().context("Failed to reload templates")?;
        if self.templates.get(&self.selected_template).is_none() {
            self.selected_template.clear();
        }
        self.textures.clear();
        Ok(())
    }

    /// Show the outcome of a file operation.
    fn report(&mut self, title: &str, result: Result<()>, success: &str) {
        match result {
            Ok(()) => self.notice = Some(Notice::info(title, success)),
            Err(e) => self.report_error(title, e),
        }
    }

    fn report_error(&mut self, title: &str, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.notice = Some(Notice::error(title, format!("{error:#}")));
    }

    fn file_menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if ui.button("Save Scene...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Scenes", &["json", "yaml", "yml"])
                .set_file_name(&self.config.default_scene_file)
                .save_file()
            {
                let result = self.save_scene(&path).map(|_| ());
                self.report("Save", result, "Scene saved!");
            }
            ui.close_menu();
        }
        if ui.button("Load Scene...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Scenes", &["json", "yaml", "yml"])
                .pick_file()
            {
                if let Err(e) = self.load_scene(&path) {
                    self.report_error("Load", e);
                }
            }
            ui.close_menu();
        }
        if ui.button("Export Assets...").clicked() {
            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                self.export_assets(&dir);
            }
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Save Script...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("IRL files", &["irl"])
                .set_file_name(&self.config.default_script_file)
                .save_file()
            {
                let result = script::write_script(&path, &self.script)
                    .with_context(|| format!("Failed to save script to {}", path.display()));
                self.report("Save Script", result, "Script saved!");
            }
            ui.close_menu();
        }
        if ui.button("Load Script...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("IRL files", &["irl"])
                .pick_file()
            {
                match script::read_script(&path)
                    .with_context(|| format!("Failed to load script from {}", path.display()))
                {
                    Ok(text) => self.script = text,
                    Err(e) => self.report_error("Load Script", e),
                }
            }
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Reload Templates").clicked() {
            if let Err(e) = self.reload_templates() {
                self.report_error("Templates", e);
            }
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let mut open = true;
        if let Some(notice) = &self.notice {
            egui::Window::new(notice.title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    let text = egui::RichText::new(&notice.message);
                    ui.label(if notice.is_error {
                        text.color(egui::Color32::LIGHT_RED)
                    } else {
                        text
                    });
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        open = false;
                    }
                });
        }
        if !open {
            self.notice = None;
        }
    }

    /// Feed canvas pointer actions to the drag controller, in order.
    fn handle_canvas(&mut self, actions: Vec<canvas::CanvasAction>) {
        for action in actions {
            match action {
                canvas::CanvasAction::Press(point) => {
                    self.drag.pointer_down(point, &self.scene, &self.render);
                }
                canvas::CanvasAction::Drag(point) => {
                    self.drag.pointer_move(point, &mut self.scene, &mut self.render);
                }
                canvas::CanvasAction::Release => {
                    self.drag.pointer_up();
                }
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| self.file_menu(ui, ctx));
            });
        });

        // Toolbar
        let add_clicked = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, &self.templates, &mut self.selected_template, &mut self.object_name)
            })
            .inner;
        if add_clicked {
            self.add_object();
        }

        // Script editor (bottom)
        egui::TopBottomPanel::bottom("script")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| script_panel::show(ui, &mut self.script));

        // Object list (right side)
        egui::SidePanel::right("objects")
            .default_width(250.0)
            .show(ctx, |ui| properties::show(ui, &self.scene, self.drag.selected()));

        // Scene canvas (center)
        let canvas_size = egui::Vec2::from(self.config.canvas_size);
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .show(ui, |ui| canvas::show(ui, &self.render, self.drag.state(), &mut self.textures, canvas_size))
                    .inner
            })
            .inner;
        self.handle_canvas(actions);

        self.show_notice(ctx);
    }
}
