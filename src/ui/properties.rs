// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene object list.
//!
//! A read-only overview of every placed object, highlighting the one
//! currently being dragged.

use crate::models::object::ObjectId;
use crate::models::scene::Scene;

pub fn show(ui: &mut egui::Ui, scene: &Scene, selected: Option<ObjectId>) {
    ui.heading("Objects");
    ui.separator();

    if scene.is_empty() {
        ui.label(egui::RichText::new("No objects yet").weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (id, object) in scene.iter() {
            let text = format!(
                "{}: {} [{}]  ({:.0}, {:.0})",
                id.0, object.name, object.template_type, object.x, object.y
            );
            let mut rich = egui::RichText::new(text).monospace();
            if selected == Some(id) {
                rich = rich.strong().color(egui::Color32::LIGHT_BLUE);
            }
            ui.label(rich);
        }
    });
}
