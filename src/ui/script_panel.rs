// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Script editor panel.

pub fn show(ui: &mut egui::Ui, script: &mut String) {
    ui.label(egui::RichText::new("Script").strong());
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(script)
                .code_editor()
                .desired_rows(10)
                .desired_width(f32::INFINITY),
        );
    });
}
