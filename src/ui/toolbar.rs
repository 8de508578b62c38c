// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Template picker and object creation toolbar.

use crate::io::templates::TemplateStore;

/// Display the toolbar. Returns true when "Add Object" was clicked.
pub fn show(
    ui: &mut egui::Ui,
    templates: &TemplateStore,
    selected_template: &mut String,
    object_name: &mut String,
) -> bool {
    let mut add_clicked = false;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Template:");
        let selected_text = if selected_template.is_empty() {
            "Select a template"
        } else {
            selected_template.as_str()
        };
        egui::ComboBox::from_id_source("template_picker")
            .selected_text(selected_text.to_string())
            .show_ui(ui, |ui| {
                for name in templates.names() {
                    let response = ui.selectable_value(selected_template, name.to_string(), name);
                    if response.changed() {
                        // Offer the template name as the default object name
                        *object_name = name.to_string();
                    }
                }
            });

        ui.separator();

        ui.label("Name:");
        ui.add(
            egui::TextEdit::singleline(object_name)
                .hint_text("Object name")
                .desired_width(160.0),
        );

        if ui.button("Add Object").clicked() {
            add_clicked = true;
        }

        ui.separator();

        let summary = if templates.is_empty() {
            "No templates found".to_string()
        } else {
            format!("{} templates", templates.len())
        };
        ui.label(egui::RichText::new(summary).italics().weak());
    });

    add_clicked
}
