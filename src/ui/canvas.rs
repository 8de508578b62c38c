// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene canvas.
//!
//! Paints the render surface and turns raw pointer input into canvas-local
//! press, drag and release actions for the drag controller.

use crate::interaction::drag::DragState;
use crate::io::media;
use crate::render::surface::{Primitive, PrimitiveKind};
use crate::render::sync::RenderSync;
use crate::util::geometry::Point;
use std::collections::HashMap;
use std::path::Path;

/// Pointer input on the canvas, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    Press(Point),
    Drag(Point),
    Release,
}

const BODY_COLOR: egui::Color32 = egui::Color32::BLUE;
const LABEL_COLOR: egui::Color32 = egui::Color32::WHITE;
const LABEL_FONT_SIZE: f32 = 12.0;
const SELECTION_COLOR: egui::Color32 = egui::Color32::YELLOW;
const HINT_COLOR: egui::Color32 = egui::Color32::GRAY;

/// Textures for image-backed objects, keyed by path and pixel size.
///
/// Failed decodes are remembered as `None` so they are not retried every frame.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<(String, u32, u32), Option<egui::TextureHandle>>,
}

impl TextureCache {
    fn get(&mut self, ctx: &egui::Context, path: &str, width: f64, height: f64) -> Option<&egui::TextureHandle> {
        let (w, h) = media::pixel_size(width, height);
        self.entries
            .entry((path.to_string(), w, h))
            .or_insert_with(|| match media::load_scaled_image(Path::new(path), w, h) {
                Ok(img) => {
                    let size = [img.width as usize, img.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
                    Some(ctx.load_texture(path, color_image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    log::warn!("Cannot display image {}: {}, drawing a rectangle instead", path, e);
                    None
                }
            })
            .as_ref()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Body primitive of the object being dragged, if any.
fn dragged_body(render: &RenderSync, drag: DragState) -> Option<&Primitive> {
    let DragState::Dragging { object, .. } = drag else {
        return None;
    };
    let pair = render.pair(object)?;
    render.surface().get(pair.body)
}

/// One-line summary shown under the canvas.
pub fn status_line(render: &RenderSync, drag: DragState) -> String {
    let primitives = render.surface().len();
    match drag {
        DragState::Dragging { object, offset } => format!(
            "Dragging object {} (grab offset {:.0}, {:.0}) | {} primitives",
            object.0, offset.x, offset.y, primitives
        ),
        DragState::Idle => format!("Idle | {} primitives", primitives),
    }
}

/// Display the canvas and collect this frame's pointer actions.
pub fn show(
    ui: &mut egui::Ui,
    render: &RenderSync,
    drag: DragState,
    textures: &mut TextureCache,
    canvas_size: egui::Vec2,
) -> Vec<CanvasAction> {
    let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
    let origin = response.rect.min;
    let to_screen = |p: Point| origin + egui::vec2(p.x as f32, p.y as f32);
    let to_canvas = |p: egui::Pos2| Point::new((p.x - origin.x) as f64, (p.y - origin.y) as f64);

    painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);

    let ctx = ui.ctx().clone();
    for primitive in render.surface().iter() {
        let rect = egui::Rect::from_center_size(
            to_screen(primitive.center),
            egui::vec2(primitive.width as f32, primitive.height as f32),
        );
        match &primitive.kind {
            PrimitiveKind::Rectangle => {
                painter.rect_filled(rect, 0.0, BODY_COLOR);
            }
            PrimitiveKind::Image { path } => {
                if let Some(texture) = textures.get(&ctx, path, primitive.width, primitive.height) {
                    painter.image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                } else {
                    painter.rect_filled(rect, 0.0, BODY_COLOR);
                }
            }
            PrimitiveKind::Label { text } => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(LABEL_FONT_SIZE),
                    LABEL_COLOR,
                );
            }
        }
    }

    if let Some(body) = dragged_body(render, drag) {
        let rect = egui::Rect::from_center_size(
            to_screen(body.center),
            egui::vec2(body.width as f32, body.height as f32),
        );
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, SELECTION_COLOR));
    }

    if render.surface().is_empty() {
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "Pick a template and press Add Object",
            egui::FontId::proportional(16.0),
            HINT_COLOR,
        );
    }

    ui.label(egui::RichText::new(status_line(render, drag)).small().weak());

    let mut actions = Vec::new();
    let (pressed, released, press_origin) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.press_origin(),
        )
    });

    if pressed && response.hovered() {
        if let Some(pos) = press_origin {
            actions.push(CanvasAction::Press(to_canvas(pos)));
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            actions.push(CanvasAction::Drag(to_canvas(pos)));
        }
    }
    if released {
        actions.push(CanvasAction::Release);
    }

    actions
}
