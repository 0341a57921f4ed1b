//! Reusable UI components

use crate::theme;
use eframe::egui;

/// Sidebar navigation row: icon + page name, highlighted when selected
pub fn nav_item(ui: &mut egui::Ui, icon: &str, label: &str, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), theme::NAV_ITEM_HEIGHT),
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let base = if selected { theme::NAV_SELECTED } else { theme::BG_ELEVATED };

        if selected || response.hovered() {
            painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::hover_fill(&response, base));
        }
        if selected {
            // Accent bar on the left edge
            let bar = egui::Rect::from_min_size(rect.min, egui::vec2(3.0, rect.height()));
            painter.rect_filled(bar, 1.5, theme::ACCENT);
        }

        let (icon_color, text_color) = if selected {
            (theme::ACCENT_LIGHT, theme::TEXT_PRIMARY)
        } else {
            (theme::TEXT_DIM, theme::TEXT_MUTED)
        };
        painter.text(
            rect.left_center() + egui::vec2(14.0, 0.0),
            egui::Align2::LEFT_CENTER,
            icon,
            egui::FontId::proportional(theme::FONT_BODY + 1.0),
            icon_color,
        );
        painter.text(
            rect.left_center() + egui::vec2(38.0, 0.0),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(theme::FONT_LABEL),
            text_color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Small dim uppercase caption above a group of widgets
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}

/// Draw a texture scaled to `width`, keeping its aspect ratio
pub fn sized_image(ui: &mut egui::Ui, texture: &egui::TextureHandle, width: f32) -> egui::Response {
    let [w, h] = texture.size();
    let aspect = h as f32 / w.max(1) as f32;
    ui.image(egui::load::SizedTexture::new(
        texture.id(),
        egui::vec2(width, width * aspect),
    ))
}
