//! Centralized theme constants for HydroTrek
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x0e, 0x14); // deep river night
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x11, 0x18, 0x22);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1c, 0x25, 0x31);
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0c, 0x1f, 0x2e); // subtle sky hover

// =============================================================================
// COLORS - Accent (Sky)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8); // sky-400
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x7d, 0xd3, 0xfc); // sky-300
pub const NAV_SELECTED: Color32 = Color32::from_rgb(0x07, 0x3b, 0x5a); // sky-900ish

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 30.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_LABEL: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.0;

/// Size for a markdown heading of the given level (1-6)
pub fn heading_size(level: u8) -> f32 {
    match level {
        1 => FONT_DISPLAY,
        2 => FONT_TITLE,
        3 => FONT_HEADING,
        4 => FONT_BODY + 1.0,
        _ => FONT_BODY,
    }
}

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const NAV_ITEM_HEIGHT: f32 = 32.0;
pub const CONTENT_MAX_WIDTH: f32 = 820.0;
pub const LIST_INDENT: f32 = 18.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_BASE;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = NAV_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(STROKE_DEFAULT, ACCENT_LIGHT);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    visuals.window_corner_radius = egui::CornerRadius::same(6);

    let border = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);
    let w = &mut visuals.widgets;
    w.noninteractive = widget(BG_ELEVATED, border, TEXT_SECONDARY);
    w.inactive = widget(Color32::TRANSPARENT, border, TEXT_SECONDARY);
    w.hovered = widget(BG_HOVER, egui::Stroke::NONE, TEXT_PRIMARY);
    w.hovered.fg_stroke.width = STROKE_MEDIUM;
    w.active = widget(BG_SURFACE, egui::Stroke::NONE, TEXT_PRIMARY);
    w.active.expansion = -1.0;
    w.open = widget(BG_SURFACE, border, TEXT_PRIMARY);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.scroll = egui::style::ScrollStyle::solid();
        style.spacing.scroll.bar_width = 6.0;
    });
}

/// Flat widget state: fill, border and text color, no expansion
fn widget(fill: Color32, border: egui::Stroke, text: Color32) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: if fill == Color32::TRANSPARENT { BG_ELEVATED } else { fill },
        bg_stroke: border,
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, text),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    }
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, 0))
}

pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::symmetric(32, SPACING_XL as i8))
}

/// Returns the fill for a custom-painted row with hover/press effects.
pub fn hover_fill(response: &egui::Response, base_fill: Color32) -> Color32 {
    if response.is_pointer_button_down_on() {
        lighten(base_fill, 0.06)
    } else if response.hovered() {
        lighten(base_fill, 0.10)
    } else {
        base_fill
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_visuals_sets_palette() {
        let ctx = egui::Context::default();
        apply_visuals(&ctx);
        let style = ctx.style();
        assert_eq!(style.visuals.panel_fill, BG_BASE);
        assert_eq!(style.visuals.hyperlink_color, ACCENT);
        assert_eq!(style.visuals.widgets.inactive.weak_bg_fill, BG_ELEVATED);
        assert_eq!(style.visuals.widgets.hovered.fg_stroke.color, TEXT_PRIMARY);
        assert!(!style.interaction.selectable_labels);
    }

    #[test]
    fn test_lighten_moves_toward_white() {
        assert_eq!(lighten(Color32::BLACK, 0.0), Color32::BLACK);
        assert!(lighten(BG_BASE, 0.10).r() > BG_BASE.r());
        assert_eq!(lighten(Color32::WHITE, 0.5), Color32::WHITE);
    }
}
