//! Sidebar and page panel rendering

use super::App;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::theme;
use crate::ui::components::{nav_item, section_label, sized_image};
use crate::ui::page_view::EguiSink;
use eframe::egui;
use tracing::warn;

impl App {
    pub(crate) fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        let avail_w = ui.available_width();

        ui.add_space(20.0);
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            if self.show_sidebar_logo {
                if let Some(texture) = &self.logo_texture {
                    sized_image(ui, texture, avail_w * 0.5);
                    ui.add_space(theme::SPACING_SM);
                }
            }
            ui.add(
                egui::Label::new(
                    egui::RichText::new(APP_NAME.to_uppercase())
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        });
        ui.add_space(theme::SPACING_XL);

        section_label(ui, "CHOOSE A PAGE");
        ui.add_space(theme::SPACING_SM);

        let current = self.nav.current();
        let mut clicked = None;
        ui.spacing_mut().item_spacing.y = 2.0;
        for entry in self.nav.registry().entries() {
            if nav_item(ui, entry.icon, entry.name, entry.name == current).clicked() {
                clicked = Some(entry.name);
            }
        }
        if let Some(name) = clicked {
            self.select_page(name);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(theme::SPACING_LG);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "v{}  •  {} to switch pages",
                        APP_VERSION,
                        egui_phosphor::regular::ARROWS_DOWN_UP
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        });
    }

    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui) {
        let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_to_top) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let nav = &self.nav;
        let logo = self.logo_texture.as_ref();
        let navigate = scroll
            .show(ui, |ui| {
                ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                let mut sink = EguiSink::new(ui, logo);
                if let Err(e) = nav.render(&mut sink) {
                    warn!(error = %e, "Current page failed to render");
                }
                let navigate = sink.into_navigation();
                ui.add_space(theme::SPACING_XL);
                navigate
            })
            .inner;

        if let Some(target) = navigate {
            self.follow_link(&target);
        }
    }
}
