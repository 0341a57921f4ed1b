//! egui implementation of the display sink

use crate::markdown::{self, LinkTarget};
use crate::sink::{Asset, DisplaySink};
use crate::theme;
use crate::ui::components::sized_image;
use eframe::egui;

pub struct EguiSink<'a> {
    ui: &'a mut egui::Ui,
    logo: Option<&'a egui::TextureHandle>,
    navigate_to: Option<LinkTarget>,
}

impl<'a> EguiSink<'a> {
    pub fn new(ui: &'a mut egui::Ui, logo: Option<&'a egui::TextureHandle>) -> Self {
        Self {
            ui,
            logo,
            navigate_to: None,
        }
    }

    /// In-app link clicked during this frame
    pub fn into_navigation(self) -> Option<LinkTarget> {
        self.navigate_to
    }
}

impl DisplaySink for EguiSink<'_> {
    fn title(&mut self, text: &str) {
        self.ui.add_space(theme::SPACING_MD);
        self.ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .size(theme::FONT_DISPLAY)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );
        self.ui.add_space(theme::SPACING_LG);
    }

    fn header(&mut self, text: &str) {
        self.ui.add_space(theme::SPACING_XL);
        self.ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .wrap(),
        );
        self.ui.separator();
    }

    fn markdown(&mut self, source: &str) {
        let blocks = markdown::parse(source);
        if let Some(target) = crate::ui::markdown::show(self.ui, &blocks) {
            self.navigate_to = Some(target);
        }
        self.ui.add_space(theme::SPACING_SM);
    }

    fn image(&mut self, asset: Asset) {
        match asset {
            Asset::Logo => {
                // Missing texture means rasterizing failed; that was logged at startup
                if let Some(texture) = self.logo {
                    let width = self.ui.available_width();
                    sized_image(self.ui, texture, width);
                    self.ui.add_space(theme::SPACING_MD);
                }
            }
        }
    }
}
