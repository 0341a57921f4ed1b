//! App module - contains the main application state and logic

mod navigation;
mod views;

pub use navigation::Navigator;

use crate::markdown::LinkTarget;
use crate::pages::PageRegistry;
use crate::settings::Settings;
use crate::theme;
use crate::utils::rasterize_logo;
use eframe::egui;
use tracing::{debug, warn};

/// Logo raster width; displayed sizes are scaled down from this
const LOGO_RASTER_WIDTH: u32 = 960;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) nav: Navigator,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) logo_failed: bool,
    pub(crate) show_sidebar_logo: bool,
    pub(crate) scroll_to_top: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            nav: Navigator::new(PageRegistry::new(), settings.start_page.as_deref()),
            logo_texture: None,
            logo_failed: false,
            show_sidebar_logo: settings.show_sidebar_logo,
            scroll_to_top: false,
        }
    }

    /// Rasterize and upload the logo once; later frames reuse the texture
    pub(crate) fn ensure_logo(&mut self, ctx: &egui::Context) {
        if self.logo_texture.is_some() || self.logo_failed {
            return;
        }
        match rasterize_logo(LOGO_RASTER_WIDTH) {
            Ok(raster) => {
                debug!(width = raster.width, height = raster.height, "Logo rasterized");
                self.logo_texture = Some(ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied(
                        [raster.width as usize, raster.height as usize],
                        &raster.pixels,
                    ),
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(e) => {
                warn!(error = %e, "Failed to rasterize logo, continuing without it");
                self.logo_failed = true;
            }
        }
    }

    /// Apply a selection from the sidebar or an in-app link
    pub(crate) fn select_page(&mut self, name: &str) {
        match self.nav.select(name) {
            Ok(true) => self.scroll_to_top = true,
            Ok(false) => {}
            Err(e) => warn!(page = e.name(), "Ignoring selection of unknown page"),
        }
    }

    /// Follow a clicked in-app link
    pub(crate) fn follow_link(&mut self, target: &LinkTarget) {
        match target {
            LinkTarget::Page(name) => self.select_page(name),
            LinkTarget::Anchor(anchor) => {
                let resolved = self.nav.registry().resolve_anchor(anchor).map(|e| e.name);
                match resolved {
                    Ok(name) => self.select_page(name),
                    Err(e) => warn!(anchor = e.name(), "Ignoring link to unknown page anchor"),
                }
            }
            LinkTarget::External(url) => debug!(url = %url, "External link left to the platform"),
        }
    }
}
