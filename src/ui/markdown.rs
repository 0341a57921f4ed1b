//! Draws parsed markdown blocks with egui widgets

use crate::markdown::{classify_link, LinkTarget, ListMarker, MdBlock, Span};
use crate::theme;
use eframe::egui;

/// Draw `blocks`; returns the target of a clicked in-app link.
///
/// External links are handed to the platform opener directly.
pub fn show(ui: &mut egui::Ui, blocks: &[MdBlock]) -> Option<LinkTarget> {
    let mut navigate = None;
    for block in blocks {
        let clicked = match block {
            MdBlock::Heading { level, spans } => {
                ui.add_space(theme::SPACING_MD);
                show_spans(ui, spans, theme::heading_size(*level), true)
            }
            MdBlock::Paragraph(spans) => show_spans(ui, spans, theme::FONT_BODY, false),
            MdBlock::ListItem { depth, marker, spans } => {
                ui.horizontal_top(|ui| {
                    ui.add_space(theme::LIST_INDENT * *depth as f32 + theme::SPACING_SM);
                    let marker = match marker {
                        ListMarker::Bullet => "•".to_string(),
                        ListMarker::Number(n) => format!("{}.", n),
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(marker)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                    ui.vertical(|ui| show_spans(ui, spans, theme::FONT_BODY, false))
                        .inner
                })
                .inner
            }
        };
        if clicked.is_some() {
            navigate = clicked;
        }
    }
    navigate
}

fn show_spans(ui: &mut egui::Ui, spans: &[Span], size: f32, bold: bool) -> Option<LinkTarget> {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        let mut navigate = None;

        for span in spans {
            let mut text = egui::RichText::new(&span.text)
                .size(size)
                .color(theme::TEXT_SECONDARY);
            if span.strong || bold {
                text = text.strong().color(theme::TEXT_PRIMARY);
            }
            if span.emphasis {
                text = text.italics();
            }

            let Some(dest) = &span.link else {
                ui.label(text);
                continue;
            };
            let response = ui.link(text.color(theme::ACCENT));
            match classify_link(dest, &span.text) {
                LinkTarget::External(url) => {
                    if response.on_hover_text(url.as_str()).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                    }
                }
                target => {
                    if response.clicked() {
                        navigate = Some(target);
                    }
                }
            }
        }
        navigate
    })
    .inner
}
