//! Page router - the fixed set of dashboard pages and dispatch by name

mod content;

use crate::error::UnknownPageError;
use crate::sink::DisplaySink;
use std::fmt;
use std::str::FromStr;

/// Writes one page's content to a sink
pub type Renderer = fn(&mut dyn DisplaySink);

/// Every page the dashboard knows about, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Homepage,
    WaterQualityTrends,
    PollutionInsights,
    SafetyIndicators,
    ForecastPredictions,
    ContactUs,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Homepage,
        Page::WaterQualityTrends,
        Page::PollutionInsights,
        Page::SafetyIndicators,
        Page::ForecastPredictions,
        Page::ContactUs,
    ];

    /// Display label, also the selection key
    pub fn name(self) -> &'static str {
        match self {
            Page::Homepage => "Homepage",
            Page::WaterQualityTrends => "Water Quality Trends",
            Page::PollutionInsights => "Pollution Insights",
            Page::SafetyIndicators => "Safety Indicators",
            Page::ForecastPredictions => "Forecast & Predictions",
            Page::ContactUs => "Contact Us",
        }
    }

    /// Fragment used by in-app links, e.g. `#water-quality-trends`
    pub fn anchor(self) -> &'static str {
        match self {
            Page::Homepage => "homepage",
            Page::WaterQualityTrends => "water-quality-trends",
            Page::PollutionInsights => "pollution-insights",
            Page::SafetyIndicators => "safety-indicators",
            Page::ForecastPredictions => "forecast-predictions",
            Page::ContactUs => "contact-us",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Homepage => egui_phosphor::regular::HOUSE,
            Page::WaterQualityTrends => egui_phosphor::regular::CHART_LINE,
            Page::PollutionInsights => egui_phosphor::regular::FACTORY,
            Page::SafetyIndicators => egui_phosphor::regular::SHIELD_CHECK,
            Page::ForecastPredictions => egui_phosphor::regular::CLOUD_SUN,
            Page::ContactUs => egui_phosphor::regular::ADDRESS_BOOK,
        }
    }

    fn renderer(self) -> Renderer {
        match self {
            Page::Homepage => content::homepage,
            Page::WaterQualityTrends => content::water_quality_trends,
            Page::PollutionInsights => content::pollution_insights,
            Page::SafetyIndicators => content::safety_indicators,
            Page::ForecastPredictions => content::forecast_predictions,
            Page::ContactUs => content::contact_us,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match on the display name
impl FromStr for Page {
    type Err = UnknownPageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPageError(s.to_string()))
    }
}

/// A named page paired with its render function
#[derive(Clone, Copy)]
pub struct PageEntry {
    pub page: Page,
    pub name: &'static str,
    pub icon: &'static str,
    renderer: Renderer,
}

impl PageEntry {
    fn for_page(page: Page) -> Self {
        Self {
            page,
            name: page.name(),
            icon: page.icon(),
            renderer: page.renderer(),
        }
    }
}

impl fmt::Debug for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageEntry")
            .field("page", &self.page)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable collection of all pages.
///
/// Built once at startup. There are no mutators, so the menu order and
/// the name set are fixed for the lifetime of the value.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            entries: Page::ALL.into_iter().map(PageEntry::for_page).collect(),
        }
    }

    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Page names in display order
    pub fn list_page_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// First entry, used when nothing has been selected yet
    pub fn default_entry(&self) -> &PageEntry {
        &self.entries[0]
    }

    pub fn resolve(&self, name: &str) -> Result<&PageEntry, UnknownPageError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| UnknownPageError(name.to_string()))
    }

    /// Lookup by link anchor; the error carries the anchor
    pub fn resolve_anchor(&self, anchor: &str) -> Result<&PageEntry, UnknownPageError> {
        self.entries
            .iter()
            .find(|e| e.page.anchor() == anchor)
            .ok_or_else(|| UnknownPageError(anchor.to_string()))
    }

    /// Render the page called `name` into `sink`.
    ///
    /// The name is resolved before anything is written, so an unknown
    /// selection leaves the sink untouched.
    pub fn render(
        &self,
        name: &str,
        sink: &mut dyn DisplaySink,
    ) -> Result<&PageEntry, UnknownPageError> {
        let entry = self.resolve(name)?;
        (entry.renderer)(sink);
        Ok(entry)
    }

    /// Entry `delta` places away from `name`, clamped to the first/last page
    pub fn step(&self, name: &str, delta: isize) -> Result<&PageEntry, UnknownPageError> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| UnknownPageError(name.to_string()))?;
        let last = self.entries.len() as isize - 1;
        let target = (pos as isize + delta).clamp(0, last) as usize;
        Ok(&self.entries[target])
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Asset, Block, RecordingSink};
    use std::collections::HashSet;

    const EXPECTED_ORDER: [&str; 6] = [
        "Homepage",
        "Water Quality Trends",
        "Pollution Insights",
        "Safety Indicators",
        "Forecast & Predictions",
        "Contact Us",
    ];

    fn expected_title(page: Page) -> &'static str {
        match page {
            Page::Homepage => "Welcome to HydroTrek",
            other => other.name(),
        }
    }

    #[test]
    fn test_list_page_names_order() {
        let registry = PageRegistry::new();
        assert_eq!(registry.list_page_names(), EXPECTED_ORDER);
    }

    #[test]
    fn test_list_page_names_idempotent() {
        let registry = PageRegistry::new();
        let first = registry.list_page_names();
        for _ in 0..5 {
            assert_eq!(registry.list_page_names(), first);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let registry = PageRegistry::new();
        let names: HashSet<_> = registry.list_page_names().into_iter().collect();
        assert_eq!(names.len(), registry.entries().len());
    }

    #[test]
    fn test_render_every_registered_page() {
        let registry = PageRegistry::new();
        for name in registry.list_page_names() {
            let mut sink = RecordingSink::default();
            let entry = registry.render(name, &mut sink).expect("registered page");
            assert_eq!(entry.name, name);
            // One title per render means the renderer ran exactly once
            assert_eq!(sink.titles(), vec![expected_title(entry.page)]);
        }
    }

    #[test]
    fn test_render_maps_to_own_renderer() {
        let registry = PageRegistry::new();
        let mut seen = HashSet::new();
        for page in Page::ALL {
            let mut sink = RecordingSink::default();
            registry.render(page.name(), &mut sink).unwrap();
            assert!(seen.insert(sink.text()), "{} shares content with another page", page);
        }
    }

    #[test]
    fn test_render_unknown_page_emits_nothing() {
        let registry = PageRegistry::new();
        let mut sink = RecordingSink::default();
        let err = registry.render("Water Quality", &mut sink).unwrap_err();
        assert_eq!(err, UnknownPageError("Water Quality".to_string()));
        assert!(sink.blocks.is_empty());
    }

    #[test]
    fn test_render_homepage_overview() {
        let registry = PageRegistry::new();
        let mut sink = RecordingSink::default();
        registry.render("Homepage", &mut sink).unwrap();

        assert_eq!(
            sink.headers(),
            vec!["Overview of the App", "User Guide", "Getting Started Guide"]
        );
        assert!(sink.blocks.contains(&Block::Image(Asset::Logo)));
        let text = sink.text();
        assert!(text.contains("Track real-time water quality trends"));
        assert!(text.contains("**1. Recreational Users (Swimmers, Paddlers, Boaters)**"));
        assert!(text.contains("**7. Policy Makers and Urban Planners**"));
    }

    #[test]
    fn test_render_safety_indicators() {
        let registry = PageRegistry::new();
        let mut sink = RecordingSink::default();
        let entry = registry.render("Safety Indicators", &mut sink).unwrap();
        assert_eq!(entry.page, Page::SafetyIndicators);
        let text = sink.text();
        assert!(text.contains("algae blooms and toxins"));
        assert!(!sink.blocks.contains(&Block::Image(Asset::Logo)));
    }

    #[test]
    fn test_render_empty_name() {
        let registry = PageRegistry::new();
        let mut sink = RecordingSink::default();
        let err = registry.render("", &mut sink).unwrap_err();
        assert_eq!(err.name(), "");
        assert!(sink.blocks.is_empty());
    }

    #[test]
    fn test_render_is_case_sensitive() {
        let registry = PageRegistry::new();
        let mut sink = RecordingSink::default();
        let err = registry.render("homepage", &mut sink).unwrap_err();
        assert_eq!(err, UnknownPageError("homepage".to_string()));
        assert_eq!(err.to_string(), "Page 'homepage' not found");
    }

    #[test]
    fn test_registry_unchanged_after_renders() {
        let registry = PageRegistry::new();
        let before = registry.list_page_names();
        let mut sink = RecordingSink::default();
        for name in EXPECTED_ORDER.iter().chain(["nope", ""].iter()) {
            let _ = registry.render(name, &mut sink);
        }
        assert_eq!(registry.list_page_names(), before);
    }

    #[test]
    fn test_resolve_anchor() {
        let registry = PageRegistry::new();
        assert_eq!(
            registry.resolve_anchor("water-quality-trends").unwrap().page,
            Page::WaterQualityTrends
        );
        assert_eq!(
            registry.resolve_anchor("Water Quality Trends").unwrap_err(),
            UnknownPageError("Water Quality Trends".to_string())
        );
    }

    #[test]
    fn test_every_link_in_copy_resolves() {
        use crate::markdown::{classify_link, parse, LinkTarget, MdBlock};

        let registry = PageRegistry::new();
        for page in Page::ALL {
            let mut sink = RecordingSink::default();
            registry.render(page.name(), &mut sink).unwrap();
            for block in &sink.blocks {
                let Block::Markdown(source) = block else { continue };
                for md in parse(source) {
                    let spans = match md {
                        MdBlock::Heading { spans, .. }
                        | MdBlock::Paragraph(spans)
                        | MdBlock::ListItem { spans, .. } => spans,
                    };
                    for span in spans {
                        let Some(dest) = &span.link else { continue };
                        match classify_link(dest, &span.text) {
                            LinkTarget::Page(name) => assert!(registry.resolve(&name).is_ok(), "{}", name),
                            LinkTarget::Anchor(anchor) => {
                                assert!(registry.resolve_anchor(&anchor).is_ok(), "{}", anchor)
                            }
                            LinkTarget::External(url) => assert!(url.starts_with("mailto:")),
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_default_entry_is_homepage() {
        let registry = PageRegistry::new();
        assert_eq!(registry.default_entry().page, Page::Homepage);
    }

    #[test]
    fn test_step_clamps_at_ends() {
        let registry = PageRegistry::new();
        assert_eq!(registry.step("Homepage", -1).unwrap().page, Page::Homepage);
        assert_eq!(
            registry.step("Homepage", 1).unwrap().page,
            Page::WaterQualityTrends
        );
        assert_eq!(registry.step("Contact Us", 1).unwrap().page, Page::ContactUs);
        assert_eq!(
            registry.step("Contact Us", -2).unwrap().page,
            Page::SafetyIndicators
        );
        assert!(registry.step("Unknown", 1).is_err());
    }

    #[test]
    fn test_page_from_str() {
        assert_eq!("Contact Us".parse::<Page>(), Ok(Page::ContactUs));
        assert_eq!(
            "contact us".parse::<Page>(),
            Err(UnknownPageError("contact us".to_string()))
        );
        for page in Page::ALL {
            assert_eq!(page.to_string().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PageRegistry>();
    }
}
