//! Display sink - where rendered page content goes
//!
//! Page renderers only know this trait. The egui implementation lives in
//! `ui::page_view`; tests use [`RecordingSink`].

/// Static assets embedded in the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Logo,
}

/// Write-only presentation surface
pub trait DisplaySink {
    fn title(&mut self, text: &str);
    fn header(&mut self, text: &str);
    fn markdown(&mut self, source: &str);
    fn image(&mut self, asset: Asset);
}

#[cfg(test)]
pub use recording::{Block, RecordingSink};

#[cfg(test)]
mod recording {
    use super::{Asset, DisplaySink};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Block {
        Title(String),
        Header(String),
        Markdown(String),
        Image(Asset),
    }

    /// Captures everything written to it, in order
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub blocks: Vec<Block>,
    }

    impl RecordingSink {
        pub fn titles(&self) -> Vec<&str> {
            self.blocks
                .iter()
                .filter_map(|b| match b {
                    Block::Title(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn headers(&self) -> Vec<&str> {
            self.blocks
                .iter()
                .filter_map(|b| match b {
                    Block::Header(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        /// All text emitted, joined, for substring assertions
        pub fn text(&self) -> String {
            self.blocks
                .iter()
                .filter_map(|b| match b {
                    Block::Title(t) | Block::Header(t) | Block::Markdown(t) => Some(t.as_str()),
                    Block::Image(_) => None,
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    impl DisplaySink for RecordingSink {
        fn title(&mut self, text: &str) {
            self.blocks.push(Block::Title(text.to_string()));
        }

        fn header(&mut self, text: &str) {
            self.blocks.push(Block::Header(text.to_string()));
        }

        fn markdown(&mut self, source: &str) {
            self.blocks.push(Block::Markdown(source.to_string()));
        }

        fn image(&mut self, asset: Asset) {
            self.blocks.push(Block::Image(asset));
        }
    }
}
