//! Markdown copy -> flat block/span model for the egui sink

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Run of text with uniform styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    /// Link destination, as written
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Number(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdBlock {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    ListItem { depth: usize, marker: ListMarker, spans: Vec<Span> },
}

/// Where a clicked link should take the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Another dashboard page, named by the link text (`[Contact Us](#)`)
    Page(String),
    /// Another dashboard page, by anchor (`[dashboard](#water-quality-trends)`)
    Anchor(String),
    External(String),
}

pub fn classify_link(dest: &str, text: &str) -> LinkTarget {
    match dest.strip_prefix('#') {
        _ if dest.is_empty() => LinkTarget::Page(text.trim().to_string()),
        Some("") => LinkTarget::Page(text.trim().to_string()),
        Some(anchor) => LinkTarget::Anchor(anchor.to_string()),
        None => LinkTarget::External(dest.to_string()),
    }
}

/// Strip blank edges and the indentation shared by all non-blank lines
pub fn dedent(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(start);
    let body = &lines[start..=end];

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| if l.trim().is_empty() { "" } else { &l[indent..] })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn parse(source: &str) -> Vec<MdBlock> {
    let text = dedent(source);
    let mut builder = Builder::default();
    for event in Parser::new(&text) {
        builder.push(event);
    }
    builder.finish()
}

#[derive(Default)]
struct Builder {
    blocks: Vec<MdBlock>,
    spans: Vec<Span>,
    strong: usize,
    emphasis: usize,
    link: Option<String>,
    heading: Option<u8>,
    // Next number for ordered lists, None for bullets
    lists: Vec<Option<u64>>,
    item: Option<(usize, ListMarker)>,
    // Next text starts a new span even if styling matches
    break_span: bool,
    // A loose list item paragraph ended; separate it from the next one
    paragraph_gap: bool,
}

impl Builder {
    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_item();
                self.heading = Some(level as u8);
            }
            Event::End(TagEnd::Heading(_)) => {
                let level = self.heading.take().unwrap_or(1);
                let spans = std::mem::take(&mut self.spans);
                self.blocks.push(MdBlock::Heading { level, spans });
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::CodeBlock) => {
                // Paragraphs inside a loose list item stay with the item
                if self.item.is_none() {
                    self.flush_paragraph();
                } else if !self.spans.is_empty() {
                    self.paragraph_gap = true;
                }
            }
            Event::Start(Tag::List(first)) => {
                self.flush_item();
                self.lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                self.lists.pop();
            }
            Event::Start(Tag::Item) => {
                self.flush_item();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = ListMarker::Number(*n);
                        *n += 1;
                        marker
                    }
                    _ => ListMarker::Bullet,
                };
                self.item = Some((depth, marker));
            }
            Event::End(TagEnd::Item) => self.flush_item(),
            Event::Start(Tag::Strong) => self.strong += 1,
            Event::End(TagEnd::Strong) => self.strong = self.strong.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.emphasis += 1,
            Event::End(TagEnd::Emphasis) => self.emphasis = self.emphasis.saturating_sub(1),
            Event::Start(Tag::Link { dest_url, .. }) => {
                self.link = Some(dest_url.to_string());
                self.break_span = true;
            }
            Event::End(TagEnd::Link) => {
                self.link = None;
                self.break_span = true;
            }
            Event::Text(text) | Event::Code(text) => self.push_text(&text),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push_text("\n"),
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if std::mem::take(&mut self.paragraph_gap) {
            self.break_span = true;
            self.push_text("\n");
        }
        let strong = self.strong > 0;
        let emphasis = self.emphasis > 0;
        let break_span = std::mem::take(&mut self.break_span);
        if let Some(last) = self.spans.last_mut().filter(|_| !break_span) {
            if last.strong == strong && last.emphasis == emphasis && last.link == self.link {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span {
            text: text.to_string(),
            strong,
            emphasis,
            link: self.link.clone(),
        });
    }

    fn flush_paragraph(&mut self) {
        if !self.spans.is_empty() {
            let spans = std::mem::take(&mut self.spans);
            self.blocks.push(MdBlock::Paragraph(spans));
        }
    }

    fn flush_item(&mut self) {
        self.paragraph_gap = false;
        match self.item.take() {
            Some((depth, marker)) => {
                if !self.spans.is_empty() {
                    let spans = std::mem::take(&mut self.spans);
                    self.blocks.push(MdBlock::ListItem { depth, marker, spans });
                }
            }
            None => self.flush_paragraph(),
        }
    }

    fn finish(mut self) -> Vec<MdBlock> {
        self.flush_item();
        self.blocks
    }
}
