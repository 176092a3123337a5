//! Renderer-agnostic output model.
//!
//! The screen is a list of blocks: the intro block plus whatever the last
//! dispatch appended. Blocks carry an optional announcement role (status or
//! alert) for assistive front ends, and their lines may include expandable
//! detail sections toggled by ordinal.
//!
//! Content fragments are plain text with a light line-prefix convention:
//!
//! - `➜ ` starts a prompt-styled line
//! - `- ` starts a bullet
//! - `+ ` starts a collapsible detail section titled by the rest of the
//!   line; subsequent lines indented by two spaces form its body
//! - anything else is a plain text line

use crate::Registry;

/// Announcement role of a response block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    /// Routine response content.
    Status,
    /// Error content that should interrupt.
    Alert,
}

/// A collapsible detail section inside a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    /// Summary line, always visible next to the `[+]`/`[-]` marker.
    pub summary: String,
    /// Body lines, visible only while expanded.
    pub body: Vec<String>,
    /// Current presentation state. Sections start collapsed.
    pub expanded: bool,
}

/// One visual line of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Prompt-styled line (the text carries its own `➜ ~` prefix if any).
    Prompt(String),
    /// Plain text line.
    Text(String),
    /// Bulleted line.
    Bullet(String),
    /// Expandable detail section.
    Section(DetailSection),
}

impl Line {
    /// Prompt-styled line from any string-ish value.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::Prompt(text.into())
    }
}

/// A contiguous run of output lines with one announcement role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Announcement role; `None` for intro and echoed prompt lines.
    pub role: Option<BlockRole>,
    /// Lines in display order.
    pub lines: Vec<Line>,
}

impl Block {
    /// Alert block from a single prompt-styled message.
    pub fn alert(message: impl Into<String>) -> Self {
        Self { role: Some(BlockRole::Alert), lines: vec![Line::prompt(message)] }
    }

    /// Response block for an informational command.
    ///
    /// `None` for the fragment renders the "no content available" status
    /// block; that is a content-authoring gap, not an error.
    pub fn response(command: &str, fragment: Option<&str>) -> Self {
        let lines = match fragment {
            Some(text) => parse_fragment(text),
            None => vec![Line::prompt(format!("No content available for {command}."))],
        };
        Self { role: Some(BlockRole::Status), lines }
    }
}

/// The terminal output model.
#[derive(Debug, Clone)]
pub struct Screen {
    intro: Block,
    blocks: Vec<Block>,
}

impl Screen {
    /// New screen showing the intro block for `registry`'s command set.
    pub fn new(registry: &Registry) -> Self {
        let mut screen = Self { intro: intro_block(registry), blocks: Vec::new() };
        screen.reset();
        screen
    }

    /// Reset to exactly the intro block.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.blocks.push(self.intro.clone());
    }

    /// Append an echoed prompt line for a dispatched command.
    pub fn echo_command(&mut self, command: &str) {
        self.blocks.push(Block { role: None, lines: vec![Line::prompt(format!("➜ ~ {command}"))] });
    }

    /// Append an un-announced prompt-styled message (mode toggles).
    pub fn push_note(&mut self, message: impl Into<String>) {
        self.blocks.push(Block { role: None, lines: vec![Line::prompt(message)] });
    }

    /// Append a response or alert block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Blocks in display order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Flip the `index`-th detail section (in display order, zero-based).
    ///
    /// Returns the new expanded state, or `None` if no such section is on
    /// screen.
    pub fn toggle_section(&mut self, index: usize) -> Option<bool> {
        let section = self
            .blocks
            .iter_mut()
            .flat_map(|block| block.lines.iter_mut())
            .filter_map(|line| match line {
                Line::Section(section) => Some(section),
                _ => None,
            })
            .nth(index)?;
        section.expanded = !section.expanded;
        Some(section.expanded)
    }
}

/// Parse a content fragment into display lines.
fn parse_fragment(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut open_section: Option<DetailSection> = None;

    for raw in text.lines() {
        if let Some(summary) = raw.strip_prefix("+ ") {
            if let Some(section) = open_section.take() {
                lines.push(Line::Section(section));
            }
            open_section =
                Some(DetailSection { summary: summary.to_owned(), body: Vec::new(), expanded: false });
            continue;
        }
        if let Some(section) = open_section.as_mut()
            && let Some(body_line) = raw.strip_prefix("  ")
        {
            section.body.push(body_line.to_owned());
            continue;
        }
        if let Some(section) = open_section.take() {
            lines.push(Line::Section(section));
        }
        if let Some(bullet) = raw.strip_prefix("- ") {
            lines.push(Line::Bullet(bullet.to_owned()));
        } else if raw.starts_with('➜') {
            lines.push(Line::Prompt(raw.to_owned()));
        } else {
            lines.push(Line::Text(raw.to_owned()));
        }
    }
    if let Some(section) = open_section.take() {
        lines.push(Line::Section(section));
    }
    lines
}

/// Intro block shown at startup and after every reset.
fn intro_block(registry: &Registry) -> Block {
    Block {
        role: None,
        lines: vec![
            Line::prompt("➜ ~ whoami"),
            Line::prompt("Christopher Kumar"),
            Line::Text("Engineer. Developer. Problem Solver.".to_owned()),
            Line::Text(
                "With a foundation in Computer Systems Engineering and a drive for innovation, \
                 I thrive in the intersection of AI, software development, and real-world \
                 solutions."
                    .to_owned(),
            ),
            Line::Bullet("Bachelor of Engineering (Honours) - Computer Systems".to_owned()),
            Line::Bullet("Experienced in AI, LLMs, and software engineering".to_owned()),
            Line::Bullet("Always learning, always building.".to_owned()),
            Line::prompt("➜ ~ Type a command to explore:"),
            Line::Text(registry.summary()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_exactly_the_intro() {
        let registry = Registry::default();
        let mut screen = Screen::new(&registry);
        screen.echo_command("skills");
        screen.push(Block::alert("Command \"foobar\" not found."));
        screen.reset();
        assert_eq!(screen.blocks().len(), 1);
        assert_eq!(screen.blocks()[0], intro_block(&registry));
    }

    #[test]
    fn response_without_fragment_reports_no_content() {
        let block = Block::response("skills", None);
        assert_eq!(block.role, Some(BlockRole::Status));
        assert_eq!(block.lines, vec![Line::prompt("No content available for skills.")]);
    }

    #[test]
    fn parse_fragment_line_conventions() {
        let lines = parse_fragment("Heading\n- a bullet\nplain");
        assert_eq!(
            lines,
            vec![
                Line::Text("Heading".to_owned()),
                Line::Bullet("a bullet".to_owned()),
                Line::Text("plain".to_owned()),
            ]
        );
    }

    #[test]
    fn parse_fragment_collects_section_bodies() {
        let lines = parse_fragment("+ First role\n  did things\n  did more\n+ Second role\n  other");
        assert_eq!(
            lines,
            vec![
                Line::Section(DetailSection {
                    summary: "First role".to_owned(),
                    body: vec!["did things".to_owned(), "did more".to_owned()],
                    expanded: false,
                }),
                Line::Section(DetailSection {
                    summary: "Second role".to_owned(),
                    body: vec!["other".to_owned()],
                    expanded: false,
                }),
            ]
        );
    }

    #[test]
    fn toggle_section_flips_by_ordinal() {
        let registry = Registry::default();
        let mut screen = Screen::new(&registry);
        screen.push(Block::response("experience", Some("+ First\n  a\n+ Second\n  b")));
        assert_eq!(screen.toggle_section(1), Some(true));
        assert_eq!(screen.toggle_section(1), Some(false));
        assert_eq!(screen.toggle_section(5), None);
    }
}
