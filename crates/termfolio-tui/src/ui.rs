//! Ratatui rendering of the core screen model.
//!
//! One output viewport anchored to the bottom (new blocks are always
//! visible, matching the original's scroll-to-bottom on dispatch) above a
//! single-line prompt. The light theme repaints the palette; dark is the
//! terminal's own colors.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};
use termfolio_core::{App, BlockRole, screen};

/// Marker shown next to a collapsed detail section.
const COLLAPSED: &str = "[+] ";
/// Marker shown next to an expanded detail section.
const EXPANDED: &str = "[-] ";

/// Draw one frame.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let base = base_style(app);
    let [output_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    draw_output(frame, output_area, app, base);
    draw_input(frame, input_area, app, base);
}

fn base_style(app: &App) -> Style {
    if app.theme().is_light() {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default()
    }
}

fn prompt_style(base: Style) -> Style {
    base.fg(Color::Green).add_modifier(Modifier::BOLD)
}

fn draw_output(frame: &mut Frame<'_>, area: Rect, app: &App, base: Style) {
    let mut lines: Vec<Line<'_>> = Vec::new();

    for block in app.screen().blocks() {
        let block_style = match block.role {
            Some(BlockRole::Alert) => base.fg(Color::Red),
            Some(BlockRole::Status) | None => base,
        };
        for line in &block.lines {
            match line {
                screen::Line::Prompt(text) => {
                    let style = match block.role {
                        Some(BlockRole::Alert) => block_style.add_modifier(Modifier::BOLD),
                        _ => prompt_style(base),
                    };
                    lines.push(Line::styled(text.clone(), style));
                },
                screen::Line::Text(text) => lines.push(Line::styled(text.clone(), block_style)),
                screen::Line::Bullet(text) => lines.push(Line::from(vec![
                    Span::styled("  • ", block_style),
                    Span::styled(text.clone(), block_style),
                ])),
                screen::Line::Section(section) => {
                    let marker = if section.expanded { EXPANDED } else { COLLAPSED };
                    lines.push(Line::from(vec![
                        Span::styled(marker, base.fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                        Span::styled(section.summary.clone(), base.fg(Color::Cyan)),
                    ]));
                    if section.expanded {
                        for body_line in &section.body {
                            lines.push(Line::styled(format!("    {body_line}"), block_style));
                        }
                    }
                },
            }
        }
    }

    // Bottom-anchor once the output outgrows the viewport.
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let offset = total.saturating_sub(area.height);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(base)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, app: &App, base: Style) {
    let line = Line::from(vec![
        Span::styled("➜ ~ ", prompt_style(base)),
        Span::styled(app.input().buffer().to_owned(), base),
        Span::styled(" ", base.add_modifier(Modifier::REVERSED)),
    ]);
    frame.render_widget(Paragraph::new(line).style(base), area);
}
