//! Prompt line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input prompt.
///
/// `title` names the command being filled in (or the menu itself), `prompt`
/// is the question being asked and `input` what has been typed so far.
pub fn render_prompt(frame: &mut Frame, area: Rect, title: &str, prompt: &str, input: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary));

    let line = Line::from(vec![
        Span::styled(
            format!("{}: ", prompt),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("█", Style::default().fg(DEFAULT_THEME.comment)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
