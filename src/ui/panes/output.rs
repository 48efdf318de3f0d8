//! Output pane rendering

use crate::console::{LineKind, OutputLog};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Plain => Style::default().fg(DEFAULT_THEME.fg),
        LineKind::Heading => Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
        LineKind::Success => Style::default().fg(DEFAULT_THEME.success),
        LineKind::Warning => Style::default().fg(DEFAULT_THEME.warning),
        LineKind::Error => Style::default().fg(DEFAULT_THEME.error),
    }
}

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &OutputLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = output.len();
    // Account for borders, min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = output
        .lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(line.text.as_str()).style(line_style(line.kind)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
