//! Menu pane rendering

use crate::ui::menu::{MenuCommand, MENU};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the command menu with the selected entry highlighted
pub fn render_menu_pane(frame: &mut Frame, area: Rect, selected: usize, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Inventory Management System ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = MENU
        .iter()
        .enumerate()
        .map(|(i, command)| menu_item(*command, i == selected))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn menu_item(command: MenuCommand, is_selected: bool) -> ListItem<'static> {
    let marker = if is_selected { "▶ " } else { "  " };
    let mut label_style = Style::default().fg(DEFAULT_THEME.fg);
    if command == MenuCommand::Exit {
        label_style = label_style.fg(DEFAULT_THEME.comment);
    }

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.border_focused)),
        Span::styled(
            format!("{:>2}. ", command.number()),
            Style::default().fg(DEFAULT_THEME.number),
        ),
        Span::styled(command.label(), label_style),
    ]);

    let item = ListItem::new(line);
    if is_selected {
        item.style(
            Style::default()
                .bg(DEFAULT_THEME.selected_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        item
    }
}
