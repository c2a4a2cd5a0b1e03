// Modal UI components.
// Password prompt and file picker dialogs rendered on top of the current view.

use ratatui::{prelude::*, widgets::*};

use crate::picker::PickerState;

use super::list::format_size;

/// Draw the password prompt for a company.
pub fn draw_password_modal(frame: &mut Frame, company_name: &str, input: &str) {
    let area = frame.area();

    let modal_width = 50;
    let modal_height = 5;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and input
            Constraint::Length(2), // Instructions
        ])
        .split(modal_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Enter the password for {} ", company_name));

    // Entered characters are masked, never echoed
    let masked = "•".repeat(input.chars().count());
    let input_line = Line::from(vec![
        Span::styled("Password: ", Style::default().fg(Color::DarkGray)),
        Span::raw(masked),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);

    let input_widget = Paragraph::new(input_line).block(input_block);
    frame.render_widget(input_widget, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Unlock  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[1]);
}

/// Draw the file picker on top of the uploads view.
pub fn draw_picker_modal(frame: &mut Frame, picker: &mut PickerState) {
    let area = frame.area();

    let modal_width = 60;
    let modal_height = 18;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // File list
            Constraint::Length(2), // Instructions
        ])
        .split(modal_area);

    let filter = if picker.pdf_only { ".pdf only" } else { "all files" };
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Upload CVs [{}] ", filter));

    if picker.entries.is_empty() {
        let empty_text = Paragraph::new(format!("No matching files in {}", picker.dir.display()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(list_block);
        frame.render_widget(empty_text, chunks[0]);
    } else {
        let items: Vec<ListItem> = picker
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mark = if picker.marked.contains(&i) {
                    "[x]"
                } else {
                    "[ ]"
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", mark), Style::default().fg(Color::Yellow)),
                    Span::styled(&entry.name, Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  {}", format_size(entry.size)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list_widget = List::new(items)
            .block(list_block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list_widget, chunks[0], &mut picker.list_state);
    }

    let instructions = Line::from(vec![
        Span::styled(" Space", Style::default().fg(Color::Yellow)),
        Span::styled(" = Mark  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" = Upload  ", Style::default().fg(Color::DarkGray)),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::styled(" = Filter  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
    ]);

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[1]);
}
