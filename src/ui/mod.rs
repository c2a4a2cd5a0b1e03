// UI module for rendering the TUI.
// Contains widgets for tabs, breadcrumbs, lists, and modal dialogs.

mod breadcrumb;
mod list;
mod modal;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Modal, Tab};
use crate::state::{ConsoleLevel, Screen};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Length(2), // Breadcrumb
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Tab bar
    tabs::draw_tabs(frame, app, chunks[0]);

    // Breadcrumb (for the Listings tab)
    match app.active_tab {
        Tab::Listings => {
            let breadcrumbs = app.session.nav.breadcrumbs();
            breadcrumb::draw_breadcrumb(frame, &breadcrumbs, chunks[1]);
        }
        Tab::Console => {
            let block = Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(block, chunks[1]);
        }
    }

    // Main content area
    draw_content(frame, app, chunks[2]);

    // Status bar
    draw_status_bar(frame, app, chunks[3]);

    // Modal, if open (rendered on top of the content)
    match &mut app.modal {
        Some(Modal::Password {
            company_index,
            input,
        }) => {
            let company_name = app
                .session
                .companies
                .items
                .get(*company_index)
                .map(|company| company.name.as_str())
                .unwrap_or("");
            modal::draw_password_modal(frame, company_name, input);
        }
        Some(Modal::Picker(picker)) => modal::draw_picker_modal(frame, picker),
        None => {}
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Listings => draw_listings_tab(frame, app, area),
        Tab::Console => draw_console_tab(frame, app, area),
    }
}

/// Draw the Listings tab for the current screen.
fn draw_listings_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.session.current_screen().clone() {
        Screen::Companies => {
            // The error flag from the last failed unlock attempt stays
            // visible on the company list until a password matches.
            let list_area = if app.password_error {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(1)])
                    .split(area);
                let warning = Paragraph::new("Incorrect password! Please try again.")
                    .style(Style::default().fg(Color::Red));
                frame.render_widget(warning, chunks[0]);
                chunks[1]
            } else {
                area
            };
            list::render_companies(frame, &mut app.session.companies, list_area);
        }
        Screen::Jobs { company_name, .. } => {
            list::render_jobs(frame, &mut app.session.jobs, &company_name, area);
        }
        Screen::Uploads { job_title, .. } => {
            list::render_uploads(frame, &mut app.session.uploads, &job_title, area);
        }
    }
}

/// Draw the Console tab with the activity log.
fn draw_console_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Console ");

    if app.console.messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
    } else {
        let items: Vec<ListItem> = app
            .console
            .messages
            .iter()
            .map(|msg| {
                let (icon, color) = match msg.level {
                    ConsoleLevel::Error => ("❌", Color::Red),
                    ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                    ConsoleLevel::Info => ("ℹ️", Color::Cyan),
                };

                let time = list::format_relative_time(&msg.timestamp);

                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", icon)),
                    Span::styled(time, Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                    Span::styled(msg.message.clone(), Style::default().fg(color)),
                ]))
            })
            .collect();

        let list_widget = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list_widget, area, &mut app.console.list_state);
    }
}

/// Draw the status bar with keybinding hints or the current flash message.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(flash) = &app.flash {
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {flash}"),
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(status, area);
        return;
    }

    let on_uploads = app.active_tab == Tab::Listings
        && matches!(app.session.current_screen(), Screen::Uploads { .. });

    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Select", Style::default().fg(Color::DarkGray)),
        Span::raw("  Esc "),
        Span::styled("Back", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
    ];

    if on_uploads {
        hints.extend([
            Span::raw("  u "),
            Span::styled("Upload", Style::default().fg(Color::DarkGray)),
            Span::raw("  x "),
            Span::styled("Remove", Style::default().fg(Color::DarkGray)),
            Span::raw("  o "),
            Span::styled("Save copy", Style::default().fg(Color::DarkGray)),
        ]);
    }

    hints.extend([
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 55;
    let popup_height = 17;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑/↓ or j/k    ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate list"),
        ]),
        Line::from(vec![
            Span::styled("  Enter         ", Style::default().fg(Color::Cyan)),
            Span::raw("Select / drill down"),
        ]),
        Line::from(vec![
            Span::styled("  Esc           ", Style::default().fg(Color::Cyan)),
            Span::raw("Go back / close help"),
        ]),
        Line::from(vec![
            Span::styled("  Tab           ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch tabs"),
        ]),
        Line::from(vec![
            Span::styled("  u             ", Style::default().fg(Color::Cyan)),
            Span::raw("Upload CVs (uploads screen)"),
        ]),
        Line::from(vec![
            Span::styled("  x or Del      ", Style::default().fg(Color::Cyan)),
            Span::raw("Remove selected CV"),
        ]),
        Line::from(vec![
            Span::styled("  o             ", Style::default().fg(Color::Cyan)),
            Span::raw("Save a copy of selected CV"),
        ]),
        Line::from(vec![
            Span::styled("  Space         ", Style::default().fg(Color::Cyan)),
            Span::raw("Mark file (picker)"),
        ]),
        Line::from(vec![
            Span::styled("  a             ", Style::default().fg(Color::Cyan)),
            Span::raw("Toggle PDF filter (picker)"),
        ]),
        Line::from(vec![
            Span::styled("  ?             ", Style::default().fg(Color::Cyan)),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("  q             ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
