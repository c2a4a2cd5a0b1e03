// List rendering for companies, jobs, and uploads.
// Provides styled list views with empty states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::catalog::Company;
use crate::state::SelectableList;
use crate::store::UploadEntry;

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Format a byte count for display.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the company list.
pub fn render_companies(frame: &mut Frame, list: &mut SelectableList<Company>, area: Rect) {
    if list.is_empty() {
        render_empty(frame, area, "No companies configured");
        return;
    }

    let items: Vec<ListItem> = list
        .items
        .iter()
        .map(|company| {
            ListItem::new(Line::from(vec![
                Span::raw("🔒 "),
                Span::styled(&company.name, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  {} job(s)", company.jobs.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Select a Company "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}

/// Render the job list of an unlocked company.
pub fn render_jobs(
    frame: &mut Frame,
    list: &mut SelectableList<String>,
    company_name: &str,
    area: Rect,
) {
    if list.is_empty() {
        render_empty(frame, area, "No open positions");
        return;
    }

    let items: Vec<ListItem> = list
        .items
        .iter()
        .map(|job| {
            ListItem::new(Line::from(vec![
                Span::raw("💼 "),
                Span::styled(job.as_str(), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Jobs at {} ", company_name)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}

/// Render the upload list of the selected job.
pub fn render_uploads(
    frame: &mut Frame,
    list: &mut SelectableList<UploadEntry>,
    job_title: &str,
    area: Rect,
) {
    if list.is_empty() {
        render_empty(frame, area, "No CVs uploaded yet.");
        return;
    }

    let items: Vec<ListItem> = list
        .items
        .iter()
        .map(|entry| {
            let mut spans = vec![
                Span::raw("📄 "),
                Span::styled(&entry.file_name, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  {}", format_size(entry.size)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", format_relative_time(&entry.uploaded_at)),
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            // Uploads from before a restart have no bytes left to save
            if entry.content.is_none() {
                spans.push(Span::styled(
                    "  (metadata only)",
                    Style::default().fg(Color::Yellow),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Shortlisted CVs for {} ", job_title)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_format_relative_time_recent() {
        assert_eq!(format_relative_time(&Utc::now()), "just now");
    }
}
