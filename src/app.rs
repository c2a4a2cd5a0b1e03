// App state and main event loop.
// Manages tabs, the drill-down session, modals, and keyboard input handling.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::catalog::Catalog;
use crate::picker::PickerState;
use crate::state::{ConsoleState, Screen, SessionState};
use crate::store::UploadStore;
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Listings,
    Console,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Listings => "Listings",
            Tab::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Listings => Tab::Console,
            Tab::Console => Tab::Listings,
        }
    }
}

/// Modal currently covering the listings view.
#[derive(Debug)]
pub enum Modal {
    /// Password prompt for the company at `company_index`.
    Password { company_index: usize, input: String },
    /// File picker for the current job.
    Picker(PickerState),
}

/// Main application state.
pub struct App {
    /// Drill-down screen and selection state, seeded from the injected catalog.
    pub session: SessionState,
    /// Per-job upload lists, mirrored to disk.
    pub store: UploadStore,
    /// In-app activity log.
    pub console: ConsoleState,
    /// Currently active tab.
    pub active_tab: Tab,
    /// Open modal, if any.
    pub modal: Option<Modal>,
    /// Set while the last password attempt failed.
    pub password_error: bool,
    /// One-line message shown in the status bar until the next key press.
    pub flash: Option<String>,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Directory the picker browses and exports land in.
    pub working_dir: PathBuf,
}

impl App {
    pub fn new(catalog: Catalog, store: UploadStore, working_dir: PathBuf) -> Self {
        Self {
            session: SessionState::new(&catalog),
            store,
            console: ConsoleState::new(),
            active_tab: Tab::default(),
            modal: None,
            password_error: false,
            flash: None,
            show_help: false,
            should_quit: false,
            working_dir,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        if self.modal.is_some() {
            self.handle_modal_key(code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.active_tab = self.active_tab.next();
                if self.active_tab == Tab::Console {
                    self.console.mark_viewed();
                }
            }
            _ => match self.active_tab {
                Tab::Listings => self.handle_listings_key(code),
                Tab::Console => self.handle_console_key(code),
            },
        }
    }

    fn handle_listings_key(&mut self, code: KeyCode) {
        self.flash = None;
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.session.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.session.select_next(),
            KeyCode::Esc => {
                self.session.go_back();
            }
            KeyCode::Enter => self.activate_selection(),
            KeyCode::Char('u') => self.open_picker(),
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected_upload(),
            KeyCode::Char('o') => self.export_selected_upload(),
            _ => {}
        }
    }

    fn handle_console_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.console.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.console.select_next(),
            _ => {}
        }
    }

    /// Route a key press to the open modal. Esc cancels, Enter confirms.
    fn handle_modal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.modal = None;
                return;
            }
            KeyCode::Enter => {
                self.confirm_modal();
                return;
            }
            _ => {}
        }

        match &mut self.modal {
            Some(Modal::Password { input, .. }) => match code {
                KeyCode::Char(c) => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                _ => {}
            },
            Some(Modal::Picker(picker)) => {
                let mut filter_err = None;
                match code {
                    KeyCode::Up | KeyCode::Char('k') => picker.select_prev(),
                    KeyCode::Down | KeyCode::Char('j') => picker.select_next(),
                    KeyCode::Char(' ') => picker.toggle_marked(),
                    KeyCode::Char('a') => filter_err = picker.toggle_filter().err(),
                    _ => {}
                }
                if let Some(err) = filter_err {
                    self.console.log_error(format!("Could not list files: {err}"));
                }
            }
            None => {}
        }
    }

    fn confirm_modal(&mut self) {
        match self.modal.take() {
            Some(Modal::Password {
                company_index,
                input,
            }) => self.submit_password(company_index, &input),
            Some(Modal::Picker(picker)) => self.confirm_picker(picker),
            None => {}
        }
    }

    /// Enter on a list row: open the password prompt, drill into the
    /// selected job, or (on the uploads screen) open the file picker.
    fn activate_selection(&mut self) {
        match self.session.current_screen().clone() {
            Screen::Companies => {
                if let Some(company_index) = self.session.companies.selected() {
                    self.modal = Some(Modal::Password {
                        company_index,
                        input: String::new(),
                    });
                }
            }
            Screen::Jobs { .. } => {
                if let Some(title) = self.session.jobs.selected_item().cloned() {
                    self.session.enter_uploads(title);
                    self.refresh_uploads();
                }
            }
            Screen::Uploads { .. } => self.open_picker(),
        }
    }

    /// Check the entered password against the chosen company. An exact,
    /// case-sensitive match unlocks the job list; anything else stays on
    /// the company list with the error flag set. No lockout, no counter.
    fn submit_password(&mut self, company_index: usize, entered: &str) {
        let Some(company) = self.session.companies.items.get(company_index).cloned() else {
            return;
        };

        if company.check_password(entered) {
            self.password_error = false;
            self.flash = None;
            self.session.enter_jobs(&company);
        } else {
            self.password_error = true;
            self.flash = Some("Incorrect password! Please try again.".to_string());
            self.console
                .log_warn(format!("Password mismatch for {}", company.name));
        }
    }

    fn open_picker(&mut self) {
        if self.session.current_job().is_none() {
            return;
        }
        match PickerState::open(self.working_dir.clone()) {
            Ok(picker) => self.modal = Some(Modal::Picker(picker)),
            Err(err) => {
                self.flash = Some(format!("Could not open file picker: {err}"));
                self.console.log_error(format!(
                    "Could not list {}: {err}",
                    self.working_dir.display()
                ));
            }
        }
    }

    /// Append the picked files to the current job's upload list.
    fn confirm_picker(&mut self, picker: PickerState) {
        let Some(job) = self.session.current_job() else {
            return;
        };

        let (files, warnings) = picker.pick();
        for warning in warnings {
            self.console.log_warn(warning);
        }
        if files.is_empty() {
            return;
        }

        let count = files.len();
        if let Err(err) = self.store.add(&job, files) {
            self.console
                .log_error(format!("Could not persist uploads: {err}"));
        }
        self.console
            .log_info(format!("Added {count} CV(s) for {}", job.title));
        self.refresh_uploads();
    }

    fn remove_selected_upload(&mut self) {
        let Some(job) = self.session.current_job() else {
            return;
        };
        let Some(index) = self.session.uploads.selected() else {
            return;
        };

        let name = self.session.uploads.items[index].file_name.clone();
        if let Err(err) = self.store.remove(&job, index) {
            self.console
                .log_error(format!("Could not persist removal: {err}"));
        }
        self.console
            .log_info(format!("Removed {name} from {}", job.title));
        self.refresh_uploads();
        self.session.uploads.select_clamped(index);
    }

    /// Copy the selected upload's bytes into the working directory, the
    /// terminal stand-in for a download link. Bytes uploaded before a
    /// restart are gone; only the metadata row remains, so this reports
    /// the gap instead of writing an empty file.
    fn export_selected_upload(&mut self) {
        let Some(job) = self.session.current_job() else {
            return;
        };
        let Some(index) = self.session.uploads.selected() else {
            return;
        };

        match self.store.export(&job, index, &self.working_dir) {
            Ok(path) => {
                self.flash = Some(format!("Saved {}", path.display()));
                self.console.log_info(format!("Exported {}", path.display()));
            }
            Err(err) => {
                self.flash = Some(err.to_string());
                self.console.log_error(err.to_string());
            }
        }
    }

    /// Mirror the store's list for the current job into the session list.
    fn refresh_uploads(&mut self) {
        if let Some(job) = self.session.current_job() {
            self.session
                .uploads
                .set_items(self.store.uploads(&job).to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Company;
    use crate::store::UploadEntry;

    fn app_with(catalog: Catalog) -> App {
        App::new(catalog, UploadStore::in_memory(), PathBuf::from("."))
    }

    #[test]
    fn test_password_gate_for_every_company() {
        let mut app = app_with(Catalog::builtin());

        for company_index in 0..app.session.companies.items.len() {
            let company = app.session.companies.items[company_index].clone();

            // Wrong password stays on the company list with the flag set
            app.submit_password(company_index, "wrong");
            assert!(app.password_error);
            assert_eq!(*app.session.current_screen(), Screen::Companies);

            // Exact match unlocks the job list and clears the flag
            app.submit_password(company_index, &company.password);
            assert!(!app.password_error);
            assert_eq!(app.session.jobs.items, company.jobs);

            assert!(app.session.go_back());
        }
    }

    #[test]
    fn test_password_modal_key_flow() {
        let mut app = app_with(Catalog::builtin());

        app.handle_key(KeyCode::Enter);
        assert!(matches!(app.modal, Some(Modal::Password { .. })));

        for c in "cosybv".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);

        assert!(app.modal.is_none());
        assert!(matches!(app.session.current_screen(), Screen::Jobs { .. }));
    }

    #[test]
    fn test_escape_cancels_password_modal() {
        let mut app = app_with(Catalog::builtin());

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('c'));
        app.handle_key(KeyCode::Esc);

        assert!(app.modal.is_none());
        assert!(!app.password_error);
        assert_eq!(*app.session.current_screen(), Screen::Companies);
    }

    #[test]
    fn test_cosy_bv_scenario() {
        let catalog = Catalog::new(vec![Company::new(
            1,
            "Cosy BV",
            "cosybv",
            &["Full stack developer"],
        )]);
        let mut app = app_with(catalog);

        app.submit_password(0, "cosybv");
        assert_eq!(app.session.jobs.items, ["Full stack developer"]);

        app.session.enter_uploads("Full stack developer".to_string());
        app.refresh_uploads();
        // Rendered as "No CVs uploaded yet."
        assert!(app.session.uploads.is_empty());

        let job = app.session.current_job().unwrap();
        app.store
            .add(
                &job,
                vec![
                    UploadEntry::new("a.pdf", b"a".to_vec()),
                    UploadEntry::new("b.pdf", b"b".to_vec()),
                ],
            )
            .unwrap();
        app.refresh_uploads();
        let names: Vec<&str> = app
            .session
            .uploads
            .items
            .iter()
            .map(|e| e.file_name.as_str())
            .collect();
        assert_eq!(names, ["a.pdf", "b.pdf"]);

        app.session.uploads.select_clamped(0);
        app.remove_selected_upload();
        let names: Vec<&str> = app
            .session
            .uploads
            .items
            .iter()
            .map(|e| e.file_name.as_str())
            .collect();
        assert_eq!(names, ["b.pdf"]);
    }

    #[test]
    fn test_remove_on_empty_list_is_a_no_op() {
        let mut app = app_with(Catalog::builtin());
        app.submit_password(0, "cosybv");
        app.session.enter_uploads("Full stack developer".to_string());
        app.refresh_uploads();

        app.handle_key(KeyCode::Char('x'));
        assert!(app.session.uploads.is_empty());
    }

    #[test]
    fn test_tab_switch_clears_console_badge() {
        let mut app = app_with(Catalog::builtin());
        app.console.log_warn("something");
        assert_eq!(app.console.unread, 1);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Console);
        assert_eq!(app.console.unread, 0);
    }
}
