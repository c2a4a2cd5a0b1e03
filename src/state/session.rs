// Drill-down session state.
// Tracks the screen stack and per-screen list selection.

use ratatui::widgets::ListState;

use crate::catalog::{Catalog, Company, JobKey};
use crate::store::UploadEntry;

use super::navigation::{Screen, ScreenStack};

/// A list of items with keyboard-driven selection.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub items: Vec<T>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the items and reset the selection to the first row.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.list_state
            .select(if self.items.is_empty() { None } else { Some(0) });
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Get the selected item.
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.list_state.selected()?)
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    i // Stay at end
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Move the selection to `index`, clamped to the list bounds.
    pub fn select_clamped(&mut self, index: usize) {
        if self.items.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(index.min(self.items.len() - 1)));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Complete drill-down state for one session.
///
/// Selections are transient: they are rebuilt each run and going back
/// clears everything below the screen that was left, so a selected job
/// can never outlive its company.
#[derive(Debug)]
pub struct SessionState {
    /// Screen stack for the breadcrumb trail.
    pub nav: ScreenStack,
    /// Company list (first screen).
    pub companies: SelectableList<Company>,
    /// Job titles of the unlocked company.
    pub jobs: SelectableList<String>,
    /// Uploads of the selected job, mirrored from the store.
    pub uploads: SelectableList<UploadEntry>,
}

impl SessionState {
    pub fn new(catalog: &Catalog) -> Self {
        let mut companies = SelectableList::new();
        companies.set_items(catalog.companies.clone());
        Self {
            nav: ScreenStack::new(),
            companies,
            jobs: SelectableList::new(),
            uploads: SelectableList::new(),
        }
    }

    pub fn current_screen(&self) -> &Screen {
        self.nav.current()
    }

    /// The job whose uploads are on screen, if any.
    pub fn current_job(&self) -> Option<JobKey> {
        self.nav.current().job_key()
    }

    /// Drill into the job list of an unlocked company.
    pub fn enter_jobs(&mut self, company: &Company) {
        self.nav.push(Screen::Jobs {
            company_id: company.id,
            company_name: company.name.clone(),
        });
        self.jobs.set_items(company.jobs.clone());
    }

    /// Drill into the upload list of the selected job.
    /// No-op unless the job list is the current screen.
    pub fn enter_uploads(&mut self, job_title: String) {
        let Screen::Jobs {
            company_id,
            company_name,
        } = self.nav.current().clone()
        else {
            return;
        };
        self.nav.push(Screen::Uploads {
            company_id,
            company_name,
            job_title,
        });
    }

    /// Navigate back (Escape key). Returns false if already at the
    /// company list. Clears the selection data below the screen we left.
    pub fn go_back(&mut self) -> bool {
        let current = self.nav.current().clone();
        let popped = self.nav.pop();

        if popped {
            match current {
                Screen::Jobs { .. } => {
                    self.jobs = SelectableList::new();
                    self.uploads = SelectableList::new();
                }
                Screen::Uploads { .. } => {
                    self.uploads = SelectableList::new();
                }
                Screen::Companies => {}
            }
        }
        popped
    }

    /// Handle up arrow key.
    pub fn select_prev(&mut self) {
        match self.nav.current() {
            Screen::Companies => self.companies.select_prev(),
            Screen::Jobs { .. } => self.jobs.select_prev(),
            Screen::Uploads { .. } => self.uploads.select_prev(),
        }
    }

    /// Handle down arrow key.
    pub fn select_next(&mut self) {
        match self.nav.current() {
            Screen::Companies => self.companies.select_next(),
            Screen::Jobs { .. } => self.jobs.select_next(),
            Screen::Uploads { .. } => self.uploads.select_next(),
        }
    }
}
