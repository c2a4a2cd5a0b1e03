// Navigation state management.
// Handles the screen stack for the company -> job -> uploads drill-down.

use crate::catalog::JobKey;

/// The active screen in the drill-down hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Top level: pick a company.
    Companies,
    /// Job listings for an unlocked company.
    Jobs { company_id: u32, company_name: String },
    /// Uploaded CVs for one job.
    Uploads {
        company_id: u32,
        company_name: String,
        job_title: String,
    },
}

impl Screen {
    /// Breadcrumb label for this screen.
    pub fn label(&self) -> String {
        match self {
            Screen::Companies => "Companies".to_string(),
            Screen::Jobs { company_name, .. } => company_name.clone(),
            Screen::Uploads { job_title, .. } => job_title.clone(),
        }
    }

    /// The job shown on this screen, if any.
    pub fn job_key(&self) -> Option<JobKey> {
        match self {
            Screen::Uploads {
                company_id,
                job_title,
                ..
            } => Some(JobKey::new(*company_id, job_title.clone())),
            _ => None,
        }
    }
}

/// Screen stack (bottom = company list, top = current screen).
#[derive(Debug, Clone)]
pub struct ScreenStack {
    stack: Vec<Screen>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Companies],
        }
    }

    /// Get the current screen.
    pub fn current(&self) -> &Screen {
        self.stack.last().expect("Stack should never be empty")
    }

    /// Push a new screen onto the stack (drill down).
    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Pop the current screen (go back). Returns false if at root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Check if we can go back (not at the company list).
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<String> {
        self.stack.iter().map(|screen| screen.label()).collect()
    }

    /// Get the depth of the screen stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_stack() {
        let mut nav = ScreenStack::default();

        assert_eq!(nav.depth(), 1);
        assert!(!nav.can_go_back());

        nav.push(Screen::Jobs {
            company_id: 1,
            company_name: "Cosy BV".to_string(),
        });
        assert_eq!(nav.depth(), 2);
        assert!(nav.can_go_back());

        nav.push(Screen::Uploads {
            company_id: 1,
            company_name: "Cosy BV".to_string(),
            job_title: "Full stack developer".to_string(),
        });
        assert_eq!(nav.depth(), 3);

        // Pop back to jobs
        assert!(nav.pop());
        assert_eq!(nav.depth(), 2);

        // Pop back to companies
        assert!(nav.pop());
        assert_eq!(nav.depth(), 1);

        // Can't pop past the company list
        assert!(!nav.pop());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_breadcrumbs() {
        let mut nav = ScreenStack::default();
        nav.push(Screen::Jobs {
            company_id: 1,
            company_name: "Cosy BV".to_string(),
        });
        nav.push(Screen::Uploads {
            company_id: 1,
            company_name: "Cosy BV".to_string(),
            job_title: "Full stack developer".to_string(),
        });

        let breadcrumbs = nav.breadcrumbs();
        assert_eq!(breadcrumbs.len(), 3);
        assert_eq!(breadcrumbs[0], "Companies");
        assert_eq!(breadcrumbs[1], "Cosy BV");
        assert_eq!(breadcrumbs[2], "Full stack developer");
    }

    #[test]
    fn test_job_key_only_on_uploads_screen() {
        assert!(Screen::Companies.job_key().is_none());
        assert!(
            Screen::Jobs {
                company_id: 2,
                company_name: "company2".to_string(),
            }
            .job_key()
            .is_none()
        );

        let key = Screen::Uploads {
            company_id: 2,
            company_name: "company2".to_string(),
            job_title: "Data Scientist".to_string(),
        }
        .job_key()
        .unwrap();
        assert_eq!(key, JobKey::new(2, "Data Scientist"));
    }
}
