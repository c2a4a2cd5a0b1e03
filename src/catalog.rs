// Company and job catalog.
// The catalog is injected at startup so tests can substitute their own table.

use serde::{Deserialize, Serialize};

/// A company with password-gated job listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub name: String,
    pub password: String,
    pub jobs: Vec<String>,
}

impl Company {
    pub fn new(id: u32, name: &str, password: &str, jobs: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            password: password.to_string(),
            jobs: jobs.iter().map(|job| job.to_string()).collect(),
        }
    }

    /// Case-sensitive equality against the stored password.
    /// A placeholder gate, not a security mechanism.
    pub fn check_password(&self, entered: &str) -> bool {
        entered == self.password
    }
}

/// Identity of a job listing. Titles are not unique across companies,
/// so a job is identified by (company, title).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobKey {
    pub company_id: u32,
    pub title: String,
}

impl JobKey {
    pub fn new(company_id: u32, title: impl Into<String>) -> Self {
        Self {
            company_id,
            title: title.into(),
        }
    }

    /// Key under which this job's uploads are persisted.
    pub fn storage_key(&self) -> String {
        format!("{}::{}", self.company_id, self.title)
    }
}

/// The full set of companies shown on the first screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub companies: Vec<Company>,
}

impl Catalog {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// The built-in demo table: 3 companies, 2 jobs each.
    pub fn builtin() -> Self {
        Self::new(vec![
            Company::new(
                1,
                "Cosy BV",
                "cosybv",
                &["Full stack developer", "Community facilitator"],
            ),
            Company::new(
                2,
                "company2",
                "microsoft456",
                &["Data Scientist", "UX Designer"],
            ),
            Company::new(
                3,
                "company3",
                "amazon789",
                &["Cloud Engineer", "Business Analyst"],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_password_is_exact_and_case_sensitive() {
        let company = Company::new(1, "Cosy BV", "cosybv", &["Full stack developer"]);

        assert!(company.check_password("cosybv"));
        assert!(!company.check_password("CosyBV"));
        assert!(!company.check_password("cosybv "));
        assert!(!company.check_password(""));
    }

    #[test]
    fn test_storage_key_disambiguates_companies() {
        let a = JobKey::new(1, "Full stack developer");
        let b = JobKey::new(2, "Full stack developer");

        assert_eq!(a.storage_key(), "1::Full stack developer");
        assert_ne!(a.storage_key(), b.storage_key());
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.companies.len(), 3);
        for company in &catalog.companies {
            assert_eq!(company.jobs.len(), 2);
            assert!(!company.password.is_empty());
        }
    }
}
