//! The built-in six-employee roster and roster source resolution.

use std::path::Path;

use tracing::{debug, instrument};

use staffquery_shared::{Employee, Result, Roster};

/// The sample roster queried when no roster file is configured.
///
/// The records below have distinct ids and finite non-negative salaries, so
/// validation always succeeds; `sample_has_six_employees` guards that.
pub fn sample_roster() -> Roster {
    Roster::new(vec![
        Employee::new(1, "Rohit", "IT", 50000.0),
        Employee::new(2, "Ankit", "HR", 40000.0),
        Employee::new(3, "Amit", "IT", 60000.0),
        Employee::new(4, "Sneha", "Finance", 45000.0),
        Employee::new(5, "Nina", "IT", 75000.0),
        Employee::new(6, "John", "HR", 40000.0),
    ])
    .expect("sample roster has unique ids and non-negative salaries")
}

/// Load the roster from `path`, or fall back to [`sample_roster`].
#[instrument(skip_all, fields(path = ?path))]
pub fn load_roster(path: Option<&Path>) -> Result<Roster> {
    match path {
        Some(path) => Roster::load(path),
        None => {
            debug!("no roster file configured, using sample roster");
            Ok(sample_roster())
        }
    }
}
