//! Core domain types: employee records and the roster they live in.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffQueryError};

// ---------------------------------------------------------------------------
// EmployeeId
// ---------------------------------------------------------------------------

/// Integer employee identifier, unique within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A single employee record. Never mutated once placed in a [`Roster`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Department label ("IT", "HR", "Finance", ...).
    pub dept: String,
    /// Non-negative salary amount.
    pub salary: f64,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>, dept: impl Into<String>, salary: f64) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            dept: dept.into(),
            salary,
        }
    }
}

/// Formats a money amount with the rupee sign and at least one fractional digit.
pub fn format_amount(amount: f64) -> String {
    format!("₹{amount:?}")
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} ({}) : {}",
            self.id,
            self.name,
            self.dept,
            format_amount(self.salary)
        )
    }
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// An ordered, read-only sequence of employees. This is the `roster.json` shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Build a roster, rejecting data that breaks the record invariants.
    pub fn new(employees: Vec<Employee>) -> Result<Self> {
        let roster = Self { employees };
        roster.validate()?;
        Ok(roster)
    }

    /// Salaries must be finite and non-negative; ids must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.employees.len());
        for employee in &self.employees {
            if !employee.salary.is_finite() || employee.salary < 0.0 {
                return Err(StaffQueryError::validation(format!(
                    "employee {} has invalid salary {}",
                    employee.id, employee.salary
                )));
            }
            if !seen.insert(employee.id) {
                return Err(StaffQueryError::validation(format!(
                    "duplicate employee id {}",
                    employee.id
                )));
            }
        }
        Ok(())
    }

    /// Decode and validate a roster from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let roster: Self = serde_json::from_str(json)
            .map_err(|e| StaffQueryError::parse(format!("invalid roster JSON: {e}")))?;
        roster.validate()?;
        Ok(roster)
    }

    /// Load a roster from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StaffQueryError::io(path, e))?;
        let roster = Self::from_json_str(&content).map_err(|e| match e {
            StaffQueryError::Parse { message } => {
                StaffQueryError::parse(format!("{}: {message}", path.display()))
            }
            other => other,
        })?;
        tracing::debug!(?path, employees = roster.len(), "roster loaded");
        Ok(roster)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_display_matches_console_format() {
        let e = Employee::new(1, "Rohit", "IT", 50000.0);
        assert_eq!(e.to_string(), "1 - Rohit (IT) : ₹50000.0");
    }

    #[test]
    fn format_amount_keeps_fraction() {
        assert_eq!(format_amount(310000.0), "₹310000.0");
        assert_eq!(format_amount(61666.5), "₹61666.5");
    }

    #[test]
    fn employee_id_displays_bare_number() {
        assert_eq!(EmployeeId(42).to_string(), "42");
    }

    #[test]
    fn roster_rejects_negative_salary() {
        let err = Roster::new(vec![Employee::new(1, "A", "IT", -1.0)]).unwrap_err();
        assert!(err.to_string().contains("invalid salary"));
    }

    #[test]
    fn roster_rejects_nan_salary() {
        assert!(Roster::new(vec![Employee::new(1, "A", "IT", f64::NAN)]).is_err());
    }

    #[test]
    fn roster_rejects_duplicate_ids() {
        let err = Roster::new(vec![
            Employee::new(7, "A", "IT", 1.0),
            Employee::new(7, "B", "HR", 2.0),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate employee id 7"));
    }

    #[test]
    fn empty_roster_is_valid() {
        let roster = Roster::new(vec![]).expect("empty roster");
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn roster_json_shape() {
        let json = r#"{"employees":[{"id":3,"name":"Amit","dept":"IT","salary":60000}]}"#;
        let roster = Roster::from_json_str(json).expect("decode roster");
        assert_eq!(roster.employees()[0].id, EmployeeId(3));
        assert_eq!(roster.employees()[0].salary, 60000.0);

        let encoded = serde_json::to_string(&roster).expect("serialize");
        assert!(encoded.contains(r#""id":3"#));
    }

    #[test]
    fn roster_json_errors_are_parse_errors() {
        let err = Roster::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, StaffQueryError::Parse { .. }));
    }

    #[test]
    fn roster_fixture_validates() {
        let path = Path::new("../../../fixtures/json/roster.fixture.json");
        let roster = Roster::load(path).expect("load fixture roster");
        assert_eq!(roster.len(), 6);
        assert_eq!(roster.employees()[0].name, "Rohit");
        assert_eq!(roster.employees()[5].dept, "HR");
    }

    #[test]
    fn missing_roster_file_is_io_error() {
        let err = Roster::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, StaffQueryError::Io { .. }));
    }
}
