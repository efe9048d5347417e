//! The fixed report: every query in order, collected into a serializable [`Report`].

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use staffquery_shared::{Employee, Roster};

use crate::query::{self, SalaryPredicate};

/// Parameters for the fixed query sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    /// Condition for the "high earners" filter.
    pub high_earner: SalaryPredicate,
    /// N for the top-N / skip-N pair.
    pub page_size: usize,
    /// Department for the filter-and-collect query.
    pub department: String,
    /// Condition every employee is checked against.
    pub all_condition: SalaryPredicate,
    /// Condition at least one employee is checked against.
    pub any_condition: SalaryPredicate,
}

impl Default for ReportPlan {
    fn default() -> Self {
        Self {
            high_earner: SalaryPredicate::Above(45000.0),
            page_size: 2,
            department: "IT".into(),
            all_condition: SalaryPredicate::Above(30000.0),
            any_condition: SalaryPredicate::Above(70000.0),
        }
    }
}

/// A complete run of the plan over one roster.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub employee_count: usize,
    pub sections: Vec<Section>,
}

/// One query result with its heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

/// The shape of a query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Employees(Vec<Employee>),
    Names(Vec<String>),
    Groups(IndexMap<String, Vec<Employee>>),
    Averages(IndexMap<String, f64>),
    Flag(bool),
    /// `None` means the roster was empty and there is no such employee.
    Employee(Option<Employee>),
    Amount(f64),
}

impl Section {
    fn new(title: impl Into<String>, body: SectionBody) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

impl Report {
    /// Look up a section by its title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

fn owned(employees: Vec<&Employee>) -> Vec<Employee> {
    employees.into_iter().cloned().collect()
}

/// "30k" for whole thousands, the plain amount otherwise.
fn short_amount(amount: f64) -> String {
    if amount >= 1000.0 && amount % 1000.0 == 0.0 {
        format!("{}k", amount / 1000.0)
    } else {
        format!("{amount}")
    }
}

fn condition_label(prefix: &str, condition: SalaryPredicate) -> String {
    match condition {
        SalaryPredicate::Above(amount) => format!("{prefix} earn >{}?", short_amount(amount)),
        SalaryPredicate::AtMost(amount) => format!("{prefix} earn <={}?", short_amount(amount)),
    }
}

fn extremal(title: &str, found: Option<&Employee>) -> Section {
    if found.is_none() {
        warn!(query = title, "no result, roster is empty");
    }
    Section::new(title, SectionBody::Employee(found.cloned()))
}

/// Run every query of `plan` against `roster`, in the fixed order.
#[instrument(skip_all, fields(employees = roster.len()))]
pub fn run_report(roster: &Roster, plan: &ReportPlan) -> Report {
    let employees = roster.employees();
    let n = plan.page_size;

    debug!(
        high_earner = %plan.high_earner,
        all_condition = %plan.all_condition,
        any_condition = %plan.any_condition,
        department = %plan.department,
        page_size = n,
        "running report plan"
    );

    let sections = vec![
        Section::new(
            "High earners",
            SectionBody::Employees(owned(query::filter(employees, |e| {
                plan.high_earner.test(e)
            }))),
        ),
        Section::new("Employee Names", SectionBody::Names(query::names(employees))),
        Section::new(
            "Sorted by salary",
            SectionBody::Employees(owned(query::sorted_by_salary_desc(employees))),
        ),
        Section::new(
            format!("Top {n} Salaries"),
            SectionBody::Employees(owned(query::top_by_salary(employees, n))),
        ),
        Section::new(
            format!("Skip Top {n} Salaries"),
            SectionBody::Employees(owned(query::skip_by_salary(employees, n))),
        ),
        Section::new(
            format!("List of {} Employees", plan.department),
            SectionBody::Employees(query::in_department(employees, &plan.department)),
        ),
        Section::new(
            "Group by Department",
            SectionBody::Groups(
                query::group_by_department(employees)
                    .into_iter()
                    .map(|(dept, members)| (dept, owned(members)))
                    .collect(),
            ),
        ),
        Section::new(
            "Average Salary per Dept",
            SectionBody::Averages(query::average_salary_by_department(employees)),
        ),
        Section::new(
            condition_label("All", plan.all_condition),
            SectionBody::Flag(query::all_match(employees, |e| plan.all_condition.test(e))),
        ),
        Section::new(
            condition_label("Any", plan.any_condition),
            SectionBody::Flag(query::any_match(employees, |e| plan.any_condition.test(e))),
        ),
        extremal("Highest Paid", query::highest_paid(employees)),
        extremal("Lowest Paid", query::lowest_paid(employees)),
        Section::new("Total Salary", SectionBody::Amount(query::total_salary(employees))),
    ];

    for section in &sections {
        debug!(title = %section.title, "section computed");
    }
    info!(sections = sections.len(), "report complete");

    Report {
        generated_at: Utc::now(),
        employee_count: roster.len(),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_roster;

    fn ids(body: &SectionBody) -> Vec<u32> {
        match body {
            SectionBody::Employees(list) => list.iter().map(|e| e.id.0).collect(),
            other => panic!("expected employee list, got {other:?}"),
        }
    }

    fn body<'a>(report: &'a Report, title: &str) -> &'a SectionBody {
        &report.section(title).expect(title).body
    }

    #[test]
    fn default_plan_titles_in_order() {
        let report = run_report(&sample_roster(), &ReportPlan::default());
        let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "High earners",
                "Employee Names",
                "Sorted by salary",
                "Top 2 Salaries",
                "Skip Top 2 Salaries",
                "List of IT Employees",
                "Group by Department",
                "Average Salary per Dept",
                "All earn >30k?",
                "Any earn >70k?",
                "Highest Paid",
                "Lowest Paid",
                "Total Salary",
            ]
        );
    }

    #[test]
    fn sample_report_values() {
        let report = run_report(&sample_roster(), &ReportPlan::default());
        assert_eq!(report.employee_count, 6);

        assert_eq!(ids(body(&report, "High earners")), vec![1, 3, 5]);
        assert_eq!(ids(body(&report, "Sorted by salary")), vec![5, 3, 1, 4, 2, 6]);
        assert_eq!(ids(body(&report, "Top 2 Salaries")), vec![5, 3]);
        assert_eq!(ids(body(&report, "Skip Top 2 Salaries")), vec![1, 4, 2, 6]);
        assert_eq!(ids(body(&report, "List of IT Employees")), vec![1, 3, 5]);
        assert_eq!(body(&report, "All earn >30k?"), &SectionBody::Flag(true));
        assert_eq!(body(&report, "Any earn >70k?"), &SectionBody::Flag(true));
        assert_eq!(body(&report, "Total Salary"), &SectionBody::Amount(310000.0));

        match body(&report, "Highest Paid") {
            SectionBody::Employee(Some(e)) => assert_eq!(e.name, "Nina"),
            other => panic!("unexpected {other:?}"),
        }
        match body(&report, "Group by Department") {
            SectionBody::Groups(groups) => {
                assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["IT", "HR", "Finance"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_roster_reports_absence_without_aborting() {
        let roster = Roster::new(vec![]).expect("empty roster");
        let report = run_report(&roster, &ReportPlan::default());

        assert_eq!(report.sections.len(), 13);
        assert_eq!(
            report.section("Highest Paid").unwrap().body,
            SectionBody::Employee(None)
        );
        assert_eq!(
            report.section("Lowest Paid").unwrap().body,
            SectionBody::Employee(None)
        );
        assert_eq!(
            report.section("Total Salary").unwrap().body,
            SectionBody::Amount(0.0)
        );
    }

    #[test]
    fn plan_parameters_drive_titles() {
        let plan = ReportPlan {
            page_size: 3,
            department: "HR".into(),
            all_condition: SalaryPredicate::AtMost(80000.0),
            any_condition: SalaryPredicate::Above(1234.5),
            ..ReportPlan::default()
        };
        let report = run_report(&sample_roster(), &plan);
        assert!(report.section("Top 3 Salaries").is_some());
        assert!(report.section("List of HR Employees").is_some());
        assert!(report.section("All earn <=80k?").is_some());
        assert!(report.section("Any earn >1234.5?").is_some());
    }

    #[test]
    fn report_serializes_with_tagged_bodies() {
        let report = run_report(&sample_roster(), &ReportPlan::default());
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["employee_count"], 6);
        assert_eq!(json["sections"][0]["body"]["kind"], "employees");
        assert_eq!(json["sections"][12]["body"]["value"], 310000.0);
    }
}
