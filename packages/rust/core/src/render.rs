//! Console rendering for a [`Report`].

use std::fmt::Write as _;
use std::mem::discriminant;

use staffquery_shared::{Employee, OutputFormat, Result, StaffQueryError, format_amount};

use crate::report::{Report, Section, SectionBody};

/// Render `report` in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Pretty-printed JSON form of the report.
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| StaffQueryError::Render(e.to_string()))
}

/// Plain-text form: list sections get a heading line, scalar sections print inline,
/// and consecutive scalars of the same kind share one block.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Report generated {} ({} employees)",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.employee_count
    );

    let mut previous: Option<&SectionBody> = None;
    for section in &report.sections {
        let continues_block = previous.is_some_and(|prev| {
            is_scalar(prev) && discriminant(prev) == discriminant(&section.body)
        });
        if !continues_block {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = write_section(&mut out, section);
        previous = Some(&section.body);
    }
    out
}

fn is_scalar(body: &SectionBody) -> bool {
    matches!(
        body,
        SectionBody::Flag(_) | SectionBody::Employee(_) | SectionBody::Amount(_)
    )
}

fn join_employees(employees: &[Employee]) -> String {
    employees
        .iter()
        .map(Employee::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_section(out: &mut String, section: &Section) -> std::fmt::Result {
    let title = &section.title;
    match &section.body {
        SectionBody::Employees(employees) => {
            writeln!(out, "{title}:")?;
            employees.iter().try_for_each(|e| writeln!(out, "{e}"))
        }
        SectionBody::Names(names) => {
            writeln!(out, "{title}:")?;
            names.iter().try_for_each(|n| writeln!(out, "{n}"))
        }
        SectionBody::Groups(groups) => {
            writeln!(out, "{title}:")?;
            groups.iter().try_for_each(|(dept, members)| {
                writeln!(out, "{dept}: [{}]", join_employees(members))
            })
        }
        SectionBody::Averages(averages) => {
            writeln!(out, "{title}:")?;
            averages
                .iter()
                .try_for_each(|(dept, avg)| writeln!(out, "{dept}: {}", format_amount(*avg)))
        }
        SectionBody::Flag(value) => writeln!(out, "{title} {value}"),
        SectionBody::Employee(Some(e)) => writeln!(out, "{title}: {e}"),
        SectionBody::Employee(None) => writeln!(out, "{title}: none (empty roster)"),
        SectionBody::Amount(amount) => writeln!(out, "{title}: {}", format_amount(*amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportPlan, run_report};
    use crate::sample::sample_roster;
    use staffquery_shared::Roster;

    const SAMPLE_BODY: &str = "
High earners:
1 - Rohit (IT) : ₹50000.0
3 - Amit (IT) : ₹60000.0
5 - Nina (IT) : ₹75000.0

Employee Names:
Rohit
Ankit
Amit
Sneha
Nina
John

Sorted by salary:
5 - Nina (IT) : ₹75000.0
3 - Amit (IT) : ₹60000.0
1 - Rohit (IT) : ₹50000.0
4 - Sneha (Finance) : ₹45000.0
2 - Ankit (HR) : ₹40000.0
6 - John (HR) : ₹40000.0

Top 2 Salaries:
5 - Nina (IT) : ₹75000.0
3 - Amit (IT) : ₹60000.0

Skip Top 2 Salaries:
1 - Rohit (IT) : ₹50000.0
4 - Sneha (Finance) : ₹45000.0
2 - Ankit (HR) : ₹40000.0
6 - John (HR) : ₹40000.0

List of IT Employees:
1 - Rohit (IT) : ₹50000.0
3 - Amit (IT) : ₹60000.0
5 - Nina (IT) : ₹75000.0

Group by Department:
IT: [1 - Rohit (IT) : ₹50000.0, 3 - Amit (IT) : ₹60000.0, 5 - Nina (IT) : ₹75000.0]
HR: [2 - Ankit (HR) : ₹40000.0, 6 - John (HR) : ₹40000.0]
Finance: [4 - Sneha (Finance) : ₹45000.0]

Average Salary per Dept:
IT: ₹61666.666666666664
HR: ₹40000.0
Finance: ₹45000.0

All earn >30k? true
Any earn >70k? true

Highest Paid: 5 - Nina (IT) : ₹75000.0
Lowest Paid: 2 - Ankit (HR) : ₹40000.0

Total Salary: ₹310000.0
";

    #[test]
    fn text_report_for_sample() {
        let report = run_report(&sample_roster(), &ReportPlan::default());
        let text = render_text(&report);

        let (header, body) = text.split_once('\n').expect("header line");
        assert!(header.starts_with("Report generated "));
        assert!(header.ends_with("(6 employees)"));
        assert_eq!(body, SAMPLE_BODY);
    }

    #[test]
    fn text_report_for_empty_roster() {
        let roster = Roster::new(vec![]).expect("empty roster");
        let text = render_text(&run_report(&roster, &ReportPlan::default()));

        assert!(text.contains("High earners:\n\nEmployee Names:"));
        assert!(text.contains("Highest Paid: none (empty roster)\nLowest Paid: none (empty roster)"));
        assert!(text.contains("Total Salary: ₹0.0"));
    }

    #[test]
    fn write_section_propagates_result() {
        let section = Section {
            title: "Total Salary".into(),
            body: SectionBody::Amount(12.5),
        };
        let mut out = String::new();
        assert!(write_section(&mut out, &section).is_ok());
        assert_eq!(out, "Total Salary: ₹12.5\n");
    }

    #[test]
    fn json_format_is_valid_json() {
        let report = run_report(&sample_roster(), &ReportPlan::default());
        let json = render(&report, OutputFormat::Json).expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        assert_eq!(value["sections"][1]["body"]["value"][4], "Nina");
    }
}
