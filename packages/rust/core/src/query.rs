//! Read-only queries over a slice of employees.
//!
//! Every function here is pure: it borrows the input, never mutates it, and
//! accepts any slice including an empty one. Orderings are deterministic:
//! sorts are stable and extremal lookups keep the first occurrence on ties.

use std::cmp::Ordering;

use indexmap::IndexMap;

use staffquery_shared::Employee;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Salary condition used by the report plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryPredicate {
    /// `salary > amount`
    Above(f64),
    /// `salary <= amount`
    AtMost(f64),
}

impl SalaryPredicate {
    pub fn test(&self, employee: &Employee) -> bool {
        match *self {
            Self::Above(amount) => employee.salary > amount,
            Self::AtMost(amount) => employee.salary <= amount,
        }
    }

    /// The complementary condition.
    pub fn negate(self) -> Self {
        match self {
            Self::Above(amount) => Self::AtMost(amount),
            Self::AtMost(amount) => Self::Above(amount),
        }
    }
}

impl std::fmt::Display for SalaryPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Above(amount) => write!(f, "salary > {amount}"),
            Self::AtMost(amount) => write!(f, "salary <= {amount}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter / map
// ---------------------------------------------------------------------------

/// Employees satisfying `predicate`, in their original order.
pub fn filter<'a, P>(employees: &'a [Employee], predicate: P) -> Vec<&'a Employee>
where
    P: Fn(&Employee) -> bool,
{
    employees.iter().filter(|e| predicate(e)).collect()
}

/// One derived value per employee, in order.
pub fn map<T, F>(employees: &[Employee], f: F) -> Vec<T>
where
    F: Fn(&Employee) -> T,
{
    employees.iter().map(f).collect()
}

pub fn names(employees: &[Employee]) -> Vec<String> {
    map(employees, |e| e.name.clone())
}

/// Owned copies of the employees whose department equals `dept`.
pub fn in_department(employees: &[Employee], dept: &str) -> Vec<Employee> {
    employees.iter().filter(|e| e.dept == dept).cloned().collect()
}

// ---------------------------------------------------------------------------
// Sorting and pagination
// ---------------------------------------------------------------------------

fn by_salary(a: &Employee, b: &Employee) -> Ordering {
    a.salary.total_cmp(&b.salary)
}

/// Highest salary first. Equal salaries keep their original relative order.
pub fn sorted_by_salary_desc(employees: &[Employee]) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| by_salary(b, a));
    sorted
}

/// The first `n` employees of [`sorted_by_salary_desc`].
pub fn top_by_salary(employees: &[Employee], n: usize) -> Vec<&Employee> {
    sorted_by_salary_desc(employees).into_iter().take(n).collect()
}

/// Everything after the first `n` employees of [`sorted_by_salary_desc`].
pub fn skip_by_salary(employees: &[Employee], n: usize) -> Vec<&Employee> {
    sorted_by_salary_desc(employees).into_iter().skip(n).collect()
}

// ---------------------------------------------------------------------------
// Grouping and aggregation
// ---------------------------------------------------------------------------

/// Department → members, keys in first-seen order, members in original order.
pub fn group_by_department(employees: &[Employee]) -> IndexMap<String, Vec<&Employee>> {
    let mut groups: IndexMap<String, Vec<&Employee>> = IndexMap::new();
    for employee in employees {
        groups.entry(employee.dept.clone()).or_default().push(employee);
    }
    groups
}

/// Department → mean salary. Groups are never empty, so the division is safe.
pub fn average_salary_by_department(employees: &[Employee]) -> IndexMap<String, f64> {
    group_by_department(employees)
        .into_iter()
        .map(|(dept, members)| {
            let avg = total_salary_of(&members) / members.len() as f64;
            (dept, avg)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// `true` when every employee satisfies `predicate` (vacuously true when empty).
pub fn all_match<P>(employees: &[Employee], predicate: P) -> bool
where
    P: Fn(&Employee) -> bool,
{
    employees.iter().all(predicate)
}

/// `true` when at least one employee satisfies `predicate`.
pub fn any_match<P>(employees: &[Employee], predicate: P) -> bool
where
    P: Fn(&Employee) -> bool,
{
    employees.iter().any(predicate)
}

// ---------------------------------------------------------------------------
// Extremal lookup and reduction
// ---------------------------------------------------------------------------

/// The employee with the highest salary, `None` when the slice is empty.
/// On ties the earliest employee wins.
pub fn highest_paid(employees: &[Employee]) -> Option<&Employee> {
    employees.iter().reduce(|best, e| {
        if by_salary(e, best) == Ordering::Greater {
            e
        } else {
            best
        }
    })
}

/// The employee with the lowest salary, `None` when the slice is empty.
/// On ties the earliest employee wins.
pub fn lowest_paid(employees: &[Employee]) -> Option<&Employee> {
    employees.iter().reduce(|best, e| {
        if by_salary(e, best) == Ordering::Less {
            e
        } else {
            best
        }
    })
}

/// Sum of all salaries, `0.0` for an empty slice.
pub fn total_salary(employees: &[Employee]) -> f64 {
    employees.iter().map(|e| e.salary).fold(0.0, |acc, s| acc + s)
}

fn total_salary_of(employees: &[&Employee]) -> f64 {
    employees.iter().map(|e| e.salary).fold(0.0, |acc, s| acc + s)
}
