//! Department catalogue offered on the department grid.

use crate::error::CoreError;

/// Department every HR admin session is scoped to.
pub const HR_DEPARTMENT: &str = "HR";

/// Departments an employee can pick from, in grid order.
pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Marketing",
    "Finance",
    "Legal",
    "Sales",
    "Customer Support",
    "Operations",
    "Admin",
];

/// Resolve a user-supplied department name against the catalogue.
///
/// Matching ignores case and surrounding whitespace; the canonical spelling
/// is returned.
pub fn find_department(name: &str) -> Result<&'static str, CoreError> {
    let wanted = name.trim();
    DEPARTMENTS
        .iter()
        .copied()
        .find(|d| d.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::UnknownDepartment(wanted.to_string()))
}

/// Department key used on query and history requests.
///
/// The backend stores departments lowercased.
pub fn wire_department(department: &str) -> String {
    department.to_lowercase()
}
