//! Employee rendering for list and detail output.

use roster_core::Employee;

use super::tables::truncate_string;

/// Width of the separator under the list header.
pub const TABLE_WIDTH: usize = 90;

/// Column header for employee tables.
pub fn table_header() -> String {
    format!("{:<6} {:<25} {:<35} {}", "ID", "Name", "Email", "Role")
}

/// One table row for an employee.
pub fn employee_row(employee: &Employee) -> String {
    format!(
        "{:<6} {:<25} {:<35} {}",
        employee.id,
        truncate_string(&employee.name, 24),
        truncate_string(&employee.email, 34),
        employee.role
    )
}

/// Print a labelled block describing one employee.
pub fn display_employee_summary(employee: &Employee) {
    println!("ID:    {}", employee.id);
    println!("Name:  {}", employee.name);
    println!("Email: {}", employee.email);
    println!("Role:  {}", employee.role);
}
