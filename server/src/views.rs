//! Server-rendered pages for the employee screens.

use entity::{Employee, Identifiable};
use products_hr::MAX_FIELD_LENGTH;

use crate::http::LIST_PATH;

pub fn employee_list(employees: &[Employee]) -> String {
    let mut rows = String::new();
    for employee in employees {
        let id = employee.id();
        rows.push_str(&format!(
            r#"<tr><td>{id}</td><td>{name}</td><td>{role}</td><td><a href="{LIST_PATH}/edit/{id}">Edit</a> <form method="post" action="{LIST_PATH}/delete/{id}" style="display:inline"><button type="submit">Delete</button></form></td></tr>"#,
            name = escape(employee.name()),
            role = escape(employee.role()),
        ));
    }
    if employees.is_empty() {
        rows.push_str(r#"<tr><td colspan="4">No employees registered.</td></tr>"#);
    }
    page(
        "Employees",
        &format!(
            r#"<h1>Employees</h1><p><a href="{LIST_PATH}/new">New employee</a></p><table><thead><tr><th>ID</th><th>Name</th><th>Role</th><th></th></tr></thead><tbody>{rows}</tbody></table>"#
        ),
    )
}

/// Blank form when `employee` is `None`, otherwise pre-filled for editing.
/// The salary rides along as a hidden field; it is not editable here.
pub fn employee_form(employee: Option<&Employee>) -> String {
    let (title, action, name, role, salary) = match employee {
        Some(e) => (
            "Edit employee",
            format!("{LIST_PATH}/edit/{}", e.id()),
            escape(e.name()),
            escape(e.role()),
            e.salary(),
        ),
        None => ("New employee", LIST_PATH.to_string(), String::new(), String::new(), 0.0),
    };
    page(
        title,
        &format!(
            r#"<h1>{title}</h1><form method="post" action="{action}"><label>Name <input type="text" name="name" value="{name}" required maxlength="{MAX_FIELD_LENGTH}"></label><label>Role <input type="text" name="role" value="{role}" required maxlength="{MAX_FIELD_LENGTH}"></label><input type="hidden" name="salary" value="{salary}"><button type="submit">Save</button></form><p><a href="{LIST_PATH}">Back to list</a></p>"#
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>{title}</title></head><body>{body}</body></html>"#
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
