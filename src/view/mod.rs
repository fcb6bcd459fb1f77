//! View Module
//!
//! Pure rendering of application state into a toolkit-neutral screen
//! description.
//!
//! ## Responsibilities
//! - Decide between the login screen and the roster screen
//! - Build table rows (or the single placeholder row)
//! - Format salaries as US currency
//! - Expose form state, submit label and scroll requests to the host
//!
//! `render` has no side effects; hosts draw the returned `Screen` however
//! they like (see `text` for the terminal drawer).

pub mod text;

use crate::model::{Employee, EmployeeId};

// =============================================================================
// Constants
// =============================================================================

/// Submit label while creating
pub const ADD_LABEL: &str = "Add Employee";

/// Submit label while editing an existing record
pub const SAVE_LABEL: &str = "Save Changes";

/// Text of the placeholder row
pub const EMPTY_TABLE_TEXT: &str = "No employees found.";

/// Table column headers
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Position", "Salary", "Actions"];

// =============================================================================
// Form State
// =============================================================================

/// Contents of the login form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Inline error line, empty when there is nothing to report
    pub message: String,
}

/// Contents of the roster form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    /// Hidden field; populated only while editing
    pub editing_id: Option<EmployeeId>,
    pub name: String,
    pub position: String,
    /// Raw salary text, coerced on submit
    pub salary: String,
}

impl EmployeeForm {
    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            SAVE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Fill every field (including the hidden id) from a record
    pub fn populate(&mut self, employee: &Employee) {
        self.editing_id = Some(employee.id);
        self.name = employee.name.clone();
        self.position = employee.position.clone();
        self.salary = employee.salary.to_string();
    }

    /// Clear all fields, returning to create mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// View Model / Screen
// =============================================================================

/// Everything `render` needs
#[derive(Debug)]
pub enum ViewModel<'a> {
    Login {
        form: &'a LoginForm,
    },
    Roster {
        /// Records to show, already filtered
        rows: &'a [Employee],
        form: &'a EmployeeForm,
        search: &'a str,
        scroll_to_top: bool,
    },
}

/// A rendered screen
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login(LoginScreen),
    Roster(RosterScreen),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginScreen {
    pub username: String,
    pub password: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterScreen {
    pub form: FormView,
    pub search: String,
    pub columns: [&'static str; 5],
    pub rows: Vec<Row>,
    pub scroll_to_top: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub editing_id: Option<EmployeeId>,
    pub name: String,
    pub position: String,
    pub salary: String,
    pub submit_label: &'static str,
}

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Single cell spanning the whole table
    Placeholder {
        text: &'static str,
        colspan: usize,
        centered: bool,
    },
    Record {
        id: EmployeeId,
        /// ID, Name, Position, Salary
        cells: [String; 4],
        actions: [Action; 2],
    },
}

impl Row {
    pub fn actions(&self) -> &[Action] {
        match self {
            Row::Placeholder { .. } => &[],
            Row::Record { actions, .. } => actions.as_slice(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

/// A per-row control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub label: &'static str,
    pub class: &'static str,
    pub target: EmployeeId,
}

impl Action {
    fn edit(target: EmployeeId) -> Self {
        Self {
            kind: ActionKind::Edit,
            label: "Edit",
            class: "action-btn edit-btn",
            target,
        }
    }

    fn delete(target: EmployeeId) -> Self {
        Self {
            kind: ActionKind::Delete,
            label: "Delete",
            class: "action-btn delete-btn",
            target,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Turn a view model into a screen description
pub fn render(model: &ViewModel<'_>) -> Screen {
    match model {
        ViewModel::Login { form } => Screen::Login(LoginScreen {
            username: form.username.clone(),
            password: form.password.clone(),
            message: (!form.message.is_empty()).then(|| form.message.clone()),
        }),
        ViewModel::Roster {
            rows,
            form,
            search,
            scroll_to_top,
        } => Screen::Roster(RosterScreen {
            form: FormView {
                editing_id: form.editing_id,
                name: form.name.clone(),
                position: form.position.clone(),
                salary: form.salary.clone(),
                submit_label: form.submit_label(),
            },
            search: search.to_string(),
            columns: COLUMNS,
            rows: render_rows(rows),
            scroll_to_top: *scroll_to_top,
        }),
    }
}

fn render_rows(records: &[Employee]) -> Vec<Row> {
    if records.is_empty() {
        return vec![Row::Placeholder {
            text: EMPTY_TABLE_TEXT,
            colspan: COLUMNS.len(),
            centered: true,
        }];
    }

    records
        .iter()
        .map(|emp| Row::Record {
            id: emp.id,
            cells: [
                emp.id.to_string(),
                emp.name.clone(),
                emp.position.clone(),
                format_currency(emp.salary),
            ],
            actions: [Action::edit(emp.id), Action::delete(emp.id)],
        })
        .collect()
}

/// Format an amount as US dollars, e.g. `$50,000.00` or `-$1,234.50`
///
/// Cents round half away from zero; any value with the sign bit set
/// (including `-0.0`) keeps its minus sign.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let cents = (amount.abs() * 100.0).round();
    let digits = format!("{:03.0}", cents);
    let (whole, cents) = digits.split_at(digits.len() - 2);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}
