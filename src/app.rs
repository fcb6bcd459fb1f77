//! App Module
//!
//! The single controller that owns all roster state and turns user actions
//! into repository mutations, persistence and screens.
//!
//! ## Event Flow
//! ```text
//!   user action ──▶ App ──▶ Repository ──(ChangeEvent)──▶ App::sync
//!                                                           │
//!                                     EmployeeStore::save_all ◀┘
//!                                                           │
//!                                   render(ViewModel) ◀──────┘
//! ```
//!
//! Every handler runs to completion before the next one starts; there is
//! exactly one actor, so no locking is involved.

use std::sync::Arc;

use crossbeam::channel::Receiver;

use crate::error::{Result, RosterError};
use crate::export::{self, Download};
use crate::filter::filter;
use crate::model::{Employee, EmployeeId};
use crate::repository::{ChangeEvent, Repository};
use crate::session::{LoginOutcome, SessionGate, SessionState, LOGIN_FAILED_MESSAGE};
use crate::store::{EmployeeStore, SlotStore};
use crate::view::{render, EmployeeForm, LoginForm, Screen, ViewModel};

/// Prompt shown before a delete
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this employee?";

/// Interactive yes/no question asked by the host
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Result of submitting the roster form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Employee),
    /// `applied` is false when the edited record vanished meanwhile
    Updated { id: EmployeeId, applied: bool },
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was touched
    Declined,
    Confirmed { removed: bool },
}

/// Application controller
pub struct App<S> {
    repo: Repository,

    /// Change feed from `repo`, drained by `sync`
    changes: Receiver<ChangeEvent>,

    employees: EmployeeStore<S>,
    session: SessionGate<S>,
    state: SessionState,

    login_form: LoginForm,
    form: EmployeeForm,

    /// Text in the search box
    search_input: String,

    /// Query the table is currently filtered by, `None` for the full roster
    active_query: Option<String>,

    scroll_to_top: bool,
}

impl<S: SlotStore> App<S> {
    /// Start the application over a slot store
    ///
    /// Loads the roster once and reads the session flag. A malformed
    /// `employees` slot aborts startup.
    pub fn open(store: Arc<S>) -> Result<Self> {
        let employees = EmployeeStore::new(Arc::clone(&store));
        let session = SessionGate::new(store);

        let mut repo = Repository::new(employees.load_all()?);
        let changes = repo.subscribe();
        let state = session.state()?;

        tracing::info!(records = repo.len(), ?state, "Roster loaded");

        Ok(Self {
            repo,
            changes,
            employees,
            session,
            state,
            login_form: LoginForm::default(),
            form: EmployeeForm::default(),
            search_input: String::new(),
            active_query: None,
            scroll_to_top: false,
        })
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn session_state(&self) -> SessionState {
        self.state
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login_form
    }

    /// Fill the login form and submit it
    pub fn login(&mut self, username: &str, password: &str) -> Result<LoginOutcome> {
        self.login_form.username = username.to_string();
        self.login_form.password = password.to_string();
        self.submit_login()
    }

    /// Submit the login form as currently filled
    ///
    /// A rejection shows the inline message and clears only the password.
    pub fn submit_login(&mut self) -> Result<LoginOutcome> {
        self.scroll_to_top = false;
        let outcome = self
            .session
            .login(&self.login_form.username, &self.login_form.password)?;

        match outcome {
            LoginOutcome::Accepted => {
                self.login_form.message.clear();
                self.active_query = None;
            }
            LoginOutcome::Rejected => {
                self.login_form.message = LOGIN_FAILED_MESSAGE.to_string();
                self.login_form.password.clear();
            }
        }

        self.state = self.session.state()?;
        Ok(outcome)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.scroll_to_top = false;
        self.session.logout()?;
        self.state = self.session.state()?;
        Ok(())
    }

    // =========================================================================
    // Roster Actions
    // =========================================================================

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// Submit the roster form: update when editing, create otherwise
    ///
    /// Name and position are trimmed; salary text must coerce to a finite
    /// number. Afterwards the roster is persisted, shown unfiltered and the
    /// form is reset.
    pub fn submit_form(&mut self) -> Result<SubmitOutcome> {
        self.require_session()?;
        self.scroll_to_top = false;

        let name = self.form.name.trim().to_string();
        let position = self.form.position.trim().to_string();
        let salary = parse_salary(&self.form.salary)?;

        let outcome = match self.form.editing_id {
            Some(id) => {
                let applied = self.repo.update(id, name, position, salary);
                SubmitOutcome::Updated { id, applied }
            }
            None => SubmitOutcome::Created(self.repo.create(name, position, salary)),
        };

        self.sync()?;
        self.form.reset();
        Ok(outcome)
    }

    /// Load a record into the form for editing
    ///
    /// Returns false, leaving the form alone, when `id` is not present.
    pub fn edit(&mut self, id: EmployeeId) -> Result<bool> {
        self.require_session()?;

        let Some(employee) = self.repo.find_by_id(id) else {
            return Ok(false);
        };
        self.form.populate(employee);
        self.scroll_to_top = true;
        Ok(true)
    }

    /// Delete after asking the user
    pub fn delete(&mut self, id: EmployeeId, confirm: &mut impl Confirm) -> Result<DeleteOutcome> {
        self.require_session()?;
        self.scroll_to_top = false;

        if !confirm.confirm(DELETE_CONFIRM_MESSAGE) {
            tracing::debug!(id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.repo.delete(id);
        self.sync()?;
        Ok(DeleteOutcome::Confirmed { removed })
    }

    /// Handle one keystroke in the search box
    pub fn search(&mut self, input: &str) -> Result<()> {
        self.require_session()?;
        self.scroll_to_top = false;
        self.search_input = input.to_string();
        self.active_query = Some(input.to_string());
        Ok(())
    }

    /// Records the table currently shows
    pub fn visible(&self) -> Vec<Employee> {
        match &self.active_query {
            Some(query) => filter(self.repo.list(), query),
            None => self.repo.list().to_vec(),
        }
    }

    /// CSV download of the full roster
    pub fn export(&self) -> Result<Download> {
        self.require_session()?;
        let download = export::export(self.repo.list());
        tracing::info!(records = self.repo.len(), bytes = download.body.len(), "Exported roster");
        Ok(download)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the current screen
    pub fn view(&self) -> Screen {
        match self.state {
            SessionState::Unauthenticated => render(&ViewModel::Login {
                form: &self.login_form,
            }),
            SessionState::Authenticated => {
                let rows = self.visible();
                render(&ViewModel::Roster {
                    rows: &rows,
                    form: &self.form,
                    search: &self.search_input,
                    scroll_to_top: self.scroll_to_top,
                })
            }
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn require_session(&self) -> Result<()> {
        match self.state {
            SessionState::Authenticated => Ok(()),
            SessionState::Unauthenticated => Err(RosterError::Unauthenticated),
        }
    }

    /// Persist and re-render after repository changes
    ///
    /// Any event triggers a full save, including no-op updates and deletes.
    fn sync(&mut self) -> Result<()> {
        let changes = self.changes.try_iter().count();
        if changes == 0 {
            return Ok(());
        }

        self.employees.save_all(self.repo.list())?;
        self.active_query = None;
        Ok(())
    }
}

/// Coerce form text into a salary
///
/// Reads the longest numeric prefix after leading whitespace, so
/// `"50000 USD"` is `50000`. Text without a numeric prefix, or one that
/// overflows to infinity, is an `InvalidSalary`.
pub fn parse_salary(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match numeric_prefix(trimmed).parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RosterError::InvalidSalary(trimmed.to_string())),
    }
}

/// `[sign] digits [. digits] [(e|E) [sign] digits]`, empty when no digit leads
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    &text[..end]
}
