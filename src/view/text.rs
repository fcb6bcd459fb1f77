//! Plain-text drawing of screens for terminal hosts.

use super::{LoginScreen, RosterScreen, Row, Screen};

/// Draw a screen as lines of text
pub fn draw(screen: &Screen) -> String {
    match screen {
        Screen::Login(login) => draw_login(login),
        Screen::Roster(roster) => draw_roster(roster),
    }
}

fn draw_login(login: &LoginScreen) -> String {
    let mut out = String::from("== Login ==\n");
    out.push_str(&format!("Username: {}\n", login.username));
    out.push_str(&format!("Password: {}\n", "*".repeat(login.password.chars().count())));
    if let Some(message) = &login.message {
        out.push_str(message);
        out.push('\n');
    }
    out
}

fn draw_roster(roster: &RosterScreen) -> String {
    let mut out = String::from("== Employees ==\n");

    match roster.form.editing_id {
        Some(id) => out.push_str(&format!(
            "[{}] #{}: {} / {} / {}\n",
            roster.form.submit_label, id, roster.form.name, roster.form.position, roster.form.salary
        )),
        None => out.push_str(&format!("[{}]\n", roster.form.submit_label)),
    }
    if !roster.search.is_empty() {
        out.push_str(&format!("Search: {}\n", roster.search));
    }
    out.push('\n');

    let cells: Vec<[String; 5]> = roster
        .rows
        .iter()
        .filter_map(|row| match row {
            Row::Record { cells, actions, .. } => {
                let controls = actions
                    .iter()
                    .map(|a| format!("[{}]", a.label))
                    .collect::<Vec<_>>()
                    .join(" ");
                Some([
                    cells[0].clone(),
                    cells[1].clone(),
                    cells[2].clone(),
                    cells[3].clone(),
                    controls,
                ])
            }
            Row::Placeholder { .. } => None,
        })
        .collect();

    let mut widths = roster.columns.map(|c| c.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let total = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);

    let header: Vec<String> = roster.columns.iter().map(|c| c.to_string()).collect();
    out.push_str(&join_padded(&header, &widths));
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in &roster.rows {
        if let Row::Placeholder { text, centered, .. } = row {
            let text_width = text.chars().count();
            let pad = if *centered {
                total.saturating_sub(text_width) / 2
            } else {
                0
            };
            out.push_str(&" ".repeat(pad));
            out.push_str(text);
            out.push('\n');
        }
    }
    for line in &cells {
        out.push_str(&join_padded(line, &widths));
    }

    out
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line.trim_end())
}
