//! rosterdesk CLI
//!
//! Terminal host for the roster. Each invocation loads the roster, applies
//! one user action and prints the resulting screen.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rosterdesk::app::{DeleteOutcome, SubmitOutcome};
use rosterdesk::config::SyncStrategy;
use rosterdesk::session::LoginOutcome;
use rosterdesk::store::FileStore;
use rosterdesk::view::text;
use rosterdesk::{App, Config, EmployeeId, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// rosterdesk
#[derive(Parser, Debug)]
#[command(name = "rosterdesk")]
#[command(about = "Employee roster with login, search and CSV export")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, env = "ROSTERDESK_DATA_DIR", default_value = "./rosterdesk_data")]
    data_dir: PathBuf,

    /// Skip fsync on every slot file rewrite
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in with the admin credentials
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Log out
    Logout,

    /// Print whether a session is active
    Status,

    /// Show the roster, optionally filtered
    Show {
        /// Case-insensitive filter on name or position
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add an employee
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        position: String,

        #[arg(short, long, allow_negative_numbers = true)]
        salary: String,
    },

    /// Edit an employee; omitted fields keep their current value
    Edit {
        id: EmployeeId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        position: Option<String>,

        #[arg(short, long, allow_negative_numbers = true)]
        salary: Option<String>,
    },

    /// Delete an employee
    Delete {
        id: EmployeeId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Write employee_data.csv
    Export {
        /// Target directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so screens on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rosterdesk=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder().data_dir(&args.data_dir);
    if args.no_sync {
        builder = builder.sync_strategy(SyncStrategy::OsBuffered);
    }
    if let Commands::Export { out_dir } = &args.command {
        builder = builder.export_dir(out_dir);
    }
    if let Commands::Delete { yes: true, .. } = &args.command {
        builder = builder.confirm_deletes(false);
    }
    let config = builder.build();

    match run(&config, args.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, command: Commands) -> Result<ExitCode> {
    config.validate()?;
    tracing::debug!("rosterdesk v{} data_dir={}", rosterdesk::VERSION, config.data_dir.display());

    let store = Arc::new(FileStore::open(&config.data_dir, config.sync_strategy)?);
    let mut app = App::open(store)?;

    match command {
        Commands::Login { username, password } => {
            let outcome = app.login(&username, &password)?;
            print!("{}", text::draw(&app.view()));
            if outcome == LoginOutcome::Rejected {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Logout => {
            app.logout()?;
            print!("{}", text::draw(&app.view()));
        }
        Commands::Status => {
            println!("{:?}", app.session_state());
        }
        Commands::Show { search } => {
            if let Some(query) = search {
                app.search(&query)?;
            }
            print!("{}", text::draw(&app.view()));
        }
        Commands::Add {
            name,
            position,
            salary,
        } => {
            let form = app.form_mut();
            form.name = name;
            form.position = position;
            form.salary = salary;
            if let SubmitOutcome::Created(emp) = app.submit_form()? {
                println!("Added employee #{}", emp.id);
            }
            print!("{}", text::draw(&app.view()));
        }
        Commands::Edit {
            id,
            name,
            position,
            salary,
        } => {
            if !app.edit(id)? {
                eprintln!("No employee with id {id}");
                return Ok(ExitCode::FAILURE);
            }
            let form = app.form_mut();
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(position) = position {
                form.position = position;
            }
            if let Some(salary) = salary {
                form.salary = salary;
            }
            app.submit_form()?;
            print!("{}", text::draw(&app.view()));
        }
        Commands::Delete { id, .. } => {
            let ask = config.confirm_deletes;
            let mut prompt = |message: &str| !ask || ask_yes_no(message);
            match app.delete(id, &mut prompt)? {
                DeleteOutcome::Declined => println!("Cancelled"),
                DeleteOutcome::Confirmed { .. } => print!("{}", text::draw(&app.view())),
            }
        }
        Commands::Export { .. } => {
            let download = app.export()?;
            let path = download.save_in(&config.export_dir)?;
            println!("Wrote {} ({})", path.display(), download.mime);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Ask on stdin; anything but y/yes declines
fn ask_yes_no(message: &str) -> bool {
    print!("{message} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
