use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use todor::{Todo, TodoStore};

mod cli;
mod config;
mod interactive;

use cli::Cli;
use cli::commands::{Commands, DeleteArgs};
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todor")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("todor.log");

    // Setup env_logger with file output so stdout stays reserved for records
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_command(command: Commands, config: &Config) -> Result<()> {
    info!("Using todo file: {}", config.todo_file.display());
    let store = TodoStore::new(&config.todo_file);

    match command {
        Commands::Add { title, due, silent } => handle_add_command(&store, title, due, silent),
        Commands::View {
            all,
            one,
            line,
            count,
        } => handle_view_command(&store, all, one, line, count),
        Commands::Delete(args) => handle_delete_command(&store, &args),
        Commands::Interactive => interactive::run(&store),
    }
}

fn handle_add_command(
    store: &TodoStore,
    title: String,
    due: Option<NaiveDate>,
    silent: bool,
) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Missing required arguments: --title must not be empty. Use --help.");
    }
    if title.contains('\n') {
        bail!("Invalid arguments supplied: the title must be a single line.");
    }

    let todo = Todo::new(title, due);
    store.append(&todo).context("Failed to add todo")?;
    info!("Appended todo to {}", store.path().display());

    if !silent {
        println!("{} {}", "Title:".green(), todo.title);
        println!(
            "{} {}",
            "Date Due:".green(),
            todo.due_date.map(|d| d.to_string()).unwrap_or_default()
        );
    }
    Ok(())
}

fn handle_view_command(
    store: &TodoStore,
    all: bool,
    one: bool,
    line: usize,
    count: bool,
) -> Result<()> {
    if count {
        println!("{}", store.count().context("Failed to count todos")?);
    }

    if all {
        for record in store.list_all().context("Failed to read todos")? {
            println!("{record}");
        }
    } else if one {
        // Out-of-range selections print nothing; only a missing store fails.
        if let Some(record) = store.read_at(line).context("Failed to read todo")? {
            println!("{record}");
        }
    }
    Ok(())
}

fn handle_delete_command(store: &TodoStore, args: &DeleteArgs) -> Result<()> {
    if args.all {
        store
            .delete_all(!args.purge)
            .context("Failed to delete todos")?;
        info!(
            "Deleted all todos from {} (purge: {})",
            store.path().display(),
            args.purge
        );
    } else if let Some(line) = args.line {
        store.delete_at(line).context("Failed to delete todo")?;
        info!("Deleted line {} from {}", line, store.path().display());
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = setup_logging() {
        eprintln!("{} {err:#}", "Error:".red());
        return ExitCode::FAILURE;
    }

    // Parse manually so this layer owns the exit codes: help and version
    // exit 0, every parse failure exits 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let is_failure = err.use_stderr();
            let _ = err.print();
            return if is_failure {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let Some(command) = cli.command else {
        eprintln!("Arguments need to be supplied. Use --help.");
        return ExitCode::FAILURE;
    };

    let config = Config::from_env();

    match run_command(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
