//! EmpDir CLI
//!
//! Launches the interactive directory search, or runs a single search and
//! prints the matching employees.

use clap::{Parser, Subcommand};
use console::style;
use empdir::config::{resolve_locale, BASE_URL_ENV};
use empdir::{AppConfig, Employee, EmployeeApi};
use indicatif::HumanDuration;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// EmpDir - employee directory search
///
/// Type to search; requests go out once typing pauses.
#[derive(Parser)]
#[command(name = "empdir")]
#[command(author = "EmpDir Contributors")]
#[command(version)]
#[command(about = "Search the employee directory from the terminal", long_about = None)]
struct Cli {
    /// Directory API base URL (e.g. http://localhost:8000)
    #[arg(long, env = BASE_URL_ENV, global = true)]
    base_url: Option<String>,

    /// Locale for dates (e.g. de_DE); defaults to LC_ALL / LC_TIME / LANG
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Debounce window in milliseconds
    #[arg(long, default_value = "400", global = true)]
    debounce_ms: u64,

    /// Log file (default: empdir.log next to the executable)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search-as-you-type UI (default)
    Tui,

    /// Run one search and print the results
    Search {
        /// Search term (use -- before the term if it starts with -)
        #[arg(allow_hyphen_values = true)]
        term: String,

        /// Print the decoded records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // A missing .env is fine; the base URL may come from the flag or environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    empdir::logging::init(cli.log_file.as_deref());
    tracing::info!(version = empdir::VERSION, "EmpDir starting up");

    let result = build_config(&cli).and_then(|config| match cli.command {
        None | Some(Commands::Tui) => empdir::tui::run(&config),
        Some(Commands::Search { ref term, json }) => cmd_search(&config, term, json),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> empdir::Result<AppConfig> {
    let base_url = cli
        .base_url
        .as_deref()
        .ok_or(empdir::EmpDirError::MissingBaseUrl(BASE_URL_ENV))?;

    Ok(AppConfig::new(base_url)?
        .with_debounce(Duration::from_millis(cli.debounce_ms))
        .with_locale(resolve_locale(cli.locale.as_deref())))
}

/// Search command implementation
fn cmd_search(config: &AppConfig, term: &str, json: bool) -> empdir::Result<()> {
    if term.trim().is_empty() {
        return Err(empdir::EmpDirError::BlankSearchTerm);
    }

    let api = EmployeeApi::new(&config.base_url)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(empdir::EmpDirError::Runtime)?;

    let start = Instant::now();
    let employees = runtime.block_on(api.search(term))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&employees)?);
        return Ok(());
    }

    println!(
        "{} Searching for '{}'",
        style("→").cyan().bold(),
        style(term).yellow()
    );
    println!();
    println!(
        "Found {} employees in {}:",
        style(employees.len()).green(),
        style(HumanDuration(start.elapsed())).cyan()
    );
    println!();

    for (i, employee) in employees.iter().enumerate() {
        print_card(i + 1, employee, config);
    }

    Ok(())
}

fn print_card(position: usize, employee: &Employee, config: &AppConfig) {
    println!(
        "  {} {}",
        style(format!("{:3}.", position)).dim(),
        style(&employee.name).bold()
    );
    println!("       {} {}", style("Email:").dim(), employee.email);
    println!(
        "       {} {}",
        style("Department:").dim(),
        style(employee.department_label()).cyan()
    );
    println!(
        "       {} {}",
        style("Designation:").dim(),
        employee.designation_label()
    );
    println!(
        "       {} {}",
        style("Date of Joining:").dim(),
        employee.joining_date_label(config.locale)
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use empdir::EmpDirError;

    #[test]
    fn blank_search_term_is_rejected_without_a_request() {
        // Nothing listens on port 9; a request would fail with a Search error
        let config = AppConfig::new("http://127.0.0.1:9").unwrap();
        for term in ["", "   ", "\t"] {
            let err = cmd_search(&config, term, false).unwrap_err();
            assert!(matches!(err, EmpDirError::BlankSearchTerm), "{:?}", err);
        }
        assert_eq!(
            EmpDirError::BlankSearchTerm.to_string(),
            "Search term is blank; nothing to search for"
        );
    }

    #[test]
    fn search_subcommand_accepts_leading_hyphen() {
        let cli = Cli::try_parse_from(["empdir", "search", "-ops", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Search { term, json }) => {
                assert_eq!(term, "-ops");
                assert!(json);
            }
            _ => panic!("expected search subcommand"),
        }
    }
}
