//! Command dispatch for the orgtree CLI

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::display::ChartRender;
use crate::domain::{DomainError, EmployeeId, EmployeeRecord, OrgChart};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Leaves { file }) => _leaves(file),
        Some(Commands::Supervisor { file, id }) => _supervisor(file, *id),
        Some(Commands::Shell { file }) => _shell(file),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Load an org chart from a TOML file.
pub fn load_chart(path: &Path) -> CliResult<OrgChart> {
    let content = fs::read_to_string(path).map_err(|source| CliError::OrgFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let root: EmployeeRecord =
        toml::from_str(&content).map_err(|source| CliError::OrgFileParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("loaded org chart from {}", path.display());
    Ok(OrgChart::new(root))
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    let chart = load_chart(file)?;
    println!("{}", chart.to_tree_string());
    Ok(())
}

#[instrument]
fn _leaves(file: &Path) -> CliResult<()> {
    let chart = load_chart(file)?;
    for idx in chart.tree().leaf_nodes() {
        if let Some(node) = chart.tree().get_node(idx) {
            output::info(&node.employee);
        }
    }
    Ok(())
}

#[instrument]
fn _supervisor(file: &Path, id: EmployeeId) -> CliResult<()> {
    let chart = load_chart(file)?;
    let supervisor = chart.supervisor(id)?;
    output::info(supervisor);
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Interactive session over an in-memory chart.
///
/// Nothing is written back to the org file; session state is discarded on
/// exit. Domain errors are printed and the session continues.
#[instrument]
fn _shell(file: &Path) -> CliResult<()> {
    let mut chart = load_chart(file)?;
    output::info(&format!(
        "{} employees loaded, 'help' lists commands",
        chart.headcount()
    ));

    let stdin = io::stdin();
    loop {
        print!("orgtree> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if let ShellOutcome::Quit = run_shell_command(&mut chart, line.trim()) {
            break;
        }
    }
    Ok(())
}

enum ShellOutcome {
    Continue,
    Quit,
}

fn run_shell_command(chart: &mut OrgChart, line: &str) -> ShellOutcome {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return ShellOutcome::Quit,
        ["help"] => print_shell_help(),
        ["tree"] => println!("{}", chart.to_tree_string()),
        ["undo"] => report(chart.undo().map(|_| "undone".to_string())),
        ["redo"] => report(chart.redo().map(|_| "redone".to_string())),
        ["move", employee, supervisor] => match (parse_id(employee), parse_id(supervisor)) {
            (Some(employee), Some(supervisor)) => report(
                chart
                    .move_employee(employee, supervisor)
                    .map(|_| format!("moved {} under {}", employee, supervisor)),
            ),
            _ => output::warning("move expects two numeric employee ids"),
        },
        ["supervisor", id] => match parse_id(id) {
            Some(id) => match chart.supervisor(id) {
                Ok(supervisor) => output::info(supervisor),
                Err(e) => output::error(&e),
            },
            None => output::warning("supervisor expects a numeric employee id"),
        },
        ["reports", id] => match parse_id(id) {
            Some(id) => match chart.subordinates(id) {
                Ok(reports) if reports.is_empty() => output::info("no direct reports"),
                Ok(reports) => output::info(&reports.iter().join(", ")),
                Err(e) => output::error(&e),
            },
            None => output::warning("reports expects a numeric employee id"),
        },
        _ => output::warning("unknown command, 'help' lists commands"),
    }
    ShellOutcome::Continue
}

fn report(result: Result<String, DomainError>) {
    match result {
        Ok(msg) => output::success(&msg),
        Err(e) => output::error(&e),
    }
}

fn parse_id(raw: &str) -> Option<EmployeeId> {
    raw.parse().ok()
}

fn print_shell_help() {
    output::detail("move <employee> <supervisor>  reassign an employee");
    output::detail("undo                          revert the last move");
    output::detail("redo                          reapply the next undone move");
    output::detail("tree                          show the current chart");
    output::detail("supervisor <employee>         show who an employee reports to");
    output::detail("reports <employee>            list direct reports");
    output::detail("quit                          leave the session");
}
