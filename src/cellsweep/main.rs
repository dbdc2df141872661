use cellsweep::error::Result;
use cellsweep::matrix;
use cellsweep::tool::{self, RemoveBackground};
use clap::Parser;
use colored::*;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Cell count estimate taken from the cellranger filtered matrix.
    let expected_cells = matrix::count_cells(&cli.filtered_h5)?;

    let cmd = RemoveBackground::new(
        cli.raw_h5,
        cli.output_h5,
        expected_cells,
        cli.total_droplets_included,
    );

    let exe = tool::find_cellbender()?;
    println!("{}", cmd.command_line(&exe).dimmed());

    let outcome = cmd.run(&exe)?;
    if outcome.success() {
        println!("Output: {}", outcome.stdout);
    } else {
        // Reported but not propagated; the wrapper still exits 0.
        println!("{} {}", "Error:".red(), outcome.stderr);
        println!("Failed Command: {}", cmd.command_line(&exe));
        println!("Return Code: {}", format_code(outcome.code));
    }
    Ok(())
}

fn format_code(code: Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "killed by signal".to_string(),
    }
}
