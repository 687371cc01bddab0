use std::fs;
use std::io;
use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use proptab::truth_table;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates truth tables for propositional logic expressions", long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "EXPR")]
    /// The expression to evaluate (e.g. "(a v b) ^ ~c")
    expression: Option<String>,

    #[clap(short, long, value_parser, value_name = "FILE", conflicts_with = "expression")]
    /// Read the expression from a file
    file: Option<PathBuf>,

    #[clap(short, long)]
    /// Read one expression per line from standard input
    interactive: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.interactive {
        return run_interactive();
    }

    let text = if let Some(path) = args.file {
        fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?
    } else if let Some(expression) = args.expression {
        expression
    } else {
        Args::command().print_help()?;
        return Ok(());
    };

    let table = truth_table::generate(&text)?;
    print!("{table}");

    Ok(())
}

/// One expression per line; an evaluation error abandons only that line.
fn run_interactive() -> anyhow::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match truth_table::generate(&line) {
            Ok(table) => print!("{table}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn file_conflicts_with_expression() {
        assert!(Args::try_parse_from(["proptab", "-f", "input.lc", "a v b"]).is_err());
        assert!(Args::try_parse_from(["proptab", "-f", "input.lc"]).is_ok());
        assert!(Args::try_parse_from(["proptab", "a v b"]).is_ok());
    }
}
