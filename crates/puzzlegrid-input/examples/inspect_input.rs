//! Example showing the input pipeline on a puzzle file.
//!
//! This example shows how to:
//! - Read a file into `Lines`
//! - Split it into sections at blank lines
//! - Build a character or digit grid with a boundary policy
//! - Query cells, including coordinates outside the grid
//!
//! # Usage
//!
//! ```sh
//! cargo run --example inspect_input -- input.txt
//! ```
//!
//! Treat the input as digits and wrap around the edges:
//!
//! ```sh
//! cargo run --example inspect_input -- input.txt --mode digits --wrap --at -1,-1
//! ```
//!
//! Use `.` for everything outside the map and inspect each section separately:
//!
//! ```sh
//! cargo run --example inspect_input -- input.txt --split --fallback . --at 10,-3
//! ```

use std::{fs::File, io::BufReader, path::PathBuf, process};

use clap::{CommandFactory as _, Parser, ValueEnum, error::ErrorKind};
use puzzlegrid_core::{Boundary, Grid, Position};
use puzzlegrid_input::{InputError, Lines};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Chars,
    Digits,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file to read.
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// How cells are interpreted.
    #[arg(long, value_name = "MODE", default_value = "chars")]
    mode: Mode,

    /// Wrap coordinates around the grid edges.
    #[arg(long, conflicts_with = "fallback")]
    wrap: bool,

    /// Value seen outside the grid (a character, or a digit in digit mode).
    #[arg(long, value_name = "CHAR")]
    fallback: Option<char>,

    /// Treat each blank-line separated section as its own grid.
    #[arg(long)]
    split: bool,

    /// Coordinates to look up, as `X,Y`. Repeatable.
    #[arg(
        long = "at",
        value_name = "X,Y",
        value_parser = parse_position,
        allow_hyphen_values = true
    )]
    lookups: Vec<Position>,
}

impl Args {
    fn validate(&self) -> Result<(), String> {
        match (self.mode, self.fallback) {
            (Mode::Digits, Some(ch)) if fallback_digit(ch).is_none() => Err(format!(
                "--fallback must be a digit in digits mode, got {ch:?}"
            )),
            _ => Ok(()),
        }
    }
}

fn fallback_digit(ch: char) -> Option<u8> {
    ch.to_digit(10).and_then(|digit| u8::try_from(digit).ok())
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|err| format!("invalid x: {err}"))?;
    let y = y.trim().parse().map_err(|err| format!("invalid y: {err}"))?;
    Ok(Position::new(x, y))
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(msg) = args.validate() {
        Args::command().error(ErrorKind::ValueValidation, msg).exit();
    }
    if let Err(err) = run(&args) {
        eprintln!("{}: {err}", args.path.display());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), InputError> {
    let file = File::open(&args.path)?;
    let lines = Lines::from_reader(BufReader::new(file))?;
    log::info!("loaded {} lines from {}", lines.len(), args.path.display());

    let sections = if args.split {
        lines.split_by_blank_line()
    } else {
        vec![lines]
    };

    for (index, section) in sections.iter().enumerate() {
        println!("section {index}: {} lines", section.len());
        match args.mode {
            Mode::Chars => {
                let boundary = match args.fallback {
                    _ if args.wrap => Boundary::Wrap,
                    Some(ch) => Boundary::constant(ch),
                    None => Boundary::Strict,
                };
                print_grid(&section.char_grid(boundary)?, &args.lookups);
            }
            Mode::Digits => {
                let boundary = match args.fallback.and_then(fallback_digit) {
                    _ if args.wrap => Boundary::Wrap,
                    Some(digit) => Boundary::constant(digit),
                    None => Boundary::Strict,
                };
                print_grid(&section.digit_grid(boundary)?, &args.lookups);
            }
        }
    }
    Ok(())
}

fn print_grid<T>(grid: &Grid<T>, lookups: &[Position])
where
    T: Clone + std::fmt::Display,
{
    println!(
        "{}x{} grid, boundary {:?}",
        grid.width(),
        grid.height(),
        grid.boundary()
    );
    println!("{grid}");
    for &pos in lookups {
        match grid.get_at(pos) {
            Some(value) => println!("  {pos} = {value}"),
            None => println!("  {pos} is outside the grid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        Args::parse_from(["inspect_input", "in.txt"].iter().chain(extra).copied())
    }

    #[test]
    fn test_digit_mode_rejects_non_digit_fallback() {
        assert!(parse(&["--mode", "digits", "--fallback", "."]).validate().is_err());
        assert!(parse(&["--mode", "digits", "--fallback", "0"]).validate().is_ok());
        assert!(parse(&["--fallback", "."]).validate().is_ok());
    }

    #[test]
    fn test_parse_negative_lookups() {
        let args = parse(&["--at", "-1,-2", "--at", "3,4"]);
        assert_eq!(args.lookups, [Position::new(-1, -2), Position::new(3, 4)]);
        assert!(parse_position("3").is_err());
    }
}
