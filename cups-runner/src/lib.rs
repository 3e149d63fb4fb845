#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod output;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    time::{Duration, Instant},
};

pub fn parse_string<R: Reader>(mut r: R) -> Result<String> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)
        .with_context(|| "unable to read input")?;
    Ok(buf)
}

pub type FileReader = BufReader<File>;

pub trait Reader: BufRead {}

impl<T> Reader for T where T: BufRead {}

pub fn file_reader<P: AsRef<Path>>(path: P) -> Result<FileReader> {
    let file = File::open(path)?;
    let meta = file.metadata()?;

    if meta.is_dir() {
        bail!("Is a directory");
    }

    Ok(BufReader::new(file))
}

/// A puzzle with two answers computed from the same input.
pub trait Solver {
    type Input: Display;
    type Output1: Display;
    type Output2: Display;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input>;
    fn solve_first(&self, input: &Self::Input) -> Result<Self::Output1>;
    fn solve_second(&self, input: &Self::Input) -> Result<Self::Output2>;

    fn load_input<P: AsRef<Path>>(&self, p: P) -> Result<Self::Input> {
        let f = file_reader(p).with_context(|| "unable to open input file")?;
        self.parse_input(f)
    }

    /// Runs both parts, printing each answer with the time it took.
    fn solve(&self, title: &str, input: &Self::Input) -> Result<()> {
        let run_timed = |part: u8| -> Result<(String, Duration)> {
            let now = Instant::now();
            let s = match part {
                1 => format!(
                    "\n{}: {}",
                    "Part 1".red().bold(),
                    self.solve_first(input)?.to_string().red().bold()
                ),
                _ => format!(
                    "{}: {}",
                    "Part 2".green().bold(),
                    self.solve_second(input)?.to_string().green().bold()
                ),
            };
            Ok((s, now.elapsed()))
        };

        output::print_header(title);
        output::print_input(&input.to_string());

        for part in [1, 2] {
            let (s, t) = run_timed(part)?;
            println!("{}", s);
            self.print_time(t);
            println!();
        }

        Ok(())
    }

    fn print_time(&self, d: Duration) {
        println!(
            "- {}.{}{}{:03} {}",
            format!("{:03}", d.as_secs()).bright_red(),
            format!("{:03}", d.subsec_millis()).red(),
            format!("{:03}", d.subsec_micros() % 1_000).yellow(),
            d.subsec_nanos() % 1_000,
            "seconds".bold(),
        );
    }
}
