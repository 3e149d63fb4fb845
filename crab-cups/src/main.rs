#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{
    answer::Answer,
    labels::Labels,
    prelude::*,
    scenario::{EXAMPLE, LARGE_CUPS, LARGE_MOVES, PUZZLE, SMALL_MOVES},
};
use clap::Parser;
use std::path::PathBuf;

mod answer;
mod game;
mod labels;
mod prelude;
mod scenario;

fn main() -> Result<()> {
    env_logger::init();
    let app: App = App::parse();
    app.run()?;
    Ok(())
}

/// Crab cups
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Starting cup labels, as digits (389125467) or separated numbers.
    /// Defaults to the puzzle input.
    #[arg(short = 'l', long, conflicts_with_all = ["example", "input"])]
    labels: Option<Labels>,

    /// Play the demonstration sequence instead of the puzzle input
    #[arg(short = 'e', long, conflicts_with = "input")]
    example: bool,

    /// Optional path to a file holding the starting labels
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Moves in the short game
    #[arg(short = 'm', long, default_value_t = SMALL_MOVES)]
    moves: usize,

    /// Cups in the long game
    #[arg(short = 'c', long, default_value_t = LARGE_CUPS)]
    cups: usize,

    /// Moves in the long game
    #[arg(short = 'M', long, default_value_t = LARGE_MOVES)]
    large_moves: usize,
}

impl App {
    fn answer(&self) -> Answer {
        Answer {
            moves: self.moves,
            cups: self.cups,
            large_moves: self.large_moves,
        }
    }

    fn starting_labels(&self, answer: &Answer) -> Result<(&'static str, Labels)> {
        Ok(match (&self.labels, &self.input) {
            (Some(labels), _) => ("Custom", labels.clone()),
            (None, Some(path)) => (
                "Input",
                answer.load_input(path).with_context(|| {
                    format!("unable to load labels from {}", path.display())
                })?,
            ),
            (None, None) if self.example => ("Example", EXAMPLE[..].into()),
            (None, None) => ("Puzzle", PUZZLE[..].into()),
        })
    }

    fn run(&self) -> Result<()> {
        let answer = self.answer();
        let (kind, labels) = self.starting_labels(&answer)?;
        info!("{} labels: {}", kind, labels);

        answer.solve(&format!("Crab Cups ({})", kind), &labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn defaults_play_the_puzzle() {
        let app = App::try_parse_from(["crab-cups"]).unwrap();
        assert_eq!(app.answer(), Answer::default());

        let (kind, labels) = app.starting_labels(&app.answer()).unwrap();
        assert_eq!(kind, "Puzzle");
        assert_eq!(&*labels, &PUZZLE);
    }

    #[test]
    fn custom_labels_and_counts() {
        let app = App::try_parse_from([
            "crab-cups", "-l", "389125467", "-m", "10", "-c", "20", "-M", "5",
        ])
        .unwrap();
        assert_eq!(app.answer(), Answer {
            moves: 10,
            cups: 20,
            large_moves: 5,
        });
        let (kind, labels) = app.starting_labels(&app.answer()).unwrap();
        assert_eq!(kind, "Custom");
        assert_eq!(&*labels, &EXAMPLE);
    }

    #[test]
    fn example_flag() {
        let app = App::try_parse_from(["crab-cups", "--example"]).unwrap();
        let (kind, labels) = app.starting_labels(&app.answer()).unwrap();
        assert_eq!(kind, "Example");
        assert_eq!(&*labels, &EXAMPLE);
    }

    #[test]
    fn rejects_conflicts_and_bad_labels() {
        assert!(
            App::try_parse_from(["crab-cups", "-l", "123", "--example"])
                .is_err()
        );
        assert!(App::try_parse_from(["crab-cups", "-l", "12a"]).is_err());
    }

    #[test]
    fn missing_input_file() {
        let app = App::try_parse_from([
            "crab-cups",
            "-i",
            "/nonexistent/crab-cups/labels.txt",
        ])
        .unwrap();
        assert!(app.starting_labels(&app.answer()).is_err());
    }
}
