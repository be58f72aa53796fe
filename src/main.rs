//! Wordle Minimax - CLI
//!
//! Replays prior guesses given as `GUESS:CODE` and ranks the next guesses by
//! worst-case remaining candidates.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wordle_minimax::{
    commands,
    config::{Mode, PoolSource, SolverConfig},
    core::{Constraint, parse_word_list},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Worst-case (minimax) guess search for Wordle",
    version,
    author,
    after_help = "Provide guesses using the format GUESS:##### where # is 0, 1, or 2:\n  \
                  0: a grey square, 1: a yellow square, 2: a green square\n\n\
                  Example:\n  $ wordle_minimax RAISE:00102 BOTCH:21000\n  Word is:\n  BIOME"
)]
struct Cli {
    /// Prior guesses and their feedback, e.g. RAISE:00102
    constraints: Vec<Constraint>,

    /// Search mode: level1 (1), level2 (2), level2blind (2b), game (g)
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        default_value_t = Mode::OnePly
    )]
    mode: Mode,

    /// Use every accepted guess as the default guess pool instead of solutions only
    #[arg(short, long)]
    all: bool,

    /// Guess words for one ply, comma or space separated; repeat for later plies
    #[arg(short, long = "words", value_name = "LIST")]
    words: Vec<String>,

    /// Only guess words that are still possible solutions
    #[arg(short = 'H', long)]
    hard_mode: bool,

    /// Number of results to print
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Trace intermediate values; repeat to trace deeper
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Run expensive modes without a --words list
    #[arg(short, long)]
    force: bool,

    /// Possible solutions, one word per line (defaults to the built-in list)
    #[arg(long, value_name = "PATH")]
    solutions: Option<PathBuf>,

    /// Accepted guesses, one word per line (defaults to the solution list)
    #[arg(long, value_name = "PATH")]
    guesses: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<SolverConfig> {
        let overrides = self
            .words
            .iter()
            .zip(1..)
            .map(|(list, ply)| {
                parse_word_list(list)
                    .with_context(|| format!("Invalid word list for ply {ply}: '{list}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SolverConfig {
            mode: self.mode,
            pool: if self.all {
                PoolSource::AllGuesses
            } else {
                PoolSource::Solutions
            },
            hard_mode: self.hard_mode,
            overrides,
            constraints: self.constraints,
            verbosity: usize::from(self.verbose),
            count: self.count,
            force: self.force,
            solutions: self.solutions,
            guesses: self.guesses,
        })
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    config.validate()?;

    let dictionary = Dictionary::load(config.solutions.as_deref(), config.guesses.as_deref())?;
    commands::run(&config, &dictionary)
}
