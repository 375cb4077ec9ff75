use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use engine::{Game, GameFlow, Screen, STARTING_LIVES, WIN_SCORE};
use quiz_core::model::Question;
use words::JsonFileProvider;

/// Levels offered on the home screen, tied to the shipped character roster.
const LEVELS: std::ops::RangeInclusive<u32> = 1..=5;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLevel { raw: String },
    InvalidSeed { raw: String },
    MissingWordsPath,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLevel { raw } => write!(f, "invalid --level value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::MissingWordsPath => {
                write!(f, "no word list given (use --words or set QUIZ_WORDS)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--words <path>] [--level <n>] [--seed <n>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --words <path>   JSON word list (array of word/meaning/level objects)");
    eprintln!("  --level <n>      skip the home screen and start at level n (1-5)");
    eprintln!("  --seed <n>       seed the RNG for a reproducible run");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_WORDS       fallback for --words");
}

struct Args {
    words_path: PathBuf,
    level: Option<u32>,
    seed: Option<u64>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut words_path = std::env::var("QUIZ_WORDS").ok().map(PathBuf::from);
        let mut level = None;
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--words" => {
                    let value = require_value(args, "--words")?;
                    words_path = Some(PathBuf::from(value));
                }
                "--level" => {
                    let value = require_value(args, "--level")?;
                    let parsed = value
                        .parse::<u32>()
                        .ok()
                        .filter(|n| LEVELS.contains(n))
                        .ok_or(ArgsError::InvalidLevel { raw: value.clone() })?;
                    level = Some(parsed);
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            words_path: words_path.ok_or(ArgsError::MissingWordsPath)?,
            level,
            seed,
        })
    }
}

/// Reads one trimmed line; `None` means stdin closed.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    read_line(input)
}

fn print_home() {
    println!();
    println!("=== Vocabulary Quiz ===");
    println!(
        "Clear a level by getting {WIN_SCORE} answers right before losing {STARTING_LIVES} lives."
    );
    println!("Levels: 1 (easiest) to 5 (hardest)");
}

fn print_question(flow: &GameFlow, question: &Question) {
    if let Some(state) = flow.game().state() {
        let name = state.character().name().unwrap_or("???");
        println!();
        println!(
            "{name} (stage {}) | lives: {} | score: {}/{WIN_SCORE}",
            state.stage().value(),
            state.life(),
            state.correct_count()
        );
    }
    println!("What does '{}' mean?", question.target().term());
    for (index, option) in question.options().iter().enumerate() {
        println!("  {}. {option}", index + 1);
    }
}

fn print_stage_clear(flow: &GameFlow) {
    println!();
    println!("*** STAGE CLEAR! ***");
    if let Some(state) = flow.game().state() {
        let name = state.character().name().unwrap_or("???");
        println!(
            "{name} made it through level {} at full power.",
            state.level()
        );
    }
}

fn print_game_over(flow: &GameFlow) {
    println!();
    println!("--- GAME OVER ---");
    let missed = flow.missed_recap();
    if !missed.is_empty() {
        println!("Words to review:");
        for entry in missed {
            println!("  {}: {}", entry.term(), entry.definition());
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let provider = Arc::new(JsonFileProvider::open(&args.words_path)?);
    let game = match args.seed {
        Some(seed) => Game::with_seed(provider, seed),
        None => Game::new(provider),
    };
    let mut flow = GameFlow::new(game);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut preselected = args.level;

    loop {
        match flow.screen() {
            Screen::Home => {
                let level = match preselected.take() {
                    Some(level) => level,
                    None => {
                        print_home();
                        let Some(line) = prompt(&mut input, "Select level (1-5, q quits): ")?
                        else {
                            break;
                        };
                        if line.eq_ignore_ascii_case("q") {
                            break;
                        }
                        match line.parse::<u32>().ok().filter(|n| LEVELS.contains(n)) {
                            Some(level) => level,
                            None => {
                                println!("Please enter a level between 1 and 5.");
                                continue;
                            }
                        }
                    }
                };

                // on failure the flow stays on Home and we re-prompt
                if let Err(err) = flow.select_level(level) {
                    eprintln!("{err}");
                }
            }
            Screen::Quiz => {
                let Some(question) = flow.game().current_question().cloned() else {
                    flow.go_home();
                    continue;
                };
                print_question(&flow, &question);

                let Some(line) = prompt(&mut input, "> ")? else {
                    break;
                };
                let Some(selected) = line
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=question.options().len()).contains(n))
                else {
                    println!("Please enter 1, 2, or 3.");
                    continue;
                };

                let outcome = flow.answer(selected - 1)?;
                if outcome.correct {
                    println!("Correct!");
                } else {
                    println!(
                        "Miss! '{}' means '{}'.",
                        question.target().term(),
                        question.target().definition()
                    );
                }
            }
            Screen::StageClear => {
                print_stage_clear(&flow);
                if prompt(&mut input, "Press Enter to return home... ")?.is_none() {
                    break;
                }
                flow.go_home();
            }
            Screen::GameOver => {
                print_game_over(&flow);
                if prompt(&mut input, "Press Enter to return home... ")?.is_none() {
                    break;
                }
                flow.go_home();
            }
        }
    }

    println!("Bye!");
    Ok(())
}

fn main() {
    let mut argv = std::env::args().skip(1);
    let args = match Args::parse(&mut argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(1);
    }
}
