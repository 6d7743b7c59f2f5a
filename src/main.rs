//! alphabet-drill — terminal front end for the alphabet-position quiz.
//!
//! Line based: each line is one input event. Choice modes take one of the
//! listed options, typed modes take the answer itself. `quit` ends a game;
//! after game over, `again`, `menu` or `exit`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use alphabet_drill::{
    evaluate_choice, Clock, Mode, Outcome, Phase, QuizConfig, QuizRenderer, SessionState,
    SubmitOutcome, Symbol, SystemClock,
};
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "alphabet-drill", version, about = "Alphabet position recall drill")]
struct Cli {
    /// Game mode: 1 letter→number (choice), 2 number→letter (choice),
    /// 3 letter→number (typed), 4 number→letter (typed)
    #[arg(long)]
    mode: Option<u8>,

    /// Seed for a reproducible question sequence
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log engine events to stderr
    #[arg(long, short)]
    verbose: bool,
}

/// Draws the game as plain text on stdout.
struct TerminalRenderer {
    options: Vec<Symbol>,
}

impl QuizRenderer for TerminalRenderer {
    fn render_question(&mut self, mode: Mode, question: &Symbol) {
        self.options.clear();
        println!();
        println!("  {}  {}", mode.prompt(), question);
    }

    fn render_choices(&mut self, options: &[Symbol]) {
        self.options = options.to_vec();
        let row: Vec<String> = options.iter().map(|o| format!("[{o}]")).collect();
        println!("  {}", row.join("  "));
    }

    fn render_score(&mut self, score: u32) {
        println!("  Score: {score}");
    }

    fn render_elapsed(&mut self, elapsed: &str) {
        println!("  Time:  {elapsed}");
    }

    fn render_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct   => println!("  ✓ Correct!"),
            Outcome::Incorrect => println!("  ✗ Wrong."),
        }
    }

    fn render_game_over(&mut self, final_score: u32, elapsed: &str) {
        println!();
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Game over — score {final_score} in {elapsed}");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
}

type Session = SessionState<SystemClock, TerminalRenderer>;

fn init_logging(verbose: bool) {
    let default = if verbose { "alphabet_drill=debug" } else { "alphabet_drill=warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read stdin")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn choose_mode(input: &mut impl BufRead) -> Result<Option<Mode>> {
    println!();
    for mode in Mode::ALL {
        println!("  {}. {}", mode.number(), mode);
    }
    loop {
        let Some(line) = read_line(input, "Mode (1-4, or exit): ")? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        match line.parse::<u8>().map_err(anyhow::Error::from).and_then(|n| Ok(Mode::try_from(n)?)) {
            Ok(mode) => return Ok(Some(mode)),
            Err(e) => println!("  {e}"),
        }
    }
}

/// Sleep until the feedback delay has passed, then let the session act on it.
fn settle(session: &mut Session) {
    if let Some(pending) = session.pending() {
        let now = session.clock().now_ms();
        thread::sleep(Duration::from_millis(pending.due_at_ms.saturating_sub(now)));
    }
    session.poll();
}

/// Play rounds until the game ends. Returns false on end of input.
fn play(session: &mut Session, input: &mut impl BufRead) -> Result<bool> {
    while session.phase() == Phase::Active {
        session.tick();
        let Some(line) = read_line(input, "> ")? else {
            session.quit();
            return Ok(false);
        };
        if line.trim().eq_ignore_ascii_case("quit") {
            session.quit();
            break;
        }

        let is_choice = session.mode().is_some_and(Mode::is_choice);
        if is_choice && !session.renderer().options.iter().any(|&o| evaluate_choice(&line, o)) {
            println!("  Pick one of the listed options.");
            continue;
        }

        match session.submit_answer(&line) {
            SubmitOutcome::NotReady => println!("  Not a valid answer yet."),
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Correct { .. } | SubmitOutcome::Incorrect => settle(session),
        }
    }
    Ok(true)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => QuizConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => QuizConfig::default(),
    };
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }

    let renderer = TerminalRenderer { options: Vec::new() };
    let mut session = SessionState::new(config, SystemClock::new(), renderer);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut mode = match cli.mode {
        Some(n) => Some(Mode::try_from(n)?),
        None => choose_mode(&mut input)?,
    };

    while let Some(selected) = mode {
        session.start(selected);
        if !play(&mut session, &mut input)? {
            break;
        }
        mode = loop {
            let Some(line) = read_line(&mut input, "again / menu / exit: ")? else {
                break None;
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "again" | "a" => break session.mode(),
                "menu" | "m" => {
                    session.return_to_menu();
                    break choose_mode(&mut input)?;
                }
                "exit" | "e" | "q" => break None,
                _ => println!("  Type again, menu or exit."),
            }
        };
    }
    Ok(())
}
