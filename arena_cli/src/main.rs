//! Arena - turn-based combat in the terminal
mod console;
mod narrate;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use combat_core::{Game, GameResult, RngRoller, TurnReport};
use console::Console;
use setup_core::{GameConstants, ManualSetup, Preset, RosterFile};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// A potion-carrying player against one standard opponent
    Default,
    /// A potion-carrying player against two weak opponents
    TwoWeak,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Default => Preset::Default,
            PresetArg::TwoWeak => Preset::TwoWeakOpponents,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "arena", version, about = "Turn-based combat in the terminal")]
struct Args {
    /// Built-in setup to play when no roster is given
    #[arg(long, value_enum, default_value_t = PresetArg::Default)]
    preset: PresetArg,

    /// TOML roster describing the player and opponents
    #[arg(long, conflicts_with = "preset")]
    roster: Option<PathBuf>,

    /// TOML file overriding the default character constants
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Print turn reports and the result as JSON lines; prompts move to stderr
    #[arg(long)]
    json: bool,

    /// Start without confirming the settings
    #[arg(long, short)]
    yes: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging();

    let constants = match &args.constants {
        Some(path) => GameConstants::load_from_path(path)?,
        None => GameConstants::default(),
    };
    let setup = match &args.roster {
        Some(path) => ManualSetup::from_roster(&RosterFile::load(path)?, constants)?,
        None => Preset::from(args.preset).setup(&constants)?,
    };

    let prompts: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut console = Console::new(io::stdin().lock(), prompts);
    run(&args, &setup, &mut console, &mut io::stdout())
}

/// Logs go to stderr so they never interleave with the prompts
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Play matches until the player stops, writing reports and results to `out`
fn run<R: BufRead, W: Write>(
    args: &Args,
    setup: &ManualSetup,
    console: &mut Console<R, W>,
    out: &mut dyn Write,
) -> Result<()> {
    let mut roller = match args.seed {
        Some(seed) => RngRoller::seeded(seed),
        None => RngRoller::from_entropy(),
    };

    loop {
        let mut game = setup.build_game()?;
        if !args.yes && !confirm_settings(&game, console)? {
            return Ok(());
        }

        let json = args.json;
        let mut failed_output = None;
        let result = game.play(&mut *console, &mut roller, |report| {
            if let Err(e) = write_report(&mut *out, report, json) {
                failed_output.get_or_insert(e);
            }
        })?;
        if let Some(e) = failed_output {
            return Err(e);
        }
        write_result(&mut *out, result, json)?;

        if args.yes || !console.confirm("Play again with the same settings")? {
            return Ok(());
        }
    }
}

fn confirm_settings<R: BufRead, W: Write>(game: &Game, console: &mut Console<R, W>) -> Result<bool> {
    console.say(&game.settings_info())?;
    Ok(console.confirm("Start the game with these settings")?)
}

fn write_report(out: &mut dyn Write, report: &TurnReport, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(report).context("failed to serialize turn report")?;
        writeln!(out, "{line}")?;
    } else {
        write!(out, "{}", narrate::render_report(report))?;
    }
    Ok(())
}

fn write_result(out: &mut dyn Write, result: GameResult, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({ "result": result }))?;
    } else {
        writeln!(out, "{}", narrate::render_result(result))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(flags: &[&str], input: &str) -> (String, String) {
        let args = Args::parse_from(std::iter::once("arena").chain(flags.iter().copied()));
        let setup = Preset::Default.setup(&GameConstants::default()).unwrap();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut out = Vec::new();
        run(&args, &setup, &mut console, &mut out).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(console.into_output()).unwrap(),
        )
    }

    #[test]
    fn test_json_output_is_json_lines_only() {
        let (out, prompts) = play(&["--json", "--seed", "3"], "y\n");

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert!(lines.len() >= 2);
        let (last, turns) = lines.split_last().unwrap();
        assert!(matches!(last["result"].as_str(), Some("win" | "loss")));
        for (n, turn) in turns.iter().enumerate() {
            assert_eq!(turn["turn"], n as u64 + 1);
        }

        assert!(prompts.contains("Start the game with these settings (y/n)? "));
        assert!(prompts.contains("Your turn!"));
        assert!(!out.contains("Your turn!"));
    }

    #[test]
    fn test_text_output_ends_with_result() {
        let (out, _) = play(&["--yes", "--seed", "3"], "");
        assert!(out.starts_with("---- Turn 1 ----\n"));
        let last = out.lines().last().unwrap();
        assert!(last == "You won!" || last == "You lost...");
    }

    #[test]
    fn test_declined_settings_play_nothing() {
        let (out, prompts) = play(&["--json"], "n\n");
        assert!(out.is_empty());
        assert!(prompts.contains("Player:"));
    }
}
