//! Plain-text rendering of turn reports

use combat_core::{Actor, DrinkOutcome, GameResult, TurnEvent, TurnReport};
use std::fmt::Write;

fn subject(report: &TurnReport, actor: Actor) -> String {
    match actor {
        Actor::Player => "You".to_string(),
        Actor::Opponent(_) => report.name_of(actor).to_string(),
    }
}

fn object(report: &TurnReport, actor: Actor) -> String {
    match actor {
        Actor::Player => "you".to_string(),
        Actor::Opponent(_) => report.name_of(actor).to_string(),
    }
}

fn event_line(report: &TurnReport, event: &TurnEvent) -> String {
    match *event {
        TurnEvent::Attacked {
            attacker,
            target,
            damage,
            target_life,
        } => {
            let verb = if attacker == Actor::Player { "attack" } else { "attacks" };
            let mut line = format!(
                "{} {verb} {} for {damage} damage.",
                subject(report, attacker),
                object(report, target)
            );
            if target_life <= 0 {
                match target {
                    Actor::Player => line.push_str(" You are down!"),
                    Actor::Opponent(_) => {
                        let _ = write!(line, " {} is down!", report.name_of(target));
                    }
                }
            }
            line
        }
        TurnEvent::DrankPotion { actor, outcome, life } => match outcome {
            DrinkOutcome::Recovered(points) => format!(
                "{} drank a potion and recovered {points} life ({life} now).",
                subject(report, actor)
            ),
            DrinkOutcome::NothingFound => format!(
                "{} searched the bag but found no potion, and will skip the next turn.",
                subject(report, actor)
            ),
        },
        TurnEvent::SkippedTurn { actor } => {
            format!("{} skipped the turn.", subject(report, actor))
        }
        TurnEvent::AlreadyDead { actor } => {
            format!("{} is dead and does nothing.", subject(report, actor))
        }
    }
}

/// Turn header, one line per event, then every character's life
pub fn render_report(report: &TurnReport) -> String {
    let mut text = format!("---- Turn {} ----\n", report.turn);
    for event in &report.events {
        text.push_str(&event_line(report, event));
        text.push('\n');
    }
    text.push_str("Turn summary:\n");
    for status in &report.life {
        let _ = writeln!(
            text,
            "    {} has {}/{} life",
            status.name, status.current_life, status.max_life
        );
    }
    text
}

pub fn render_result(result: GameResult) -> &'static str {
    match result {
        GameResult::Win => "You won!",
        GameResult::Loss => "You lost...",
    }
}
