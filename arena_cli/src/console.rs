//! Console - the player's action source over a text stream

use combat_core::{Action, ActionContext, Character, PlayerActionSource};
use std::io::{self, BufRead, Write};

/// Prompts the player on `output` and reads answers from `input`
///
/// Invalid answers are rejected and the question repeated. If the input is
/// closed the player keeps attacking the first opponent still standing.
pub struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            closed: false,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Repeat `question` until the answer is one of `valid`. `None` once input is closed.
    pub fn ask(&mut self, question: &str, valid: &[&str]) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.read_answer(question)? else {
                return Ok(None);
            };
            if valid.contains(&answer.as_str()) {
                return Ok(Some(answer));
            }
            writeln!(self.output, "Invalid choice.")?;
        }
    }

    /// Yes/no question; a closed input counts as no
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(&format!("{question} (y/n)? "), &["y", "n"])?.as_deref() == Some("y"))
    }

    fn read_answer(&mut self, question: &str) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::warn!("input closed");
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choose_action_inner(&mut self, ctx: &ActionContext<'_>) -> io::Result<Action> {
        writeln!(self.output, "Your turn!")?;
        if !ctx.can_drink() {
            writeln!(self.output, "You cannot drink potions, so you attack.")?;
            return Ok(Action::Attack);
        }

        let question = format!(
            "Attack ({}) or drink a potion ({})? ",
            Action::Attack.token(),
            Action::DrinkPotion.token()
        );
        let tokens: Vec<&str> = Action::ALL.iter().map(Action::token).collect();
        let answer = self.ask(&question, &tokens)?;
        Ok(answer
            .as_deref()
            .and_then(Action::from_token)
            .unwrap_or(Action::Attack))
    }

    fn choose_target_inner(&mut self, ctx: &ActionContext<'_>) -> io::Result<usize> {
        writeln!(self.output, "Opponents:")?;
        for (index, opponent) in ctx.opponents.iter().enumerate() {
            writeln!(self.output, "\t{}. {}", index + 1, opponent)?;
        }

        let choices: Vec<String> = (1..=ctx.opponents.len()).map(|i| i.to_string()).collect();
        let valid: Vec<&str> = choices.iter().map(String::as_str).collect();
        let question = format!("Which opponent do you attack (1-{})? ", ctx.opponents.len());

        match self.ask(&question, &valid)? {
            Some(answer) => Ok(answer.parse().unwrap_or(1)),
            None => Ok(first_standing(ctx.opponents)),
        }
    }
}

fn first_standing(opponents: &[Character]) -> usize {
    opponents
        .iter()
        .position(Character::is_alive)
        .map_or(1, |index| index + 1)
}

impl<R: BufRead, W: Write> PlayerActionSource for Console<R, W> {
    fn choose_action(&mut self, ctx: &ActionContext<'_>) -> Action {
        self.choose_action_inner(ctx).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "console failed, attacking");
            Action::Attack
        })
    }

    fn choose_target(&mut self, ctx: &ActionContext<'_>) -> usize {
        self.choose_target_inner(ctx).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "console failed, attacking the first opponent standing");
            first_standing(ctx.opponents)
        })
    }

    fn acknowledge_skip(&mut self, _player: &Character) {
        let result = self
            .say("You skip this turn: you spent the last one searching your bag for a potion.")
            .and_then(|_| self.read_answer("Press Enter to continue..."));
        if let Err(e) = result {
            tracing::warn!(error = %e, "console failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{CharacterStats, Inventory};
    use std::io::Cursor;

    fn character(name: &str, drinks: bool) -> Character {
        Character::new(name, CharacterStats::new(20, 1, 2, drinks).unwrap(), Inventory::new()).unwrap()
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut console = console("3\nfoo\n2\n");
        let player = character("Hero", true);
        let opponents = vec![character("Foe", false)];
        let ctx = ActionContext {
            turn: 1,
            player: &player,
            opponents: &opponents,
        };

        assert_eq!(console.choose_action(&ctx), Action::DrinkPotion);
        let output = String::from_utf8(console.output).unwrap();
        assert_eq!(output.matches("Invalid choice.").count(), 2);
    }

    #[test]
    fn test_target_choice() {
        let mut console = console("0\n2\n");
        let player = character("Hero", true);
        let opponents = vec![character("A", false), character("B", false)];
        let ctx = ActionContext {
            turn: 1,
            player: &player,
            opponents: &opponents,
        };
        assert_eq!(console.choose_target(&ctx), 2);
    }

    #[test]
    fn test_closed_input_keeps_attacking() {
        let mut console = console("");
        let player = character("Hero", true);
        let mut opponents = vec![character("A", false), character("B", false)];
        opponents[0].set_current_life(0);
        let ctx = ActionContext {
            turn: 1,
            player: &player,
            opponents: &opponents,
        };
        assert_eq!(console.choose_action(&ctx), Action::Attack);
        assert_eq!(console.choose_target(&ctx), 2);
        assert!(!console.confirm("Again").unwrap());
    }

    #[test]
    fn test_non_drinker_is_not_asked() {
        let mut console = console("");
        let player = character("Hero", false);
        let opponents = vec![character("Foe", false)];
        let ctx = ActionContext {
            turn: 1,
            player: &player,
            opponents: &opponents,
        };
        assert_eq!(console.choose_action(&ctx), Action::Attack);
        assert!(!console.closed);
    }
}
