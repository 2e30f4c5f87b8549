//! Interactive terminal front end.
//!
//! `Console` reads answers line by line and narrates the game. It seats
//! players by asking for their names and answers the keep-rolling question
//! for manual players, optionally consulting any strategy first.

use std::io::{self, BufRead, Write};

use crate::advice::{Advisor, Decision};
use crate::core::{GameError, Player, Result};
use crate::dice::Roll;
use crate::game::GameReport;
use crate::turn::{Interaction, TurnOutcome, TurnPhase};

use super::confirm::{confirm, Ask};
use super::display::render_die;

/// Line-based console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    #[must_use]
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for player names until nobody else wants to join.
    pub fn register(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        loop {
            let name = self.ask(&format!("Please enter player {}'s name: ", names.len() + 1))?;
            let name = name.trim().to_string();
            if name.is_empty() {
                continue;
            }
            self.say(&format!("Welcome, {}! Good luck!", name))?;
            names.push(name);

            if !confirm(self, "Are there any other players?", None)? {
                return Ok(names);
            }
        }
    }

    /// Ask which strategy to consult, repeating until one is picked.
    fn choose_strategy(&mut self) -> Result<Advisor> {
        let mut menu = vec![
            String::new(),
            "Select the strategy to employ:".to_string(),
            "==================================".to_string(),
        ];
        for advisor in Advisor::STRATEGIES {
            menu.push(format!("{} - {}", advisor.id(), advisor.label()));
        }
        menu.push(String::new());
        menu.push("Which strategy would you like to check? ".to_string());
        let menu = menu.join("\n");

        loop {
            let response = self.ask(&menu)?;
            let picked = response
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|id| Advisor::try_from(id).ok())
                .filter(|advisor| !advisor.is_manual());
            match picked {
                Some(advisor) => return Ok(advisor),
                None => self.say(&format!(
                    "Please enter a number from 1 to {}.",
                    Advisor::STRATEGIES.len()
                ))?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Ask for Console<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Interaction for Console<R, W> {
    fn round_started(&mut self, round: u32) -> Result<()> {
        self.say(&format!("Round {}!", round))
    }

    fn turn_started(&mut self, player: &Player) -> Result<()> {
        self.ask(&format!(
            "Ok, {}, Hit [Enter] to make your first roll!",
            player.name
        ))?;
        Ok(())
    }

    fn rolled(&mut self, player: &Player, roll: &Roll, phase: TurnPhase) -> Result<()> {
        self.say("Results of this roll:")?;
        for die in roll {
            let rendered = render_die(die, self.color);
            self.say(&rendered)?;
        }
        self.say(&format!("Total points this turn: {}", player.turn_score))?;
        self.say(&format!("Total damage this turn: {}", player.turn_damage))?;
        if phase == TurnPhase::Busted {
            self.say("Sorry! You busted!")
        } else {
            self.say(&format!(
                "If you stop now, you will have {} points.",
                player.score + player.turn_score
            ))
        }
    }

    fn turn_ended(&mut self, player: &Player, outcome: TurnOutcome) -> Result<()> {
        match outcome {
            TurnOutcome::Busted => Ok(()),
            TurnOutcome::Stopped { .. } => self.say(&format!(
                "Ok, {} stops and moves on to the next player!",
                player.name
            )),
        }
    }

    fn last_round(&mut self, player: &Player) -> Result<()> {
        self.say(&format!(
            "{} has {} points! Last round!",
            player.name, player.score
        ))
    }

    fn game_over(&mut self, players: &[Player], report: &GameReport) -> Result<()> {
        self.say(&format!(
            "Game over!  The game finished in {} rounds.",
            report.rounds
        ))?;
        for (player, score) in players.iter().zip(&report.scores) {
            self.say(&format!("{}: {} points", player.name, score))?;
        }
        self.say(&format!("{} wins!", players[report.winner.index()].name))
    }

    fn decide(&mut self, decision: &Decision<'_>) -> Result<bool> {
        let mut get_advice = confirm(self, "Get advice?", None)?;
        while get_advice {
            let advisor = self.choose_strategy()?;
            let verdict = match advisor.advise(decision) {
                Some(true) => "keep rolling",
                _ => "stay",
            };
            self.say(&format!(
                "Strategy {} suggests that you {}!",
                advisor.id(),
                verdict
            ))?;
            get_advice = confirm(self, "Want to check another strategy?", None)?;
        }

        let keep_rolling = confirm(self, "Keep rolling?", None)?;
        if keep_rolling {
            self.say("Ok, rolling again!")?;
        }
        Ok(keep_rolling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Rules};
    use crate::dice::{DiceCounts, Pool};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_register_collects_names() {
        let mut console = console("Ann\ny\n\nBob\nno\n");
        let names = console.register().unwrap();
        assert_eq!(names, ["Ann", "Bob"]);
        assert!(output(console).contains("Welcome, Bob! Good luck!"));
    }

    #[test]
    fn test_register_closed_input() {
        let mut console = console("Ann\n");
        assert!(matches!(console.register(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_decide_with_advice() {
        let rules = Rules::default();
        let pool = Pool::initialize(rules.reserve);
        let rerolls = DiceCounts::zero();
        let players = vec![Player::new(PlayerId::new(0), "Ann", Advisor::Manual)];
        let decision = Decision {
            pool: &pool,
            rerolls: &rerolls,
            retained: &rerolls,
            turn_score: 2,
            turn_damage: 2,
            player: PlayerId::new(0),
            players: &players,
            last_round: false,
            rules: &rules,
        };

        // Ask for advice, pick an invalid then a valid strategy, stop asking, then stay.
        let mut console = console("y\n9\n1\nn\nn\n");
        assert!(!console.decide(&decision).unwrap());

        let text = output(console);
        assert!(text.contains("Please enter a number from 1 to 4."));
        assert!(text.contains("Strategy 1 suggests that you stay!"));
    }

    #[test]
    fn test_decide_keep_rolling() {
        let rules = Rules::default();
        let pool = Pool::initialize(rules.reserve);
        let rerolls = DiceCounts::zero();
        let players = vec![Player::new(PlayerId::new(0), "Ann", Advisor::Manual)];
        let decision = Decision {
            pool: &pool,
            rerolls: &rerolls,
            retained: &rerolls,
            turn_score: 0,
            turn_damage: 0,
            player: PlayerId::new(0),
            players: &players,
            last_round: false,
            rules: &rules,
        };

        let mut console = console("no\nyes\n");
        assert!(console.decide(&decision).unwrap());
        assert!(output(console).contains("Ok, rolling again!"));
    }

    #[test]
    fn test_rolled_reports_bust() {
        let mut player = Player::new(PlayerId::new(0), "Ann", Advisor::Cautious);
        player.turn_damage = 3;
        let mut console = console("");
        console
            .rolled(&player, &Roll::new(), TurnPhase::Busted)
            .unwrap();
        let text = output(console);
        assert!(text.contains("Total damage this turn: 3"));
        assert!(text.contains("Sorry! You busted!"));
    }
}
