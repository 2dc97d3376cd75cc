//! Terminal collaborators for the `ratcat` binary.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use ratcat::io::{GameDisplay, GameInput};
use ratcat::{Card, HandView, RoundResult};

const RULES: &str = "\
RAT-A-TAT-CAT

Everyone holds four cards face down. At the end of the round every card
counts its value and the lowest total wins.

On your turn, take the face-up discard (Y) or draw from the deck (N).
A card you keep replaces one of yours, which goes on the discard pile.

Power cards:
  PEEK   look at one of your own cards
  SWAP   trade one of your cards with an opponent's
  DRAW2  draw two cards, keep one, and play it

Power cards left in a hand at the end are replaced from the deck.
From your second turn on you may type CAT to end the round.";

/// Reads answers line by line from stdin.
pub struct ConsoleInput {
    stdin: io::Stdin,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        println!("{prompt}");
        print!("> ");
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl GameInput for ConsoleInput {
    fn request_choice(&mut self, prompt: &str, _alternatives: &[&str]) -> Option<String> {
        self.ask(prompt)
    }

    fn request_index(&mut self, prompt: &str, _range: RangeInclusive<usize>) -> Option<String> {
        self.ask(prompt)
    }

    fn request_text(&mut self, prompt: &str) -> Option<String> {
        self.ask(prompt)
    }

    fn acknowledge(&mut self, prompt: &str) {
        let _ = self.ask(prompt);
    }
}

/// Prints to stdout.
pub struct ConsoleDisplay;

impl GameDisplay for ConsoleDisplay {
    fn show_rules(&mut self) {
        println!("{RULES}\n");
    }

    fn show_hand_masked(&mut self, owner: &str, view: &HandView) {
        println!("{owner}'s hand:\t{view}");
    }

    fn show_message(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_warning(&mut self, text: &str) {
        println!("!! {text}");
    }

    fn show_discard_top(&mut self, card: Card) {
        println!("Discard pile: {card}");
    }

    fn show_final_results(&mut self, result: &RoundResult) {
        println!();
        for entry in &result.scores {
            let cards: Vec<String> = entry.hand.iter().map(ToString::to_string).collect();
            println!("{}:\t{}\t= {}", entry.name, cards.join("\t"), entry.score);
        }
        println!();
        match result.winner_names().as_slice() {
            [one] => println!("{one} wins!"),
            names => println!("Tie between {}!", names.join(" and ")),
        }
    }
}
