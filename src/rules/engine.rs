//! Round engine.
//!
//! `RoundEngine` drives one round turn by turn:
//!
//! ```text
//! open -> AwaitingChoice(p) -> take_turn -> AwaitingChoice(next) ... -> RoundOver -> finish
//! ```
//!
//! A turn that ends in a rejected choice (unrecognized token, premature
//! end request) leaves the same seat to choose again and the turn
//! counter untouched. Every other turn advances the counter and conceals
//! all hands.

use std::str::FromStr;

use tracing::{debug, info, warn};

use super::scoring::{score_round, RoundResult};
use crate::ai::{BotPolicy, BotView, UniformPolicy};
use crate::cards::Card;
use crate::core::{GameError, GameRng, PlayerId, RoundConfig, Table};
use crate::effects::{play, Effect, Offer, PlayContext};
use crate::io::{ask_choice, GameDisplay, GameInput};
use crate::zones::HAND_SIZE;

/// Token a human types to end the round.
pub const END_TOKEN: &str = "CAT";

const TURN_PROMPT: &str =
    "Press Y to take the discard card, N to draw from the deck instead, or CAT to end the round";

/// A human's first decision on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnChoice {
    TakeDiscard,
    DrawFromDeck,
    CallEnd,
}

impl FromStr for TurnChoice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Y" => Ok(TurnChoice::TakeDiscard),
            "N" => Ok(TurnChoice::DrawFromDeck),
            END_TOKEN => Ok(TurnChoice::CallEnd),
            other => Err(GameError::invalid_input(format!("unrecognized choice {other:?}"))),
        }
    }
}

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingChoice(PlayerId),
    RoundOver,
}

/// What one call to [`RoundEngine::take_turn`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    TookDiscard(Effect),
    /// `effect` is `None` when the drawn card went straight to the discard pile.
    DrewFromDeck {
        player: PlayerId,
        card: Card,
        effect: Option<Effect>,
    },
    CalledEnd { player: PlayerId },
    InvalidInput { player: PlayerId, token: String },
    EndRejected { player: PlayerId, turn: u32 },
}

impl TurnOutcome {
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            TurnOutcome::TookDiscard(effect) => effect.player(),
            TurnOutcome::DrewFromDeck { player, .. }
            | TurnOutcome::CalledEnd { player }
            | TurnOutcome::InvalidInput { player, .. }
            | TurnOutcome::EndRejected { player, .. } => *player,
        }
    }

    /// Whether the turn counted. Rejected choices are replayed.
    #[must_use]
    pub fn completes_turn(&self) -> bool {
        matches!(
            self,
            TurnOutcome::TookDiscard(_) | TurnOutcome::DrewFromDeck { .. }
        )
    }
}

/// Turn sequencer for a single round.
pub struct RoundEngine<I, D, P = UniformPolicy> {
    table: Table,
    input: I,
    display: D,
    policy: P,
    /// Stream the bot policy draws from, separate from the deck's.
    policy_rng: GameRng,
    phase: RoundPhase,
    reminded: bool,
    result: Option<RoundResult>,
}

impl<I: GameInput, D: GameDisplay, P: BotPolicy> RoundEngine<I, D, P> {
    /// Deal a fresh table from `config`.
    pub fn new(config: RoundConfig, input: I, display: D, policy: P) -> Result<Self, GameError> {
        let table = Table::deal(config)?;
        Ok(Self::with_table(table, input, display, policy))
    }

    /// Engine over an already dealt (or stacked) table.
    pub fn with_table(table: Table, input: I, display: D, policy: P) -> Self {
        let policy_rng = GameRng::new(table.config.seed).for_context("bots");
        let phase = RoundPhase::AwaitingChoice(table.current_player());
        Self {
            table,
            input,
            display,
            policy,
            policy_rng,
            phase,
            reminded: false,
            result: None,
        }
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Scores, once the round is finished.
    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn into_parts(self) -> (Table, I, D) {
        (self.table, self.input, self.display)
    }

    /// Opening: rules, a look at the human's outer two cards, their name.
    pub fn open(&mut self) -> Result<(), GameError> {
        self.display.show_rules();
        let Some(human) = self.table.human() else {
            return Ok(());
        };

        self.input.acknowledge(
            "Two cards in your hand will display now. Take a good look, \
             because they'll be hidden after that! Press ENTER to continue",
        );
        let seat = self.table.player_mut(human);
        seat.hand_mut().set_known(0, true);
        seat.hand_mut().set_known(HAND_SIZE - 1, true);
        let view = seat.hand().owner_view();
        let name = seat.name().to_string();
        self.display.show_hand_masked(&name, &view);

        if self.table.config.prompt_for_name {
            let answer = self
                .input
                .request_text("Ready to play? Type your name, then press ENTER to continue")
                .ok_or(GameError::InputClosed)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                self.table.player_mut(human).set_name(answer);
            }
        }

        self.table.player_mut(human).hand_mut().conceal_all();
        Ok(())
    }

    /// Run one turn for the seat awaiting a choice.
    ///
    /// Returns `None` once the round is over. On error the table is put
    /// back the way it was before the turn.
    pub fn take_turn(&mut self) -> Result<Option<TurnOutcome>, GameError> {
        let RoundPhase::AwaitingChoice(player) = self.phase else {
            return Ok(None);
        };

        if let Some(max) = self.table.config.max_turns {
            if self.table.turn_counter >= max {
                info!(turns = self.table.turn_counter, "turn limit reached");
                self.display.show_message("Turn limit reached, the round is over");
                self.phase = RoundPhase::RoundOver;
                return Ok(None);
            }
        }

        self.remind();
        // A failed turn must not leave cards in flight.
        let snapshot = self.table.clone();
        let played = if self.table.player(player).is_bot() {
            self.bot_turn(player)
        } else {
            self.human_turn(player)
        };
        let outcome = match played {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%player, %err, "turn failed, table restored");
                self.table = snapshot;
                return Err(err);
            }
        };

        if matches!(outcome, TurnOutcome::CalledEnd { .. }) {
            self.phase = RoundPhase::RoundOver;
        } else if outcome.completes_turn() {
            self.table.complete_turn();
            self.phase = RoundPhase::AwaitingChoice(self.table.current_player());
        }
        debug!(%player, ?outcome, turn = self.table.turn_counter, "turn");
        Ok(Some(outcome))
    }

    /// Play turns until the round ends, then score it.
    pub fn run(&mut self) -> Result<RoundResult, GameError> {
        info!(
            players = self.table.player_count(),
            seed = self.table.config.seed,
            "round started"
        );
        while self.take_turn()?.is_some() {}
        self.finish()
    }

    /// `open` followed by `run`.
    pub fn play_round(&mut self) -> Result<RoundResult, GameError> {
        self.open()?;
        self.run()
    }

    /// Finalize hands, score, and show the results. Repeated calls return
    /// the first result. A failed scoring leaves the table untouched.
    pub fn finish(&mut self) -> Result<RoundResult, GameError> {
        if let Some(result) = &self.result {
            return Ok(result.clone());
        }
        self.phase = RoundPhase::RoundOver;

        let result = score_round(&mut self.table)?;
        for seat in self.table.players.values() {
            self.display
                .show_hand_masked(seat.name(), &seat.hand().revealed_view());
        }
        self.display.show_message("GAME OVER");
        self.display.show_final_results(&result);
        info!(winners = ?result.winner_names(), "round over");

        self.result = Some(result.clone());
        Ok(result)
    }

    fn remind(&mut self) {
        let due = self.table.config.reminder_turns_per_player * self.table.player_count() as u32;
        if self.reminded || self.table.turn_counter != due || self.table.human().is_none() {
            return;
        }
        self.reminded = true;
        self.display.show_message(&format!(
            "Reminder: you can end the round on your turn by typing {END_TOKEN} \
             instead of playing a card"
        ));
    }

    fn bot_turn(&mut self, player: PlayerId) -> Result<TurnOutcome, GameError> {
        let take = {
            let view = BotView::of(&self.table, player);
            self.policy.take_discard(&view, &mut self.policy_rng)
        };
        let name = self.table.player(player).name().to_string();

        if take {
            let card = self.table.discard.take_top().ok_or(GameError::NoDiscard)?;
            self.display
                .show_message(&format!("{name} is playing the discard card, {card}"));
            let effect = self.resolve(player, Offer::visible(card))?;
            Ok(TurnOutcome::TookDiscard(effect))
        } else {
            let card = self.table.draw()?;
            self.display
                .show_message(&format!("{name} is playing a card they drew from the deck"));
            let effect = self.resolve(player, Offer::hidden(card))?;
            Ok(TurnOutcome::DrewFromDeck {
                player,
                card,
                effect: Some(effect),
            })
        }
    }

    fn human_turn(&mut self, player: PlayerId) -> Result<TurnOutcome, GameError> {
        let name = self.table.player(player).name().to_string();
        self.display
            .show_message(&format!("{}'S TURN", name.to_uppercase()));
        let view = self.table.player(player).hand().owner_view();
        self.display.show_hand_masked(&name, &view);
        let top = self.table.discard_top().ok_or(GameError::NoDiscard)?;
        self.display.show_discard_top(top);

        let token = self
            .input
            .request_choice(TURN_PROMPT, &["Y", "N", END_TOKEN])
            .ok_or(GameError::InputClosed)?;

        match token.parse::<TurnChoice>() {
            Err(err) => {
                warn!(%player, %err, "turn choice rejected");
                self.display.show_warning("Unrecognized input! Please go again.");
                Ok(TurnOutcome::InvalidInput { player, token })
            }
            Ok(TurnChoice::TakeDiscard) => {
                let card = self.table.discard.take_top().ok_or(GameError::NoDiscard)?;
                let effect = self.resolve(player, Offer::visible(card))?;
                Ok(TurnOutcome::TookDiscard(effect))
            }
            Ok(TurnChoice::DrawFromDeck) => {
                let card = self.table.draw()?;
                self.display.show_message(&format!("Top deck card: {card}"));
                let answer = ask_choice(
                    &mut self.input,
                    &mut self.display,
                    "Y to take the card, N to leave it",
                    &["Y", "N"],
                )?;
                if answer == "Y" {
                    let effect = self.resolve(player, Offer::visible(card))?;
                    Ok(TurnOutcome::DrewFromDeck {
                        player,
                        card,
                        effect: Some(effect),
                    })
                } else {
                    self.table.discard.push(card);
                    self.display
                        .show_message(&format!("{name} did not take any cards"));
                    self.input.acknowledge("Press ENTER to continue");
                    Ok(TurnOutcome::DrewFromDeck {
                        player,
                        card,
                        effect: None,
                    })
                }
            }
            Ok(TurnChoice::CallEnd) => {
                let turn = self.table.personal_turn(player);
                if turn >= self.table.config.min_turn_to_end {
                    info!(%player, turn, "end of round called");
                    Ok(TurnOutcome::CalledEnd { player })
                } else {
                    let err = GameError::PrematureEnd { turn };
                    warn!(%player, %err, "end request rejected");
                    self.display.show_warning("Cannot end game on your first turn!");
                    Ok(TurnOutcome::EndRejected { player, turn })
                }
            }
        }
    }

    fn resolve(&mut self, player: PlayerId, offer: Offer) -> Result<Effect, GameError> {
        let mut ctx = PlayContext::new(
            &mut self.table,
            &mut self.input,
            &mut self.display,
            &self.policy,
            &mut self.policy_rng,
        );
        play(&mut ctx, player, offer, 0)
    }
}
