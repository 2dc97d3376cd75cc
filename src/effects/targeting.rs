//! Choosing slots and opponents.
//!
//! Bots decide through their policy and the answer is checked; humans are
//! asked until they give a valid answer.

use tracing::warn;

use super::resolver::PlayContext;
use crate::ai::{BotView, SwapTarget};
use crate::cards::Card;
use crate::core::{GameError, PlayerId};
use crate::io::ask_index;
use crate::zones::HAND_SIZE;

/// Reject a slot outside the hand.
pub fn check_slot(slot: usize) -> Result<usize, GameError> {
    if slot < HAND_SIZE {
        Ok(slot)
    } else {
        Err(GameError::InvalidDecision(format!("slot {slot} outside the hand")))
    }
}

/// Reject a swap partner that is the actor or not seated.
pub fn check_opponent(
    player: PlayerId,
    opponent: PlayerId,
    player_count: usize,
) -> Result<PlayerId, GameError> {
    if opponent == player || opponent.index() >= player_count {
        Err(GameError::InvalidDecision(format!(
            "{player} cannot swap with {opponent}"
        )))
    } else {
        Ok(opponent)
    }
}

/// Ask a human for one of their own slots. Returns it 0-based.
pub fn ask_slot(ctx: &mut PlayContext<'_>, prompt: &str) -> Result<usize, GameError> {
    let n = ask_index(&mut *ctx.input, &mut *ctx.display, prompt, 1..=HAND_SIZE)?;
    Ok(n - 1)
}

/// Slot to exchange for `offered`.
pub fn discard_slot(
    ctx: &mut PlayContext<'_>,
    player: PlayerId,
    offered: Card,
) -> Result<usize, GameError> {
    if ctx.table.player(player).is_bot() {
        let view = BotView::of(ctx.table, player);
        check_slot(ctx.policy.discard_slot(&view, offered, ctx.rng))
    } else {
        ask_slot(ctx, "Type which card in your hand you want to discard (1-4)")
    }
}

/// Own slot, opponent, and opponent's slot for a Swap.
pub fn swap_target(ctx: &mut PlayContext<'_>, player: PlayerId) -> Result<SwapTarget, GameError> {
    let player_count = ctx.table.player_count();

    if ctx.table.player(player).is_bot() {
        let view = BotView::of(ctx.table, player);
        let target = ctx.policy.swap_target(&view, ctx.rng);
        return Ok(SwapTarget {
            own_slot: check_slot(target.own_slot)?,
            opponent: check_opponent(player, target.opponent, player_count)?,
            their_slot: check_slot(target.their_slot)?,
        });
    }

    let own_slot = ask_slot(ctx, "Type which card in your hand you want to swap (1-4)")?;
    let opponent = ask_opponent(ctx, player)?;
    let their_slot = ask_slot(ctx, "Type which card of theirs you'd like to take (1-4)")?;
    Ok(SwapTarget {
        own_slot,
        opponent,
        their_slot,
    })
}

/// Ask a human which seat to swap with, refusing their own.
fn ask_opponent(ctx: &mut PlayContext<'_>, player: PlayerId) -> Result<PlayerId, GameError> {
    let player_count = ctx.table.player_count();
    let prompt = format!(
        "Type which player you'd like to swap with (1-{player_count}, you are {})",
        player.number()
    );
    loop {
        let n = ask_index(&mut *ctx.input, &mut *ctx.display, &prompt, 1..=player_count)?;
        let chosen = PlayerId::new((n - 1) as u8);
        match check_opponent(player, chosen, player_count) {
            Ok(opponent) => return Ok(opponent),
            Err(_) => {
                warn!(%player, "tried to swap with themselves");
                ctx.display
                    .show_warning("ERROR: please pick a player other than yourself");
            }
        }
    }
}

/// Which Draw2 card to keep (0 or 1).
pub fn keep_from_draw2(
    ctx: &mut PlayContext<'_>,
    player: PlayerId,
    drawn: [Card; 2],
) -> Result<usize, GameError> {
    if ctx.table.player(player).is_bot() {
        let view = BotView::of(ctx.table, player);
        let keep = ctx.policy.keep_from_draw2(&view, drawn, ctx.rng);
        if keep < 2 {
            Ok(keep)
        } else {
            Err(GameError::InvalidDecision(format!("Draw2 choice {keep} out of range")))
        }
    } else {
        ctx.display.show_message(&format!(
            "Your drawn cards are:\n1) {}\n2) {}",
            drawn[0], drawn[1]
        ));
        let n = ask_index(
            &mut *ctx.input,
            &mut *ctx.display,
            "Which would you like to use? (1-2)",
            1..=2,
        )?;
        Ok(n - 1)
    }
}
