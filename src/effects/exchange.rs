//! The four exchange protocols.
//!
//! | Card        | Protocol | Discard top afterwards      |
//! |-------------|----------|-----------------------------|
//! | 0-9         | Normal   | the card it replaced        |
//! | PEEK        | Peek     | the Peek                    |
//! | DRAW2       | Draw2    | the Draw2                   |
//! | SWAP        | Swap     | the Swap                    |
//!
//! Draw2 plays one of its two drawn cards through [`play`] again, hidden
//! from onlookers, so the discard top ends up as whatever that inner play
//! discards.

use tracing::debug;

use super::effect::{Effect, Offer};
use super::resolver::{play, PlayContext};
use super::targeting;
use crate::cards::{Card, PowerCard};
use crate::core::{Draw2Leftover, GameError, PlayerId};

/// Exchange protocol, selected purely by the offered card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exchange {
    Normal,
    Peek,
    Draw2,
    Swap,
}

impl Exchange {
    #[must_use]
    pub const fn for_card(card: Card) -> Self {
        match card {
            Card::Power(PowerCard::Peek) => Exchange::Peek,
            Card::Power(PowerCard::Draw2) => Exchange::Draw2,
            Card::Power(PowerCard::Swap) => Exchange::Swap,
            Card::Number(_) => Exchange::Normal,
        }
    }

    /// Apply the protocol to the table.
    pub fn resolve(
        self,
        ctx: &mut PlayContext<'_>,
        player: PlayerId,
        offer: Offer,
        depth: u8,
    ) -> Result<Effect, GameError> {
        match self {
            Exchange::Normal => resolve_normal(ctx, player, offer),
            Exchange::Peek => resolve_peek(ctx, player, offer),
            Exchange::Draw2 => resolve_draw2(ctx, player, offer, depth),
            Exchange::Swap => resolve_swap(ctx, player, offer),
        }
    }
}

fn resolve_normal(
    ctx: &mut PlayContext<'_>,
    player: PlayerId,
    offer: Offer,
) -> Result<Effect, GameError> {
    let slot = targeting::discard_slot(ctx, player, offer.card)?;

    let acting = ctx.table.player_mut(player);
    let discarded = acting.hand_mut().replace(slot, offer.card);
    // The owner always knows what they just put down
    acting.hand_mut().set_known(slot, true);
    let view = if acting.is_bot() {
        acting.hand().onlooker_view(Some(slot), offer.hidden)
    } else {
        acting.hand().owner_view()
    };
    ctx.table.discard.push(discarded);
    debug!(%player, slot, kept = %offer.card, %discarded, "exchanged");

    let name = ctx.name(player);
    let shown = if offer.hidden {
        "??".to_string()
    } else {
        offer.card.to_string()
    };
    ctx.display.show_hand_masked(&name, &view);
    ctx.display
        .show_message(&format!("{name} exchanged {discarded} for {shown}"));

    Ok(Effect::Exchanged {
        player,
        slot,
        kept: offer.card,
        discarded,
    })
}

fn resolve_peek(
    ctx: &mut PlayContext<'_>,
    player: PlayerId,
    offer: Offer,
) -> Result<Effect, GameError> {
    ctx.table.discard.push(offer.card);
    let name = ctx.name(player);

    if ctx.table.player(player).is_bot() {
        debug!(%player, "bot played peek");
        ctx.display.show_message(&format!("{name} played a PEEK card"));
        return Ok(Effect::Peeked { player, slot: None });
    }

    let slot = targeting::ask_slot(ctx, "Type which card in your hand you want to look at (1-4)")?;
    let view = ctx.table.player(player).hand().peek_view(slot);
    ctx.display.show_hand_masked(&name, &view);
    debug!(%player, slot, "peeked");

    Ok(Effect::Peeked {
        player,
        slot: Some(slot),
    })
}

fn resolve_draw2(
    ctx: &mut PlayContext<'_>,
    player: PlayerId,
    offer: Offer,
    depth: u8,
) -> Result<Effect, GameError> {
    ctx.table.discard.push(offer.card);
    let first = ctx.table.draw()?;
    let second = match ctx.table.draw() {
        Ok(card) => card,
        Err(err) => {
            ctx.table.deck.restock([first]);
            return Err(err);
        }
    };
    let drawn = [first, second];

    if ctx.table.player(player).is_bot() {
        let name = ctx.name(player);
        ctx.display.show_message(&format!("{name} played a DRAW2 card"));
    }
    let kept = targeting::keep_from_draw2(ctx, player, drawn)?;
    let leftover = drawn[1 - kept];

    match ctx.table.config.draw2_leftover {
        Draw2Leftover::Destroy => {
            debug!(%player, %leftover, "draw2 leftover removed from play");
            ctx.table.removed.push(leftover);
        }
        Draw2Leftover::Bury => {
            debug!(%player, %leftover, "draw2 leftover buried in the discard pile");
            ctx.table.discard.bury(leftover);
        }
    }

    let then = play(ctx, player, Offer::hidden(drawn[kept]), depth + 1)?;

    Ok(Effect::DrewTwo {
        player,
        drawn,
        kept,
        leftover,
        then: Box::new(then),
    })
}

fn resolve_swap(
    ctx: &mut PlayContext<'_>,
    player: PlayerId,
    offer: Offer,
) -> Result<Effect, GameError> {
    let target = targeting::swap_target(ctx, player)?;

    let given = ctx.table.player(player).hand().card(target.own_slot);
    let taken = ctx.table.player(target.opponent).hand().card(target.their_slot);

    let acting = ctx.table.player_mut(player).hand_mut();
    acting.replace(target.own_slot, taken);
    acting.set_known(target.own_slot, true);
    let acting_view = acting.onlooker_view(Some(target.own_slot), false);

    let other = ctx.table.player_mut(target.opponent).hand_mut();
    other.replace(target.their_slot, given);
    other.set_known(target.their_slot, false);
    let other_view = other.onlooker_view(Some(target.their_slot), true);

    ctx.table.discard.push(offer.card);
    debug!(
        %player,
        opponent = %target.opponent,
        own_slot = target.own_slot,
        their_slot = target.their_slot,
        "swapped"
    );

    let name = ctx.name(player);
    let other_name = ctx.name(target.opponent);
    ctx.display.show_message("Swap!");
    ctx.display.show_hand_masked(&name, &acting_view);
    ctx.display.show_hand_masked(&other_name, &other_view);
    ctx.display
        .show_message(&format!("{name} took {taken} from {other_name}"));

    Ok(Effect::Swapped {
        player,
        own_slot: target.own_slot,
        opponent: target.opponent,
        their_slot: target.their_slot,
        taken,
        given,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_card() {
        assert_eq!(Exchange::for_card(Card::PEEK), Exchange::Peek);
        assert_eq!(Exchange::for_card(Card::DRAW2), Exchange::Draw2);
        assert_eq!(Exchange::for_card(Card::SWAP), Exchange::Swap);
        for v in 0..=9 {
            assert_eq!(Exchange::for_card(Card::number(v)), Exchange::Normal);
        }
    }
}
