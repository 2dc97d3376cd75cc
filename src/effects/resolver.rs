//! Play dispatch.
//!
//! [`play`] is the single entry point for putting an offered card into
//! effect. It picks the exchange protocol from the card and resolves it
//! against the table. Draw2 re-enters [`play`] with the card it keeps,
//! one level deeper; the depth guard bounds that recursion.

use tracing::debug;

use super::effect::{Effect, Offer};
use super::exchange::Exchange;
use crate::ai::BotPolicy;
use crate::core::{GameError, GameRng, PlayerId, Table};
use crate::io::{GameDisplay, GameInput};

/// Everything an exchange may touch while it resolves.
pub struct PlayContext<'a> {
    pub table: &'a mut Table,
    pub input: &'a mut dyn GameInput,
    pub display: &'a mut dyn GameDisplay,
    pub policy: &'a dyn BotPolicy,
    /// Stream the bot policy draws from.
    pub rng: &'a mut GameRng,
}

impl<'a> PlayContext<'a> {
    pub fn new(
        table: &'a mut Table,
        input: &'a mut dyn GameInput,
        display: &'a mut dyn GameDisplay,
        policy: &'a dyn BotPolicy,
        rng: &'a mut GameRng,
    ) -> Self {
        Self {
            table,
            input,
            display,
            policy,
            rng,
        }
    }

    /// Display name of a seat.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> String {
        self.table.player(player).name().to_string()
    }
}

/// Put `offer` into effect for `player`.
///
/// `depth` is 0 for a turn's own play and grows by one for each Draw2
/// replay. Only top-level plays wait for an acknowledgement.
pub fn play(
    ctx: &mut PlayContext<'_>,
    player: PlayerId,
    offer: Offer,
    depth: u8,
) -> Result<Effect, GameError> {
    let limit = ctx.table.config.max_play_depth;
    if depth >= limit {
        return Err(GameError::RecursionLimit { depth: limit });
    }

    let exchange = Exchange::for_card(offer.card);
    debug!(%player, card = %offer.card, hidden = offer.hidden, ?exchange, depth, "play");
    let effect = exchange.resolve(ctx, player, offer, depth)?;

    if depth == 0 {
        ctx.input.acknowledge("Press ENTER to continue");
    }
    Ok(effect)
}
