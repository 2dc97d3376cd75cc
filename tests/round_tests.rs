//! Round flow tests: opening, turn sequencing, end requests, scoring.

use ratcat::core::{EmptyDeckPolicy, GameError, Player, PlayerId, RoundConfig, Table};
use ratcat::io::{DisplayEvent, NullDisplay, RecordingDisplay, ScriptedInput};
use ratcat::rules::{score_round, RoundEngine, RoundPhase, TurnOutcome};
use ratcat::zones::{Hand, SlotView};
use ratcat::{Card, Deck, UniformPolicy};

// ============================================================================
// Helpers
// ============================================================================

fn n(v: u8) -> Card {
    Card::number(v)
}

/// Human against one bot, dealt from `seed`.
fn heads_up(seed: u64, answers: &[&str]) -> RoundEngine<ScriptedInput, RecordingDisplay> {
    let config = RoundConfig::new(seed).with_bots(1).without_name_prompt();
    recorded(config, answers)
}

fn recorded(config: RoundConfig, answers: &[&str]) -> RoundEngine<ScriptedInput, RecordingDisplay> {
    let input = ScriptedInput::new(answers.iter().copied());
    RoundEngine::new(config, input, RecordingDisplay::new(), UniformPolicy).unwrap()
}

fn reminders(engine: &RoundEngine<ScriptedInput, RecordingDisplay>) -> usize {
    engine
        .display()
        .messages()
        .filter(|m| m.starts_with("Reminder"))
        .count()
}

// ============================================================================
// Opening
// ============================================================================

#[test]
fn test_open_shows_outer_cards_then_hides_them() {
    let config = RoundConfig::new(5).with_bots(2);
    let mut engine = recorded(config, &["  Alice "]);
    let cards = engine.table().player(PlayerId::new(0)).hand().cards();

    engine.open().unwrap();

    assert_eq!(engine.display().events[0], DisplayEvent::Rules);
    let view = engine.display().hands_of("Luke").next().copied().unwrap();
    assert_eq!(view.slots[0], SlotView::FaceUp(cards[0]));
    assert_eq!(view.slots[1], SlotView::FaceDown);
    assert_eq!(view.slots[2], SlotView::FaceDown);
    assert_eq!(view.slots[3], SlotView::FaceUp(cards[3]));

    let human = engine.table().player(PlayerId::new(0));
    assert_eq!(human.name(), "Alice");
    assert!((0..4).all(|slot| !human.hand().is_known(slot)));
}

#[test]
fn test_blank_name_keeps_default() {
    let config = RoundConfig::new(5).with_bots(2);
    let mut engine = recorded(config, &[""]);

    engine.open().unwrap();

    assert_eq!(engine.table().player(PlayerId::new(0)).name(), "Luke");
}

#[test]
fn test_deal_names_and_sizes() {
    let table = Table::deal(RoundConfig::new(9)).unwrap();

    assert_eq!(table.player_count(), 5);
    assert_eq!(table.player(PlayerId::new(0)).name(), "Luke");
    assert!(!table.player(PlayerId::new(0)).is_bot());
    assert_eq!(table.player(PlayerId::new(4)).name(), "Bot4");
    assert_eq!(table.deck.len(), 54 - 5 * 4 - 1);
    assert!(table.discard_top().is_some());
}

// ============================================================================
// Turn sequencing
// ============================================================================

#[test]
fn test_first_turn_end_request_rejected() {
    let mut engine = heads_up(21, &["cat"]);

    let outcome = engine.take_turn().unwrap().unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::EndRejected {
            player: PlayerId::new(0),
            turn: 1,
        }
    );
    assert_eq!(engine.table().turn_counter, 0);
    assert_eq!(engine.phase(), RoundPhase::AwaitingChoice(PlayerId::new(0)));
    assert!(engine
        .display()
        .warnings()
        .any(|w| w == "Cannot end game on your first turn!"));
}

#[test]
fn test_end_request_honored_on_second_turn() {
    // decline a draw, bot plays, then end
    let mut engine = heads_up(21, &["N", "N", "CAT"]);

    let first = engine.take_turn().unwrap().unwrap();
    assert!(first.completes_turn());
    let bot = engine.take_turn().unwrap().unwrap();
    assert_eq!(bot.player(), PlayerId::new(1));
    let end = engine.take_turn().unwrap().unwrap();

    assert_eq!(end, TurnOutcome::CalledEnd { player: PlayerId::new(0) });
    assert_eq!(engine.phase(), RoundPhase::RoundOver);
    assert_eq!(engine.table().turn_counter, 2);
    assert!(engine.take_turn().unwrap().is_none());

    let result = engine.finish().unwrap();
    assert_eq!(result.scores.len(), 2);
    assert!(!result.winners.is_empty());
    assert!(result.scores.iter().all(|s| s.hand.iter().all(|c| !c.is_power())));
}

#[test]
fn test_unrecognized_choice_repeats_turn() {
    let mut engine = heads_up(4, &["dog", "N", "N"]);

    let outcome = engine.take_turn().unwrap().unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::InvalidInput {
            player: PlayerId::new(0),
            token: "dog".to_string(),
        }
    );
    assert_eq!(engine.table().turn_counter, 0);
    assert!(engine
        .display()
        .warnings()
        .any(|w| w == "Unrecognized input! Please go again."));

    let retry = engine.take_turn().unwrap().unwrap();
    assert_eq!(retry.player(), PlayerId::new(0));
    assert_eq!(engine.table().turn_counter, 1);
    assert_eq!(engine.phase(), RoundPhase::AwaitingChoice(PlayerId::new(1)));
}

#[test]
fn test_input_closed() {
    let mut engine = heads_up(4, &[]);
    assert_eq!(engine.take_turn(), Err(GameError::InputClosed));
}

#[test]
fn test_input_closed_mid_turn() {
    let mut engine = heads_up(4, &["Y"]);
    assert_eq!(engine.take_turn(), Err(GameError::InputClosed));
}

#[test]
fn test_reminder_shown_once() {
    let mut config = RoundConfig::new(8).with_bots(1).without_name_prompt();
    config.reminder_turns_per_player = 1;
    let mut engine = recorded(config, &["N"; 6]);

    for _ in 0..6 {
        engine.take_turn().unwrap();
    }

    assert_eq!(reminders(&engine), 1);
}

#[test]
fn test_reminder_due_after_six_turns_per_player() {
    // Human and one bot: due when the shared counter reaches 12
    let mut engine = heads_up(8, &["N"; 14]);
    let mut shown_at = Vec::new();

    for _ in 0..14 {
        let counter = engine.table().turn_counter;
        let before = reminders(&engine);
        engine.take_turn().unwrap();
        if reminders(&engine) > before {
            shown_at.push(counter);
        }
    }

    assert_eq!(engine.table().turn_counter, 14);
    assert_eq!(shown_at, vec![12]);
}

#[test]
fn test_turn_limit_ends_round() {
    let config = RoundConfig::new(8).with_bots(1).without_name_prompt().with_max_turns(2);
    let mut engine = recorded(config, &["N", "N"]);

    assert!(engine.take_turn().unwrap().is_some());
    assert!(engine.take_turn().unwrap().is_some());
    assert!(engine.take_turn().unwrap().is_none());
    assert_eq!(engine.phase(), RoundPhase::RoundOver);
}

// ============================================================================
// Scoring
// ============================================================================

fn scoring_table(human: [Card; 4], bot: [Card; 4], deck: &[Card]) -> Table {
    stacked_pair(RoundConfig::new(1), human, bot, deck)
}

fn stacked_pair(config: RoundConfig, human: [Card; 4], bot: [Card; 4], deck: &[Card]) -> Table {
    let config = config.with_bots(1);
    let players = vec![
        Player::human(PlayerId::new(0), "Luke", Hand::new(human)),
        Player::bot(PlayerId::new(1), "Bot1", Hand::new(bot)),
    ];
    Table::stacked(config, Deck::from_cards(deck.iter().copied()), n(0), players)
}

#[test]
fn test_power_card_replaced_at_scoring() {
    let mut table = scoring_table([n(4), Card::PEEK, n(9), n(2)], [n(1); 4], &[n(5)]);

    let result = score_round(&mut table).unwrap();

    assert_eq!(result.score_of(PlayerId::new(0)), Some(20));
    assert_eq!(result.score_of(PlayerId::new(1)), Some(4));
    assert_eq!(result.winners, vec![PlayerId::new(1)]);
    assert_eq!(result.scores[0].hand, [n(4), n(5), n(9), n(2)]);
    // Replaced power cards end up beneath the discard top
    assert_eq!(table.discard.cards(), &[Card::PEEK, n(0)]);
}

#[test]
fn test_scoring_twice_gives_same_result() {
    let mut table = scoring_table([n(4), Card::SWAP, n(9), n(2)], [n(1); 4], &[n(3)]);

    let first = score_round(&mut table).unwrap();
    let second = score_round(&mut table).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_short_deck_scoring_leaves_table_untouched() {
    let human = [n(4), Card::PEEK, n(9), n(2)];
    let bot = [Card::SWAP, n(1), n(1), n(1)];
    for policy in [EmptyDeckPolicy::Fail, EmptyDeckPolicy::Recycle] {
        // Two power cards to replace, one card to replace them with
        let config = RoundConfig::new(1).with_empty_deck(policy);
        let mut table = stacked_pair(config, human, bot, &[n(5)]);
        let before = table.card_counts();

        assert_eq!(score_round(&mut table), Err(GameError::EmptyDeck));

        assert_eq!(table.card_counts(), before);
        assert_eq!(table.player(PlayerId::new(0)).hand().cards(), human);
        assert_eq!(table.player(PlayerId::new(1)).hand().cards(), bot);
        assert_eq!(table.deck.cards(), &[n(5)]);
        assert_eq!(table.discard.cards(), &[n(0)]);
    }
}

#[test]
fn test_tied_scores_share_the_win() {
    let mut table = scoring_table([n(1), n(2), n(3), n(4)], [n(0), n(0), n(5), n(5)], &[]);

    let result = score_round(&mut table).unwrap();

    assert_eq!(result.winners, vec![PlayerId::new(0), PlayerId::new(1)]);
    assert_eq!(result.winner_names(), vec!["Luke", "Bot1"]);
}

#[test]
fn test_finish_is_idempotent() {
    let config = RoundConfig::new(2).bots_only().with_bots(3).with_max_turns(10);
    let mut engine = recorded(config, &[]);

    let first = engine.play_round().unwrap();
    let again = engine.finish().unwrap();

    assert_eq!(first, again);
    assert_eq!(engine.result(), Some(&first));
    let shown = engine
        .display()
        .events
        .iter()
        .filter(|e| matches!(e, DisplayEvent::FinalResults(_)))
        .count();
    assert_eq!(shown, 1);
    assert_eq!(engine.display().final_results(), Some(&first));
}

// ============================================================================
// Whole rounds
// ============================================================================

#[test]
fn test_bot_round_conserves_cards() {
    let config = RoundConfig::new(77).bots_only().with_bots(3).with_max_turns(30);
    let expected = config.composition.counts();
    let mut engine =
        RoundEngine::new(config, ScriptedInput::empty(), NullDisplay, UniformPolicy).unwrap();

    let result = engine.play_round().unwrap();

    assert_eq!(engine.table().turn_counter, 30);
    assert_eq!(result.scores.len(), 3);
    assert_eq!(engine.table().card_counts(), expected);
}

#[test]
fn test_same_seed_same_round() {
    let play = |seed| {
        let config = RoundConfig::new(seed).bots_only().with_bots(4).with_max_turns(40);
        RoundEngine::new(config, ScriptedInput::empty(), NullDisplay, UniformPolicy)
            .unwrap()
            .play_round()
            .unwrap()
    };

    assert_eq!(play(1234), play(1234));
}

#[test]
fn test_result_serializes() {
    let mut table = scoring_table([n(1); 4], [n(2); 4], &[]);
    let result = score_round(&mut table).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["scores"][1]["score"], 8);
    assert_eq!(json["scores"][0]["name"], "Luke");
}

#[test]
fn test_invalid_config_rejected() {
    let config = RoundConfig::new(1).bots_only().with_bots(1);
    let result = RoundEngine::new(config, ScriptedInput::empty(), NullDisplay, UniformPolicy);
    assert!(matches!(result, Err(GameError::InvalidConfig(_))));
}
