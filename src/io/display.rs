//! Display collaborator.
//!
//! The engine reports what happened at fixed points: round opening,
//! start of each human turn, after every exchange, and at round end.
//! Rendering is entirely up to the implementation.

use crate::cards::Card;
use crate::rules::RoundResult;
use crate::zones::HandView;

/// Sink for everything the table shows.
pub trait GameDisplay {
    /// Rules text at the opening.
    fn show_rules(&mut self) {}

    /// A hand as seen by the viewer the view was built for.
    fn show_hand_masked(&mut self, owner: &str, view: &HandView);

    fn show_message(&mut self, text: &str);

    /// Something the player did was rejected.
    fn show_warning(&mut self, text: &str) {
        self.show_message(text);
    }

    fn show_discard_top(&mut self, card: Card);

    /// Full reveal of every hand, scores, and winners.
    fn show_final_results(&mut self, result: &RoundResult);
}

/// One call made on a [`RecordingDisplay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    Rules,
    Hand { owner: String, view: HandView },
    Message(String),
    Warning(String),
    DiscardTop(Card),
    FinalResults(RoundResult),
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    pub events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            DisplayEvent::Message(m) => Some(m.as_str()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            DisplayEvent::Warning(m) => Some(m.as_str()),
            _ => None,
        })
    }

    /// Hand views shown for `owner`.
    pub fn hands_of<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a HandView> + 'a {
        self.events.iter().filter_map(move |e| match e {
            DisplayEvent::Hand { owner: o, view } if o == owner => Some(view),
            _ => None,
        })
    }

    #[must_use]
    pub fn final_results(&self) -> Option<&RoundResult> {
        self.events.iter().rev().find_map(|e| match e {
            DisplayEvent::FinalResults(r) => Some(r),
            _ => None,
        })
    }
}

impl GameDisplay for RecordingDisplay {
    fn show_rules(&mut self) {
        self.events.push(DisplayEvent::Rules);
    }

    fn show_hand_masked(&mut self, owner: &str, view: &HandView) {
        self.events.push(DisplayEvent::Hand {
            owner: owner.to_string(),
            view: *view,
        });
    }

    fn show_message(&mut self, text: &str) {
        self.events.push(DisplayEvent::Message(text.to_string()));
    }

    fn show_warning(&mut self, text: &str) {
        self.events.push(DisplayEvent::Warning(text.to_string()));
    }

    fn show_discard_top(&mut self, card: Card) {
        self.events.push(DisplayEvent::DiscardTop(card));
    }

    fn show_final_results(&mut self, result: &RoundResult) {
        self.events.push(DisplayEvent::FinalResults(result.clone()));
    }
}

/// Discards everything. Used for simulations.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl GameDisplay for NullDisplay {
    fn show_hand_masked(&mut self, _owner: &str, _view: &HandView) {}

    fn show_message(&mut self, _text: &str) {}

    fn show_discard_top(&mut self, _card: Card) {}

    fn show_final_results(&mut self, _result: &RoundResult) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::SlotView;

    #[test]
    fn test_recording_filters() {
        let mut display = RecordingDisplay::new();
        display.show_message("hello");
        display.show_warning("careful");
        display.show_discard_top(Card::PEEK);

        let mut view = HandView::face_down();
        view.slots[2] = SlotView::FaceUp(Card::number(4));
        display.show_hand_masked("Bot1", &view);

        assert_eq!(display.messages().collect::<Vec<_>>(), vec!["hello"]);
        assert_eq!(display.warnings().collect::<Vec<_>>(), vec!["careful"]);
        assert_eq!(display.hands_of("Bot1").count(), 1);
        assert_eq!(display.hands_of("Luke").count(), 0);
        assert!(display.final_results().is_none());
    }

    #[test]
    fn test_default_warning_goes_to_messages() {
        struct Messages(Vec<String>);
        impl GameDisplay for Messages {
            fn show_hand_masked(&mut self, _owner: &str, _view: &HandView) {}
            fn show_message(&mut self, text: &str) {
                self.0.push(text.to_string());
            }
            fn show_discard_top(&mut self, _card: Card) {}
            fn show_final_results(&mut self, _result: &RoundResult) {}
        }

        let mut display = Messages(Vec::new());
        display.show_warning("no");
        assert_eq!(display.0, vec!["no".to_string()]);
    }
}
