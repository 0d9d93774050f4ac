use crate::generator::{GenerateError, GeneratedSentence, SentenceGenerator};
use crate::TICK_RATE_MS;

/// Countdown bounds in seconds, adjusted in steps from the keyboard.
pub const MIN_SECS: f64 = 5.0;
pub const MAX_SECS: f64 = 120.0;
pub const SECS_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// English side shown, countdown running, French hidden.
    Counting,
    /// French side revealed, waiting for the next card.
    Revealed,
}

/// The sentence currently on screen.
#[derive(Debug, Clone)]
pub struct Card {
    pub sentence: GeneratedSentence,
    pub state: CardState,
    pub seconds_remaining: f64,
    /// True when the reveal came from the countdown hitting zero rather
    /// than the user asking early.
    pub timed_out: bool,
}

/// One practice run: owns the generator, the current difficulty, the
/// countdown duration and the card on screen.
#[derive(Debug)]
pub struct PracticeSession {
    generator: SentenceGenerator,
    pub difficulty: u8,
    pub number_of_secs: f64,
    pub card: Option<Card>,
}

impl PracticeSession {
    pub fn new(generator: SentenceGenerator, difficulty: u8, number_of_secs: f64) -> Self {
        Self {
            generator,
            difficulty,
            number_of_secs,
            card: None,
        }
    }

    pub fn title(&self) -> &str {
        self.generator.title()
    }

    /// Draw a fresh sentence pair and restart the countdown.
    pub fn next_card(&mut self) -> Result<(), GenerateError> {
        let sentence = self.generator.sentence(self.difficulty)?;
        self.card = Some(Card {
            sentence,
            state: CardState::Counting,
            seconds_remaining: self.number_of_secs,
            timed_out: false,
        });
        Ok(())
    }

    /// Advance the countdown by one tick; at zero the answer is revealed.
    pub fn on_tick(&mut self) {
        if let Some(card) = &mut self.card {
            if card.state == CardState::Counting {
                card.seconds_remaining -= TICK_RATE_MS as f64 / 1000_f64;
                if card.seconds_remaining <= 0.0 {
                    card.seconds_remaining = 0.0;
                    card.state = CardState::Revealed;
                    card.timed_out = true;
                }
            }
        }
    }

    /// Reveal the answer before the countdown runs out.
    pub fn reveal(&mut self) {
        if let Some(card) = &mut self.card {
            if card.state == CardState::Counting {
                card.state = CardState::Revealed;
            }
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(
            self.card,
            Some(Card {
                state: CardState::Revealed,
                ..
            })
        )
    }

    /// Switch star level; takes effect from the next card, the one on
    /// screen is left alone.
    pub fn set_difficulty(&mut self, difficulty: u8) {
        self.difficulty = difficulty;
    }

    pub fn bump_secs(&mut self, delta: f64) {
        self.number_of_secs = (self.number_of_secs + delta).clamp(MIN_SECS, MAX_SECS);
    }
}
