use crate::model::MAX_LIVES;
use crate::store::HighScoreStore;

/// Key the high score is stored under.
pub const HIGH_SCORE_KEY: &str = "country-game:high-score";

/// What the front-end reports once a question is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct { fatal: bool },
    Incorrect { fatal: bool },
    /// Asset failed to load; replace the question without penalty
    Skip,
}

/// Result of applying one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    /// The run ended and score/lives were reset
    pub reset: bool,
    pub new_high_score: bool,
}

/// Score, high score and lives across rounds. Runs indefinitely; a lost run
/// resets in the same transition that ends it.
pub struct RoundState {
    score: u32,
    high_score: u32,
    lives: u32,
    store: Box<dyn HighScoreStore>,
}

impl RoundState {
    /// Reads the persisted high score; anything unparseable counts as 0.
    pub fn new(store: Box<dyn HighScoreStore>) -> Self {
        let high_score = match store.get(HIGH_SCORE_KEY) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring corrupt high score {raw:?}");
                0
            }),
            None => 0,
        };
        Self {
            score: 0,
            high_score,
            lives: MAX_LIVES,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// True when one more wrong answer on a question with this fatality ends the run.
    pub fn only_chance(&self, fatal: bool) -> bool {
        fatal || self.lives <= 1
    }

    pub fn apply(&mut self, outcome: Outcome) -> Transition {
        let mut reset = false;
        let mut new_high_score = false;

        match outcome {
            Outcome::Correct { fatal } => {
                self.score += 1;
                if self.score > self.high_score {
                    self.high_score = self.score;
                    new_high_score = true;
                }
                if fatal {
                    self.lives = (self.lives + 1).min(MAX_LIVES);
                }
                self.store
                    .set(HIGH_SCORE_KEY, &self.high_score.to_string());
            }
            Outcome::Incorrect { fatal } => {
                self.lives = self.lives.saturating_sub(1);
                if fatal || self.lives == 0 {
                    self.score = 0;
                    self.lives = MAX_LIVES;
                    reset = true;
                }
            }
            Outcome::Skip => {}
        }

        log::debug!(
            "{outcome:?}: score {} high {} lives {}{}",
            self.score,
            self.high_score,
            self.lives,
            if reset { " (run reset)" } else { "" }
        );

        Transition {
            score: self.score,
            high_score: self.high_score,
            lives: self.lives,
            reset,
            new_high_score,
        }
    }
}
