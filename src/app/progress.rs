use rand::Rng;

use super::*;
use crate::questions::QuestionKind;
use crate::round::Outcome;

/// Questions replaced in a row before the app gives up on the catalog.
const MAX_REPLACEMENTS: usize = 32;

/// Random enabled kind; population when none are enabled (config validation rules that out).
pub fn pick_kind<R: Rng + ?Sized>(enabled: &[QuestionKind], rng: &mut R) -> QuestionKind {
    QuestionKind::random(enabled, rng).unwrap_or(QuestionKind::Population)
}

impl GameApp {
    /// Applies the outcome and moves on to a fresh question.
    pub fn finish_round(&mut self, outcome: Outcome) {
        let score_before = self.round.score();
        let transition = self.round.apply(outcome);
        if transition.reset {
            log::info!("run over, high score {}", transition.high_score);
        } else if transition.new_high_score {
            log::info!("new high score {}", transition.high_score);
        }
        self.message = match outcome {
            Outcome::Correct { .. } => "✅ Correct!".to_string(),
            Outcome::Incorrect { .. } if transition.reset => {
                format!("❌ Out of lives. Final score {score_before}.")
            }
            Outcome::Incorrect { .. } => "❌ Incorrect.".to_string(),
            Outcome::Skip => "⏩ Question skipped.".to_string(),
        };
        self.last_transition = Some(transition);
        self.next_question();
    }

    /// Replaces the live question. The previous one's assets (and any load
    /// still in flight) are dropped.
    pub fn next_question(&mut self) {
        self.assets = AssetState::Unneeded;
        self.naming = NamingProgress::default();
        self.naming_input.clear();

        for _ in 0..MAX_REPLACEMENTS {
            let kind = pick_kind(&self.config.kinds, &mut self.rng);
            match Question::generate(kind, &self.catalog, &mut self.rng) {
                Ok(question) => {
                    self.question = question;
                    if self.queue_assets() {
                        return;
                    }
                }
                Err(err) => {
                    log::error!("{err}");
                    self.screen = Screen::Failed(err.to_string());
                    return;
                }
            }
        }
        self.screen = Screen::Failed("no question with usable assets could be generated".into());
    }

    /// Queues the current question's asset load. False when the question
    /// cannot be shown and should be skipped.
    pub(crate) fn queue_assets(&mut self) -> bool {
        match AssetJob::for_question(&self.question) {
            None => {
                self.assets = AssetState::Unneeded;
                true
            }
            Some(Ok(job)) => {
                self.assets = AssetState::Queued(job);
                true
            }
            Some(Err(err)) => {
                log::warn!("skipping {:?} question: {err}", self.question.kind());
                false
            }
        }
    }
}
