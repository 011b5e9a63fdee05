use super::*;
use crate::model::MAX_LIVES;
use crate::view_models::{NamingRow, ScoreBoard};

impl GameApp {
    pub fn score_board(&self) -> ScoreBoard {
        ScoreBoard {
            score: self.round.score(),
            high_score: self.round.high_score(),
            lives: self.round.lives(),
            max_lives: MAX_LIVES,
        }
    }

    /// Targets of the live naming question in catalog order; empty otherwise.
    pub fn naming_rows(&self) -> Vec<NamingRow> {
        match &self.question {
            Question::Naming(q) => q
                .targets
                .iter()
                .map(|c| NamingRow {
                    name: c.name.clone(),
                    found: self.naming.has_found(&c.code),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::model::MAX_LIVES;
    use crate::questions::QuestionKind;

    #[test]
    fn score_board_mirrors_the_round() {
        let mut app = app(&[QuestionKind::Population], 1);
        app.skip();
        let board = app.score_board();
        assert_eq!((board.score, board.lives, board.max_lives), (0, MAX_LIVES, MAX_LIVES));
    }

    #[test]
    fn naming_rows_track_progress() {
        let mut app = app(&[QuestionKind::ContinentNaming], 30);
        let rows = app.naming_rows();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| !r.found));

        let first = rows[0].name.clone();
        app.naming_input = first.clone();
        app.submit_name();
        // a one-country continent completes and moves on
        if app.last_transition.is_none() {
            let rows = app.naming_rows();
            assert!(rows.iter().any(|r| r.name == first && r.found));
        }

        let app = crate::app::test_support::app(&[QuestionKind::Population], 1);
        assert!(app.naming_rows().is_empty());
    }
}
