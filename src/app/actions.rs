use super::*;
use crate::questions::NamingAttempt;
use crate::round::Outcome;

/// Player input on the map outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapMove {
    /// Drag in screen points
    Pan(f64, f64),
    Zoom(f64),
    Recenter,
}

impl GameApp {
    /// A click on choice `index` of a multiple-choice or membership question.
    pub fn answer(&mut self, index: usize) {
        if self.screen != Screen::Playing {
            return;
        }
        let outcome = match &self.question {
            Question::Choice(q) if index < q.choices.len() => q.judge(index),
            Question::Membership(q) if index < q.continents.len() => q.judge(index),
            _ => return,
        };
        log::debug!("answered {index}: {outcome:?}");
        self.finish_round(outcome);
    }

    /// Checks the typed name against the continent being named.
    pub fn submit_name(&mut self) {
        let Question::Naming(question) = &self.question else {
            return;
        };
        let attempt = self.naming.submit(question, &self.naming_input);
        let complete = self.naming.is_complete(question);
        let outcome = self.naming.outcome(question);

        match attempt {
            NamingAttempt::Found(country) => {
                self.message = format!("✅ {}", country.name);
                self.naming_input.clear();
            }
            NamingAttempt::AlreadyFound(country) => {
                self.message = format!("{} is already named", country.name);
                self.naming_input.clear();
            }
            NamingAttempt::NoMatch => {}
        }
        if complete {
            self.finish_round(outcome);
        }
    }

    /// Ends a naming question before every country was found.
    pub fn give_up(&mut self) {
        if let Question::Naming(question) = &self.question {
            let outcome = self.naming.outcome(question);
            self.finish_round(outcome);
        }
    }

    /// Replaces the question without penalty.
    pub fn skip(&mut self) {
        self.finish_round(Outcome::Skip);
    }

    pub fn move_map(&mut self, movement: MapMove) {
        let AssetState::Map(shape, view) = &mut self.assets else {
            return;
        };
        match movement {
            MapMove::Pan(dx, dy) => view.pan(dx, dy),
            MapMove::Zoom(steps) => view.zoom_by(steps),
            MapMove::Recenter => *view = shape.home,
        }
    }
}
