// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    pub max_lives: u32,
}

impl ScoreBoard {
    /// Filled hearts for remaining lives, empty ones for lost lives.
    pub fn hearts(&self) -> String {
        let lost = self.max_lives.saturating_sub(self.lives) as usize;
        format!("{}{}", "❤".repeat(self.lives as usize), "♡".repeat(lost))
    }

    pub fn label(&self) -> String {
        format!(
            "Score {}   High score {}   {}",
            self.score,
            self.high_score,
            self.hearts()
        )
    }
}

/// One country of the continent being named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingRow {
    pub name: String,
    pub found: bool,
}

impl NamingRow {
    pub fn label(&self) -> String {
        if self.found {
            format!("✅ {}", self.name)
        } else {
            "❔".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_show_lost_lives() {
        let board = ScoreBoard {
            score: 4,
            high_score: 9,
            lives: 1,
            max_lives: 3,
        };
        assert_eq!(board.hearts(), "❤♡♡");
        assert_eq!(board.label(), "Score 4   High score 9   ❤♡♡");
    }

    #[test]
    fn unfound_rows_hide_the_name() {
        let row = NamingRow {
            name: "France".into(),
            found: false,
        };
        assert_eq!(row.label(), "❔");
        assert_eq!(NamingRow { found: true, ..row }.label(), "✅ France");
    }
}
