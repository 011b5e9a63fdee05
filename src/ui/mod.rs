mod helpers;
pub mod layout;
pub mod views;

use crate::app::{GameApp, Screen};
use crate::questions::QuestionKind;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for GameApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.ensure_assets(ctx);
        self.poll_assets(ctx);

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        if let Screen::Failed(message) = &self.screen {
            let message = message.clone();
            views::failed::ui_failed(self, ctx, &message);
            return;
        }
        if !self.assets.is_ready() {
            views::choice::ui_loading(ctx);
            return;
        }

        // one view per question family
        match self.question.kind() {
            QuestionKind::FlagToCountry => views::flag::ui_flag_to_country(self, ctx),
            QuestionKind::CountryToFlag => views::flag::ui_country_to_flag(self, ctx),
            QuestionKind::MapLocation => views::map::ui_map(self, ctx),
            QuestionKind::ContinentMembership => views::continent::ui_membership(self, ctx),
            QuestionKind::ContinentNaming => views::continent::ui_naming(self, ctx),
            QuestionKind::CapitalToCountry
            | QuestionKind::CountryToCapital
            | QuestionKind::Population
            | QuestionKind::Border
            | QuestionKind::Division
            | QuestionKind::HeadOfGovernment => views::choice::ui_choice(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
