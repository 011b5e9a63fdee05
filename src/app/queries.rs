use super::*;

impl GameApp {
    pub fn prompt_text(&self) -> String {
        match &self.question {
            Question::Choice(q) => q.prompt_text(),
            Question::Membership(q) => q.prompt_text(),
            Question::Naming(q) => q.prompt_text(),
        }
    }

    /// Shown as the "Only chance" badge: a wrong answer now ends the run.
    pub fn only_chance(&self) -> bool {
        self.round.only_chance(self.question.fatal())
    }

    pub fn flag_texture(&self, code: &str) -> Option<&egui::TextureHandle> {
        match &self.assets {
            AssetState::Flags(textures) => textures.get(code),
            _ => None,
        }
    }

    pub fn map_shape(&self) -> Option<&MapShape> {
        match &self.assets {
            AssetState::Map(shape, _) => Some(shape),
            _ => None,
        }
    }

    pub fn map_view(&self) -> Option<MapView> {
        match &self.assets {
            AssetState::Map(_, view) => Some(*view),
            _ => None,
        }
    }
}
