use super::*;
use crate::app::assets::{AssetResult, DecodedFlag, LoadedAssets, spawn_load};
use crate::round::Outcome;

impl GameApp {
    /// Starts the queued load, if any. Needs a context to wake the UI when done.
    pub fn ensure_assets(&mut self, ctx: &egui::Context) {
        if !matches!(self.assets, AssetState::Queued(_)) {
            return;
        }
        if let AssetState::Queued(job) = std::mem::replace(&mut self.assets, AssetState::Unneeded) {
            log::debug!("loading {:?}", job.uris());
            let pending = spawn_load(self.config.asset_root.clone(), job, ctx.clone());
            self.assets = AssetState::Loading(pending);
        }
    }

    pub fn poll_assets(&mut self, ctx: &egui::Context) {
        let result = match &self.assets {
            AssetState::Loading(pending) => pending.poll(),
            _ => None,
        };
        if let Some(result) = result {
            self.receive_assets(result, ctx);
        }
    }

    /// A failed load abandons the question without penalty.
    pub(crate) fn receive_assets(&mut self, result: AssetResult, ctx: &egui::Context) {
        match result {
            Ok(LoadedAssets::Flags(flags)) => {
                let textures = flags
                    .into_iter()
                    .map(|flag| (flag.code.clone(), upload_flag(ctx, flag)))
                    .collect();
                self.assets = AssetState::Flags(textures);
            }
            Ok(LoadedAssets::Map(shape)) => {
                let view = shape.home;
                self.assets = AssetState::Map(shape, view);
            }
            Err(err) => {
                log::warn!("asset load failed, skipping question: {err}");
                self.finish_round(Outcome::Skip);
            }
        }
    }
}

fn upload_flag(ctx: &egui::Context, flag: DecodedFlag) -> egui::TextureHandle {
    let image = egui::ColorImage::from_rgba_unmultiplied(flag.size, &flag.rgba);
    ctx.load_texture(format!("flag-{}", flag.code), image, egui::TextureOptions::LINEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::assets::{MapShape, MapView};
    use crate::app::test_support::app;
    use crate::error::AssetError;
    use crate::model::MAX_LIVES;
    use crate::questions::QuestionKind;

    #[test]
    fn failed_load_skips_without_penalty() {
        let mut app = app(&[QuestionKind::MapLocation], 12);
        let ctx = egui::Context::default();
        app.receive_assets(Err(AssetError::Fetch("geo/xx.json".into())), &ctx);
        let t = app.last_transition.expect("skip applied");
        assert_eq!((t.score, t.lives, t.reset), (0, MAX_LIVES, false));
        assert!(matches!(app.assets, AssetState::Queued(_)));
    }

    #[test]
    fn loaded_map_is_kept_for_drawing() {
        let mut app = app(&[QuestionKind::MapLocation], 12);
        let ctx = egui::Context::default();
        let shape = MapShape {
            home: MapView::new([0.5, 0.5], 4.0),
            rings: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
            attribution: "test".into(),
        };
        app.receive_assets(Ok(LoadedAssets::Map(shape.clone())), &ctx);
        assert!(matches!(&app.assets, AssetState::Map(s, view) if *s == shape && *view == shape.home));
        assert!(app.assets.is_ready());
    }

    #[test]
    fn decoded_flags_become_textures() {
        let mut app = app(&[QuestionKind::FlagToCountry], 12);
        let ctx = egui::Context::default();
        let flag = DecodedFlag {
            code: "FR".into(),
            size: [2, 1],
            rgba: vec![0, 0, 255, 255, 255, 0, 0, 255],
        };
        app.receive_assets(Ok(LoadedAssets::Flags(vec![flag])), &ctx);
        match &app.assets {
            AssetState::Flags(textures) => assert_eq!(textures["FR"].size(), [2, 1]),
            _ => panic!("flags expected"),
        }
    }

    #[test]
    fn nothing_to_poll_without_a_load() {
        let mut app = app(&[QuestionKind::Population], 12);
        let ctx = egui::Context::default();
        app.ensure_assets(&ctx);
        app.poll_assets(&ctx);
        assert!(matches!(app.assets, AssetState::Unneeded));
        assert!(app.last_transition.is_none());
    }
}
