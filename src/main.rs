#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use country_game::app::prepare;
    use country_game::config::GameConfig;
    use country_game::error::StartupError;
    use country_game::store::FileStore;
    use country_game::GameApp;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let started = GameConfig::load()
        .map_err(StartupError::from)
        .and_then(|config| prepare(&config).map(|catalog| (catalog, config)));
    let (catalog, config) = match started {
        Ok(parts) => parts,
        Err(err) => {
            log::error!("cannot start: {err}");
            std::process::exit(1);
        }
    };
    let store = FileStore::new(config.high_score_path.clone());

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Country Game",
        options,
        Box::new(move |cc| Ok(Box::new(GameApp::new(cc, catalog, config, Box::new(store))?))),
    )
}

// the web build starts through `country_game::web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
