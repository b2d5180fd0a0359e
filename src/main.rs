mod border;
mod event_loop;
mod food;
mod frame;
mod game;
mod game_input;
mod logging;
mod render;
mod settings;
mod snake;
mod timer;
mod utils;

use crate::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    logging::init(settings.level_filter()?)?;
    logging::startup(&settings);

    event_loop::run(settings)
}
