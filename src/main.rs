use ggez::conf::{FullscreenType, NumSamples, WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;
use log::error;

use grid_snake::app::app_error::{AppError, AppErrorConversion, AppResult};
use grid_snake::app::palette::Palette;
use grid_snake::app::prefs::Prefs;
use grid_snake::app::App;

fn start() -> AppResult {
    let prefs = Prefs::default();

    let wm = WindowMode {
        width: prefs.screen_width as f32,
        height: prefs.screen_height as f32,
        maximized: false,
        fullscreen_type: FullscreenType::Windowed,
        borderless: false,
        resizable: false,
        ..WindowMode::default()
    };

    let ws = WindowSetup {
        title: "Snake".to_string(),
        samples: NumSamples::One,
        vsync: true,
        icon: "".to_string(),
        srgb: true,
    };

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(AppError::from)
        .with_trace_step("ContextBuilder::build")?;

    let app = App::new(prefs, Palette::default()).with_trace_step("App::new")?;
    run(ctx, event_loop, app)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = start() {
        error!("{}", e);
        std::process::exit(1);
    }
}
