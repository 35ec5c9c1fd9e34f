mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{DrillLoopService, DrillSettings, SoundPlayer};
use ui::{App, UiApp, WebviewSoundPlayer, build_app_context};

use config::{Args, Command, print_usage};

struct DesktopApp {
    drill_loop: Arc<DrillLoopService>,
}

impl UiApp for DesktopApp {
    fn drill_loop(&self) -> Arc<DrillLoopService> {
        Arc::clone(&self.drill_loop)
    }
}

fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for target in ["app", "services", "ui"] {
        if let Ok(directive) = format!("{target}=info").parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|_| print_usage())?;
    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let settings = DrillSettings::default()
        .with_seed(args.seed)
        .with_sounds_enabled(!args.muted);
    let player: Arc<dyn SoundPlayer> = Arc::new(WebviewSoundPlayer::new(&args.sound_dir));
    let drill_loop = Arc::new(DrillLoopService::new(settings, player));

    let settings = drill_loop.settings();
    tracing::info!(
        seed = ?settings.seed(),
        sounds = settings.sounds_enabled(),
        sound_dir = %args.sound_dir,
        "starting number keys"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { drill_loop });
    let context = build_app_context(&app);

    // Some tao setups open floating windows by default.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("趣味数字游戏")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
