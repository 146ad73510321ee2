use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use sprite_runner::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(name = "sprite_runner", about = "2D platformer character controller demo")]
struct Cli {
    /// Path to the RON game config. Omitted: assets/config/game.ron, with a
    /// silent fallback to defaults when missing.
    #[arg(long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = match &cli.config {
        // An explicitly requested config must load.
        Some(path) => GameConfig::load_from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading config '{path}'"))?,
        None => {
            let (cfg, err) = GameConfig::load_or_default("assets/config/game.ron");
            if let Some(e) = err {
                eprintln!("config: {e}; using defaults");
            }
            cfg
        }
    };

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
