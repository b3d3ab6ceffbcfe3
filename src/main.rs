use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use schemakit::{
    build_editor, demo_session, init_logging, replay, Config, InputFrame, SettingsPersistence,
    BUILD_DATE, VERSION,
};

#[derive(Parser, Debug)]
#[command(
    name = "schemakit",
    version,
    about = "Replays a schematic editing session and prints the final view as JSON"
)]
struct Args {
    /// Config file to load instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,

    /// JSON array of input frames; the built-in demo runs when omitted
    script: Option<PathBuf>,
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let persistence = match path {
        Some(path) => SettingsPersistence::with_path(path),
        None => match SettingsPersistence::platform_default() {
            Ok(persistence) => persistence,
            Err(e) => {
                tracing::warn!("no config directory ({e}); using defaults");
                return Ok(Config::default());
            }
        },
    };
    persistence
        .load_or_default()
        .with_context(|| format!("failed to load config from {}", persistence.path().display()))
}

fn load_script(path: &Path) -> anyhow::Result<Vec<InputFrame>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid script {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "schemakit starting");

    let args = Args::parse();

    if let Some(path) = args.write_default_config {
        SettingsPersistence::with_path(&path)
            .save(&Config::default())
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "default config written");
        return Ok(());
    }

    let config = load_config(args.config)?;
    let mut editor = build_editor(&config).context("invalid editor configuration")?;

    let frames = match &args.script {
        Some(path) => load_script(path)?,
        None => demo_session(),
    };

    let view = replay(&mut editor, &frames).unwrap_or_else(|| editor.view());
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
