//! Newton's cradle binary: loads layered config, applies CLI overrides and
//! runs the windowed app.

use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use newtons_cradle::core::config::{with_optional_layer, DEFAULT_CONFIG, LOCAL_CONFIG};
use newtons_cradle::{ConfigReport, CradleConfig, CradlePlugin};

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "newtons_cradle", about = "Interactive Newton's cradle")]
struct Args {
    /// Config layers, merged in order (later keys win). Defaults to the
    /// shipped config plus `cradle.local.ron` when that file exists.
    #[arg(long = "config")]
    config: Vec<std::path::PathBuf>,
    /// Exit after this many seconds (overrides `window.autoClose`).
    #[arg(long)]
    auto_close: Option<f32>,
    /// Draw Rapier collider outlines.
    #[arg(long, default_value_t = false)]
    rapier_debug: bool,
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> (CradleConfig, ConfigReport) {
    const RAW: &str = include_str!("../assets/config/cradle.ron");
    let mut report = ConfigReport::default();
    let cfg = match ron::from_str(RAW) {
        Ok(cfg) => {
            report.used.push("embedded cradle.ron".into());
            cfg
        }
        Err(e) => {
            report.errors.push(format!("embedded cradle.ron: parse error: {e}"));
            CradleConfig::default()
        }
    };
    (cfg, report)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> (CradleConfig, ConfigReport) {
    let args = Args::parse();
    let layers = if args.config.is_empty() {
        with_optional_layer(
            vec![DEFAULT_CONFIG.into()],
            std::path::Path::new(LOCAL_CONFIG),
        )
    } else {
        args.config
    };
    let (mut cfg, used, errors) = CradleConfig::load_layered(&layers);
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    if args.rapier_debug {
        cfg.rapier_debug = true;
    }
    (
        cfg,
        ConfigReport {
            used,
            errors,
            warnings: Vec::new(),
        },
    )
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
    }

    let (cfg, mut report) = load_config();
    report.warnings = cfg.validate();

    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: false,
        canvas: cfg.window.canvas.clone(),
        ..default()
    };

    let exit = App::new()
        .insert_resource(cfg)
        .insert_resource(report)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(CradlePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow::anyhow!("app exited with code {code}")),
    }
}
