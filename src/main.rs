#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use quotecard_core::registry::{Registry, ANIMATIONS, FONTS, LAYOUTS, THEMES};
use quotecard_core::{AppSettings, QuoteConfig};

use crate::context::InitialCard;

/// Quote Card - README quote image preview
#[derive(Parser, Debug)]
#[command(name = "quotecard-desktop")]
#[command(about = "Preview quote card images and copy their README embed snippet")]
struct Args {
    /// Origin of the rendering service (overrides QUOTECARD_ORIGIN)
    #[arg(long)]
    origin: Option<String>,

    /// JSON file holding the card configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme id
    #[arg(long, long_help = id_help("Theme id", &THEMES))]
    theme: Option<String>,

    /// Font id
    #[arg(long, long_help = id_help("Font id", &FONTS))]
    font: Option<String>,

    /// Animation id
    #[arg(long, long_help = id_help("Animation id", &ANIMATIONS))]
    animation: Option<String>,

    /// Layout id
    #[arg(long, long_help = id_help("Layout id", &LAYOUTS))]
    layout: Option<String>,

    /// Quote category requested from the service
    #[arg(long)]
    quote_type: Option<String>,

    /// Background color override
    #[arg(long)]
    bg_color: Option<String>,

    /// Quote text color override
    #[arg(long)]
    font_color: Option<String>,

    /// Border color (default layout only)
    #[arg(long)]
    border_color: Option<String>,

    /// Background source, e.g. "unsplash"
    #[arg(long)]
    bg_source: Option<String>,

    /// Unsplash search query (with --bg-source unsplash)
    #[arg(long)]
    unsplash_query: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// `--help` text for a registry-backed flag. Unknown ids are still accepted.
fn id_help<T>(summary: &str, registry: &Registry<T>) -> String {
    let ids: Vec<_> = registry.ids().collect();
    format!("{}\n\nKnown ids: {}", summary, ids.join(", "))
}

impl Args {
    /// Start from the config file (or defaults) and apply flag overrides.
    fn quote_config(&self) -> anyhow::Result<QuoteConfig> {
        let mut config = match &self.config {
            Some(path) => QuoteConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => QuoteConfig::default(),
        };

        let overrides = [
            (&self.theme, &mut config.theme),
            (&self.font, &mut config.font),
            (&self.animation, &mut config.animation),
            (&self.layout, &mut config.layout),
            (&self.quote_type, &mut config.quote_type),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }

        let optional_overrides = [
            (&self.bg_color, &mut config.bg_color),
            (&self.font_color, &mut config.font_color),
            (&self.border_color, &mut config.border_color),
            (&self.bg_source, &mut config.bg_source),
            (&self.unsplash_query, &mut config.unsplash_query),
        ];
        for (flag, field) in optional_overrides {
            if flag.is_some() {
                *field = flag.clone();
            }
        }

        Ok(config)
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let settings = AppSettings::resolve(args.origin.as_deref())?;
    let config = args.quote_config()?;

    tracing::info!(
        theme = %config.theme,
        layout = %config.layout,
        "Starting quote card preview against {}",
        settings.origin()
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Quote Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 520.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(settings)
        .with_context(InitialCard(config))
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "quotecard-desktop",
            "--theme",
            "dark",
            "--border-color",
            "#fff",
            "--quote-type",
            "motivational",
        ]);
        let config = args.quote_config().unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.quote_type, "motivational");
        assert_eq!(config.border_color.as_deref(), Some("#fff"));
        assert_eq!(config.layout, "default");
        assert!(config.bg_color.is_none());
    }

    #[test]
    fn id_flags_list_known_ids_in_help() {
        let command = Args::command();
        let long_help = |name: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id().as_str() == name)
                .and_then(|arg| arg.get_long_help())
                .map(|help| help.to_string())
                .unwrap_or_default()
        };

        assert!(long_help("theme").contains("dracula"));
        assert!(long_help("font").contains("Lobster"));
        assert!(long_help("animation").contains("grow_out_in"));
        assert!(long_help("layout").contains("churchill"));
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::parse_from(["quotecard-desktop", "-vv"]);
        assert_eq!(args.verbose, 2);
    }
}
