use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use weather_widget_core::{Widget, WidgetConfig, view::PLACEHOLDER};

const THEME_COMMAND: &str = ":theme";
const QUIT_COMMAND: &str = ":quit";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather with a bit of advice")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key.
    Configure,

    /// Look up one location and print the widget.
    Show {
        /// City or place name.
        location: String,

        /// Start in dark theme.
        #[arg(long)]
        dark: bool,

        /// Print the view model as JSON instead of the text panel.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for locations until `:quit`; `:theme` toggles the theme.
    Interactive {
        /// Start in dark theme.
        #[arg(long)]
        dark: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(self.config.as_deref()),
            Command::Show { location, dark, json } => {
                let widget = load_widget(self.config.as_deref(), dark)?;
                if let Err(err) = widget.search_for(location).await {
                    tracing::debug!(error = %err, "search failed");
                }

                let view = widget.view().await;
                if json {
                    let out = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
                    println!("{out}");
                } else {
                    println!("{view}");
                }
                Ok(())
            }
            Command::Interactive { dark } => {
                let widget = load_widget(self.config.as_deref(), dark)?;
                interactive(&widget).await
            }
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<WidgetConfig> {
    tracing::debug!(?path, "loading configuration");
    let cfg = match path {
        Some(path) => WidgetConfig::load_from(path)?,
        None => WidgetConfig::load()?,
    };
    Ok(cfg.with_env_overrides())
}

fn load_widget(path: Option<&std::path::Path>, dark: bool) -> anyhow::Result<Widget> {
    let mut cfg = load_config(path)?;
    cfg.dark_theme |= dark;
    Ok(Widget::from_config(&cfg))
}

fn configure(path: Option<&std::path::Path>) -> anyhow::Result<()> {
    let mut cfg = match path {
        Some(path) => WidgetConfig::load_from(path)?,
        None => WidgetConfig::load()?,
    };

    let key = Password::new("weatherapi.com API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;
    cfg.set_api_key(key.trim().to_string());

    match path {
        Some(path) => {
            cfg.save_to(path)?;
            println!("Saved API key to {}", path.display());
        }
        None => {
            cfg.save()?;
            println!("Saved API key to {}", WidgetConfig::config_file_path()?.display());
        }
    }
    Ok(())
}

async fn interactive(widget: &Widget) -> anyhow::Result<()> {
    println!("{}", widget.view().await);

    loop {
        let input = match Text::new("Location:").with_placeholder(PLACEHOLDER).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        match input.trim() {
            QUIT_COMMAND => break,
            THEME_COMMAND => widget.toggle_theme().await,
            _ => {
                if let Err(err) = widget.search_for(input).await {
                    tracing::debug!(error = %err, "search failed");
                }
            }
        }

        println!("{}", widget.view().await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_flags_and_global_config() {
        let cli = Cli::try_parse_from([
            "weather-widget",
            "show",
            "New York",
            "--dark",
            "--json",
            "--config",
            "/tmp/w.toml",
        ])
        .expect("valid args");

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.toml")));
        match cli.command {
            Command::Show { location, dark, json } => {
                assert_eq!(location, "New York");
                assert!(dark && json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn show_requires_location() {
        assert!(Cli::try_parse_from(["weather-widget", "show"]).is_err());
    }

    #[test]
    fn load_config_reads_explicit_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dark_theme = true\n").expect("write");

        let cfg = load_config(Some(path.as_path())).expect("load");
        assert!(cfg.dark_theme);
    }
}
