//! CLI argument parsing via clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use theme_loader::config::ConfigOverrides;

/// Discover CSS themes, apply the stored preference, and emit stylesheet links.
#[derive(Debug, Parser)]
#[command(name = "theme-loader", version)]
pub struct Args {
    /// Path to config file (default: ./theme-loader.toml or ~/.config/theme-loader/theme-loader.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the listing or manifest URL.
    #[arg(long = "listing-url")]
    pub listing_url: Option<String>,

    /// Override the theme stored on first run.
    #[arg(long = "default-theme")]
    pub default_theme: Option<String>,

    /// Override the preference store file.
    #[arg(long = "store")]
    pub store: Option<PathBuf>,

    /// HTML page whose `<head>` receives the stylesheet links.
    #[arg(long = "page")]
    pub page: Option<PathBuf>,

    /// Write output here instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Flag values layered over file and env config before validation.
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            listing_url: self.listing_url.clone(),
            default_theme: self.default_theme.clone(),
            store: self.store.clone(),
        }
    }

    /// Default `EnvFilter` directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "theme_loader=info",
            1 => "theme_loader=debug",
            _ => "theme_loader=trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use theme_loader::config::ConfigOverrides;

    #[test]
    fn flags_become_config_overrides() {
        let args = Args::parse_from([
            "theme-loader",
            "--listing-url",
            "http://host/themes/",
            "--default-theme",
            "midnight",
            "--store",
            "/tmp/prefs.toml",
        ]);
        assert_eq!(
            args.config_overrides(),
            ConfigOverrides {
                listing_url: Some("http://host/themes/".into()),
                default_theme: Some("midnight".into()),
                store: Some("/tmp/prefs.toml".into()),
            }
        );
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let args = Args::parse_from(["theme-loader", "-c", "custom.toml"]);
        assert!(args.config_overrides().is_empty());
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn verbosity_maps_to_log_directive() {
        assert_eq!(
            Args::parse_from(["theme-loader"]).log_directive(),
            "theme_loader=info"
        );
        assert_eq!(
            Args::parse_from(["theme-loader", "-vv"]).log_directive(),
            "theme_loader=trace"
        );
    }
}
