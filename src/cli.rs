//! Command-line surface of the headless binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::Photo;

#[derive(Debug, Parser)]
#[command(
    name = "photo-browser",
    version,
    about = "Browse, search and save photos without a UI"
)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the editorial feed
    Feed {
        /// Number of pages to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
    /// Search photos by text
    Search { query: String },
    /// Inspect or edit saved favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Find a photo in the feed and save it to favorites
    Like {
        id: String,
        /// Feed pages to scan for the photo
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// List saved photos in the order they were saved
    List,
    /// Remove a saved photo by id
    Remove { id: String },
}

/// One output line: id, likes, author, date.
pub fn format_photo_row(photo: &Photo) -> String {
    format!(
        "{:<14} {:>6}  {:<24} {}",
        photo.id,
        photo.likes,
        photo.user.name,
        photo.created_at_display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_feed_pages() {
        let cli = Cli::try_parse_from(["photo-browser", "feed", "--pages", "4"]).unwrap();
        assert!(matches!(cli.command, Command::Feed { pages: 4 }));
    }

    #[test]
    fn rejects_zero_pages() {
        assert!(Cli::try_parse_from(["photo-browser", "feed", "--pages", "0"]).is_err());
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["photo-browser", "favorites", "list", "--config", "/tmp/c.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(matches!(
            cli.command,
            Command::Favorites {
                action: FavoritesAction::List
            }
        ));
    }
}
