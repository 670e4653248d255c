//! Command-line definitions for the `forkify` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "forkify", version, about = "Search, scale and bookmark recipes")]
pub struct Cli {
    /// Path to the configuration file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog and show one page of results
    Search {
        query: String,

        /// Page to show instead of the first one
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show a recipe
    Recipe {
        id: String,

        /// Rescale ingredient quantities to this many servings
        #[arg(long)]
        servings: Option<u32>,

        /// Bookmark the recipe, or remove its bookmark
        #[arg(long)]
        toggle_bookmark: bool,
    },
    /// List saved bookmarks
    Bookmarks,
    /// Upload a recipe of your own
    Upload(UploadArgs),
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub source_url: String,

    #[arg(long)]
    pub image: String,

    #[arg(long)]
    pub publisher: String,

    /// Minutes
    #[arg(long)]
    pub cooking_time: String,

    #[arg(long)]
    pub servings: String,

    /// `quantity,unit,description`; repeat for each ingredient
    #[arg(long = "ingredient", value_name = "TEXT")]
    pub ingredients: Vec<String>,
}

impl UploadArgs {
    /// Form fields in the shape the upload validator expects.
    ///
    /// Numbers stay strings so that bad input is reported by the
    /// validator, naming the field.
    pub fn to_form(&self) -> Vec<(String, String)> {
        let mut form = vec![
            ("title".to_string(), self.title.clone()),
            ("sourceUrl".to_string(), self.source_url.clone()),
            ("image".to_string(), self.image.clone()),
            ("publisher".to_string(), self.publisher.clone()),
            ("cookingTime".to_string(), self.cooking_time.clone()),
            ("servings".to_string(), self.servings.clone()),
        ];
        form.extend(
            self.ingredients
                .iter()
                .enumerate()
                .map(|(i, text)| (format!("ingredient-{}", i + 1), text.clone())),
        );
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recipe_flags() {
        let cli = Cli::parse_from(["forkify", "recipe", "abc", "--servings", "6", "--toggle-bookmark"]);
        match cli.command {
            Command::Recipe {
                id,
                servings,
                toggle_bookmark,
            } => {
                assert_eq!(id, "abc");
                assert_eq!(servings, Some(6));
                assert!(toggle_bookmark);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli = Cli::parse_from(["forkify", "bookmarks", "--config", "/tmp/forkify.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/forkify.toml")));
    }

    #[test]
    fn upload_form_numbers_ingredients() {
        let cli = Cli::parse_from([
            "forkify",
            "upload",
            "--title",
            "Soup",
            "--source-url",
            "https://example.com/soup",
            "--image",
            "https://example.com/soup.jpg",
            "--publisher",
            "Me",
            "--cooking-time",
            "20",
            "--servings",
            "2",
            "--ingredient",
            "1,l,water",
            "--ingredient",
            ",,salt",
        ]);
        let Command::Upload(args) = cli.command else {
            panic!("expected upload");
        };
        let form = args.to_form();
        assert!(form.contains(&("cookingTime".to_string(), "20".to_string())));
        assert!(form.contains(&("ingredient-2".to_string(), ",,salt".to_string())));
    }
}
