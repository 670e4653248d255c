use anyhow::{Context, Result};
use clap::Parser;

use forkify::api::{DataSource, HttpDataSource};
use forkify::cli::{Cli, Command};
use forkify::config::Config;
use forkify::controller::{Controller, FragmentNavigation, Navigation};
use forkify::logging::init_tracing;
use forkify::persistence::{JsonFileStore, PersistenceAdapter};
use forkify::store::{StateStore, StoreError};

type App<D, P> = Controller<D, P, FragmentNavigation>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = HttpDataSource::new(&config.api).context("Failed to create HTTP client")?;
    let persistence = JsonFileStore::new(config.data_dir());
    let store = StateStore::new(source, persistence, config.search.results_per_page)
        .context("Failed to load bookmarks")?;
    let mut app = Controller::new(store, FragmentNavigation::new());

    run(cli.command, &mut app).await
}

async fn run<D: DataSource, P: PersistenceAdapter>(command: Command, app: &mut App<D, P>) -> Result<()> {
    match command {
        Command::Search { query, page } => {
            let outcome = app.control_search(&query).await;
            if let (Ok(()), Some(page)) = (&outcome, page) {
                app.control_pagination(page);
            }
            println!("{}", app.results_view().markup());
            println!("{}", app.pagination_view().markup());
            outcome?;
        }
        Command::Recipe {
            id,
            servings,
            toggle_bookmark,
        } => {
            app.navigation_mut().replace_id(&id);
            let outcome = show_recipe(app, servings, toggle_bookmark).await;
            println!("{}", app.recipe_view().markup());
            outcome?;
        }
        Command::Bookmarks => {
            app.control_bookmarks();
            println!("{}", app.bookmarks_view().markup());
        }
        Command::Upload(args) => {
            let outcome = app.control_upload(&args.to_form()).await;
            println!("{}", app.upload_view().markup());
            outcome?;
            println!("{}", app.recipe_view().markup());
            println!("{}", app.navigation().fragment());
        }
    }
    Ok(())
}

async fn show_recipe<D: DataSource, P: PersistenceAdapter>(
    app: &mut App<D, P>,
    servings: Option<u32>,
    toggle_bookmark: bool,
) -> Result<(), StoreError> {
    app.control_recipe().await?;
    if let Some(servings) = servings {
        app.control_servings(servings)?;
    }
    if toggle_bookmark {
        app.control_toggle_bookmark()?;
    }
    Ok(())
}
