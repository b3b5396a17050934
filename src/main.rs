use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use photo_browser::cli::{format_photo_row, Cli, Command, FavoritesAction};
use photo_browser::config::Config;
use photo_browser::ui::favorites::FavoritesViewModel;
use photo_browser::ui::list::{ListHandle, ListState, ListViewModel};
use photo_browser::ui::routing::route_channel;
use photo_browser::ui::mvi::UiState;
use photo_browser::ui::ViewModelHandle;
use photo_browser::{
    AppCoordinator, FavoritesStore, FileKvStore, HttpPhotoApi, Navigation, Photo, PhotoApi,
};

#[tokio::main]
async fn main() -> Result<()> {
    photo_browser::logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    // Debounce plus the request itself.
    let wait = Duration::from_secs(config.api.timeout_seconds as u64)
        + config.feed.search_debounce()
        + Duration::from_secs(1);
    let store = open_store(&config);

    match cli.command {
        Command::Feed { pages } => {
            let (routes, _route_rx) = route_channel();
            let list = ListViewModel::spawn(open_api(&config)?, &config.feed, routes);
            list.load_initial()?;
            let state = load_pages(&list, pages, wait).await?;
            for photo in &state.feed {
                println!("{}", format_photo_row(photo));
            }
        }
        Command::Search { query } => {
            let (routes, _route_rx) = route_channel();
            let list = ListViewModel::spawn(open_api(&config)?, &config.feed, routes);
            list.set_search_text(Some(query.clone()))?;
            let state = wait_for(&list, wait, |s| {
                s.searches_in_flight == 0
                    && (s.search_query.as_deref() == Some(query.as_str()) || s.error.is_some())
            })
            .await?;
            fail_on_error(&state)?;
            for photo in &state.search_results {
                println!("{}", format_photo_row(photo));
            }
        }
        Command::Favorites { action } => {
            let (routes, _route_rx) = route_channel();
            let favorites = FavoritesViewModel::spawn(store, routes);
            match action {
                FavoritesAction::List => favorites.refresh()?,
                FavoritesAction::Remove { id } => favorites.delete_by_id(id)?,
            }
            let state = wait_for(&favorites, wait, |s| s.revision >= 1).await?;
            print_favorites(&state.photos);
        }
        Command::Like { id, pages } => {
            let mut coordinator = AppCoordinator::start(open_api(&config)?, store, &config.feed);
            let state = load_pages(coordinator.list(), pages, wait).await?;
            let Some(photo) = state.feed.iter().find(|p| p.id == id).cloned() else {
                bail!("Photo '{}' not found in the first {} page(s)", id, pages);
            };

            coordinator.list().select_detail(photo)?;
            match tokio::time::timeout(wait, coordinator.next_navigation()).await {
                Ok(Some(Navigation::DetailOpened { .. })) => {}
                _ => bail!("Detail screen did not open"),
            }
            let Some(detail) = coordinator.current_detail() else {
                bail!("Detail screen did not open");
            };
            detail.toggle_favorite()?;
            let notice = tokio::time::timeout(wait, detail.next_notice())
                .await
                .ok()
                .flatten()
                .context("No response from detail screen")?;
            println!("{} {}", notice.title, notice.message);
        }
    }

    Ok(())
}

fn open_api(config: &Config) -> Result<Arc<dyn PhotoApi>> {
    let api = HttpPhotoApi::from_config(&config.api).context("Failed to create API client")?;
    Ok(Arc::new(api))
}

fn open_store(config: &Config) -> FavoritesStore {
    let kv = FileKvStore::new(config.storage.resolved_dir());
    FavoritesStore::with_key(Arc::new(kv), config.storage.favorites_key.clone())
}

/// Wait for the initial page, then advance the cursor until `pages` pages
/// have been requested.
async fn load_pages(list: &ListHandle, pages: u32, wait: Duration) -> Result<ListState> {
    let mut state = wait_for(list, wait, |s| {
        !s.page_in_flight && (s.has_loaded || s.error.is_some())
    })
    .await?;
    fail_on_error(&state)?;

    for _ in 1..pages {
        let target = state.page + 1;
        list.load_more()?;
        state = wait_for(list, wait, |s| s.page == target && !s.page_in_flight).await?;
        fail_on_error(&state)?;
    }
    Ok(state)
}

async fn wait_for<I, S>(
    handle: &ViewModelHandle<I, S>,
    wait: Duration,
    predicate: impl FnMut(&S) -> bool,
) -> Result<S>
where
    I: Send + 'static,
    S: UiState,
{
    let state = tokio::time::timeout(wait, handle.wait_for(predicate))
        .await
        .context("Timed out waiting for the view-model")??;
    Ok(state)
}

fn fail_on_error(state: &ListState) -> Result<()> {
    if let Some(error) = &state.error {
        bail!("{} ({})", error.title, error.message);
    }
    Ok(())
}

fn print_favorites(photos: &[Photo]) {
    if photos.is_empty() {
        println!("No favorites saved");
        return;
    }
    for photo in photos {
        println!("{}", format_photo_row(photo));
    }
}
