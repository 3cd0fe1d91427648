//! Blog export logic.

use chrono::NaiveDate;

use crate::api::{BlogSource, ContentFetcher};
use crate::blog::select_posts;
use crate::config::Config;
use crate::download::post::export_post;
use crate::download::state::ExportState;
use crate::error::Result;
use crate::output::create_spinner;

/// Export the selected posts of the configured account.
///
/// Posts are processed one at a time. Image failures are counted and
/// skipped; any other error stops the run.
pub async fn export_blog(
    source: &dyn BlogSource,
    fetcher: &dyn ContentFetcher,
    config: &Config,
    today: NaiveDate,
) -> Result<ExportState> {
    let author = &config.selection.author;
    let mut state = ExportState::default();

    tracing::info!(
        "Fetching blog of {} from {}...",
        author,
        config.node_url()
    );

    let spinner = config
        .options
        .show_progress
        .then(|| create_spinner(&format!("Fetching blog of {}...", author)));
    let listing = source.fetch_blog(author, config.options.blog_limit).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let posts = listing?;

    state.posts_listed = posts.len() as u64;

    let selected = select_posts(&posts, &config.selection, today);
    state.posts_selected = selected.len() as u64;

    tracing::info!(
        "{} of {} blog entries selected ({})",
        selected.len(),
        posts.len(),
        config.selection.date_policy
    );

    for post in selected {
        tracing::info!("Exporting: {}", post.title);
        export_post(fetcher, config, &mut state, post).await?;
    }

    Ok(state)
}
