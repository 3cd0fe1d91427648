//! Post selection from a blog listing.

use chrono::{Days, NaiveDate};

use crate::blog::post::{Post, ACTIFIT_TAG};
use crate::config::{DatePolicy, Selection};

/// Pick the posts to export from a blog listing, newest first.
///
/// `today` is the current UTC date. The result keeps the listing order.
pub fn select_posts<'a>(
    posts: &'a [Post],
    selection: &Selection,
    today: NaiveDate,
) -> Vec<&'a Post> {
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);

    let candidates = if selection.last_only {
        &posts[..posts.len().min(1)]
    } else {
        posts
    };

    candidates
        .iter()
        .filter(|post| is_selected(post, selection, today, yesterday))
        .collect()
}

fn is_selected(
    post: &Post,
    selection: &Selection,
    today: NaiveDate,
    yesterday: NaiveDate,
) -> bool {
    // Reblogs show up in the listing under their original author
    if post.author != selection.author {
        return false;
    }

    if !selection.include_actifit && post.has_tag(ACTIFIT_TAG) {
        tracing::info!("Skipping post tagged '{}': {}", ACTIFIT_TAG, post.title);
        return false;
    }

    match selection.date_policy {
        DatePolicy::All => true,
        DatePolicy::Today => post.created_date() == today,
        DatePolicy::Yesterday => post.created_date() == yesterday,
    }
}
