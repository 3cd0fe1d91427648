//! Blog module for post representation and selection.

pub mod post;
pub mod select;

pub use post::{Post, ACTIFIT_TAG};
pub use select::select_posts;
