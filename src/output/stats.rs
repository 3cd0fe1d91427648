//! Statistics reporting.

use console::style;

use crate::download::ExportState;

/// Print statistics for an export run.
pub fn print_export_stats(author: &str, state: &ExportState) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style(format!("Export summary for {}:", author)).bold());
    println!("  Blog entries: {}", state.posts_listed);
    println!("  Selected:     {}", state.posts_selected);
    println!("  Written:      {}", state.posts_written);
    println!("  Images:       {} downloaded", state.images_downloaded);
    if state.images_failed > 0 {
        println!(
            "  Failed:       {} of {} images",
            style(state.images_failed).red(),
            state.total_images()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
