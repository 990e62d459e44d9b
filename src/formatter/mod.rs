mod columns;
mod lines;

pub use columns::ColumnFormatter;
pub use lines::OneLineFormatter;

/// A listed path (canonical form) paired with the child names chosen for
/// display.
pub struct Listing {
    pub path: String,
    pub names: Vec<String>,
}

pub trait FileFormatter {
    /// Formats one directory's children. `names` arrive unsorted; the
    /// formatter sorts them lexicographically.
    fn format_children(&self, names: &[String]) -> String;
}

/// Renders the full listing. A single listed path prints its children
/// bare; more than one gets a `path:` header per block, blocks separated
/// by a blank line and ordered by canonical path.
pub fn render(mut listings: Vec<Listing>, formatter: &dyn FileFormatter) -> String {
    if listings.len() == 1 {
        return formatter.format_children(&listings[0].names);
    }
    listings.sort_by(|a, b| a.path.cmp(&b.path));
    let blocks: Vec<String> = listings
        .iter()
        .map(|listing| {
            format!(
                "{}:\n{}",
                listing.path,
                formatter.format_children(&listing.names)
            )
        })
        .collect();
    blocks.join("\n")
}

fn sorted(names: &[String]) -> Vec<&str> {
    let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}
