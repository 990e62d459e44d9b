use super::FileFormatter;

/// Sorted names joined with two spaces on a single newline-terminated
/// line. An empty directory renders as a bare empty line.
pub struct ColumnFormatter;

impl FileFormatter for ColumnFormatter {
    fn format_children(&self, names: &[String]) -> String {
        let mut line = super::sorted(names).join("  ");
        line.push('\n');
        line
    }
}
