use super::FileFormatter;

/// Sorted names, one per line. An empty directory renders no lines.
pub struct OneLineFormatter;

impl FileFormatter for OneLineFormatter {
    fn format_children(&self, names: &[String]) -> String {
        let mut out = String::new();
        for name in super::sorted(names) {
            out.push_str(name);
            out.push('\n');
        }
        out
    }
}
