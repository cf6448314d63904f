use crate::query::Bounds;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Render the index page with the slider limits filled in.
pub fn render_index(bounds: &Bounds) -> String {
    INDEX_TEMPLATE
        .replace("{{ max_generation }}", &bounds.max_generation.to_string())
        .replace("{{ max_index }}", &bounds.max_index.to_string())
}
