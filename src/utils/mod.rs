pub(crate) mod text;
pub(crate) mod validation;

// Public API - helpers shared by the builder, catalog files and commands
pub use text::{is_valid_slug, sanitize_label, slug_to_title, split_location};
pub use validation::validate_trail;
