//! Custom request extractors.

mod parsed_path;
mod validated_json;

pub use parsed_path::ParsedPath;
pub use validated_json::ValidatedJson;
