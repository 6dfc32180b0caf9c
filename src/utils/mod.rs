pub mod extractor;
pub mod file_magic;
pub mod format;
pub mod parameter_error_handler;
pub mod slug;
pub mod youtube;

pub use extractor::{FilterQuery, FromQueryPairs, QueryPairs};
pub use file_magic::{extension_of, validate_magic_bytes};
pub use parameter_error_handler::{json_error_handler, query_error_handler};
pub use slug::slugify;
pub use youtube::extract_youtube_id;
