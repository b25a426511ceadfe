pub mod environment;
pub mod paths;

pub use environment::get_config_dir;
pub use paths::{display_location, format_path_with_tilde, is_uri, uri_to_path};
