pub mod layout;
pub mod path;

pub use layout::create_standard_layout;
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
