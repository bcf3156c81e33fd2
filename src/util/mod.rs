//! Filesystem helpers shared by the conversion and concatenation pipelines.
//!
//! - [`file_status`] — regular-file / directory checks and output-parent resolution
//! - [`file_size`]   — byte length of open or named regular files

pub mod file_status;
pub mod file_size;

pub use file_status::{is_directory, is_reg_file, output_parent, parent_exists, same_file};

pub use file_size::{get_file_size, get_open_file_size};
