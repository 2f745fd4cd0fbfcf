pub mod format_byte_size;

pub use format_byte_size::{format_byte_count, format_byte_size};
