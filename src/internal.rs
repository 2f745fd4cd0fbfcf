pub mod cli;
pub mod downloader;
pub mod format;
pub mod http;
pub mod license;
pub mod progress;
