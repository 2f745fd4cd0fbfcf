pub mod download_config;
pub mod download_error;
pub mod download_hooks_container;
pub mod download_outcome;
pub mod download_request;
pub mod download_status;
pub mod file_downloader;
pub mod hook_adapters;

// 重导出公共类型
pub use download_config::{DownloadConfig, DEFAULT_CHUNK_SIZE};
pub use download_error::{DownloadError, ErrorKind};
pub use download_hooks_container::DownloadHooksContainer;
pub use download_outcome::DownloadOutcome;
pub use download_request::DownloadRequest;
pub use download_status::DownloadStatus;
pub use file_downloader::FileDownloader;
