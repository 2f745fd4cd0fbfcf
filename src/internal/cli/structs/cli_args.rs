use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::builder::TypedValueParser;

use crate::internal::downloader::structs::{DownloadError, DownloadRequest, DEFAULT_CHUNK_SIZE};
use crate::internal::http::functions::HttpClientConfig;

/// 命令行参数；长参数名沿用 `--licenseUrl`、`--progressLog` 的驼峰写法。
#[derive(Debug, Parser)]
#[command(name = "file-downloader", version, about = "Downloads a file from a given URL.")]
pub struct Cli {
    /// The URL of the file to download.
    #[arg(short = 'u', long = "url", env = "FILE_DOWNLOADER_URL")]
    pub url: String,

    /// The URL to accept the license agreement before downloading.
    #[arg(short = 'l', long = "licenseUrl", env = "FILE_DOWNLOADER_LICENSE_URL")]
    pub license_url: Option<String>,

    /// The destination path for the downloaded file.
    #[arg(short = 'd', long = "destination")]
    pub destination: PathBuf,

    /// The path for the progress log file.
    #[arg(short = 'p', long = "progressLog")]
    pub progress_log: PathBuf,

    /// Maximum number of bytes written and reported per chunk.
    #[arg(
        long = "chunkSize",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub chunk_size: usize,

    /// Connection timeout in seconds.
    #[arg(long = "connectTimeout")]
    pub connect_timeout: Option<u64>,

    /// Enable debug logging on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// 解析 URL 并构造下载请求；任何文件或网络操作都在此之后。
    pub fn to_request(&self) -> Result<DownloadRequest, DownloadError> {
        DownloadRequest::new(
            &self.url,
            self.license_url.as_deref(),
            &self.destination,
            &self.progress_log,
        )
    }

    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            connect_timeout: self.connect_timeout.map(Duration::from_secs),
        }
    }
}
