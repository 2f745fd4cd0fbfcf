//! 文件下载器
//!
//! 单连接、顺序地把一个 HTTP(S) 资源下载到本地文件，同时把进度行写到日志文件与控制台。
//!
//! ## 功能特性
//!
//! - **流式写盘**：响应体按块（默认 1KB，见 [`DEFAULT_CHUNK_SIZE`](super::download_config::DEFAULT_CHUNK_SIZE)）写入目标文件，每块写完立即上报进度
//! - **未知大小**：服务器未声明 `Content-Length` 时照常下载，百分比显示为 `N/A`
//! - **许可协议**：可在下载前先 GET 许可协议地址，非 200 则整个下载中止
//! - **钩子机制**：开始前、状态变化、完成后插入自定义逻辑
//! - **写出端口**：除日志文件与控制台外，可注册任意 [`ProgressWriter`]
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use file_downloader::downloader::FileDownloader;
//! # async fn example(client: reqwest::Client, url: url::Url) -> Result<(), file_downloader::downloader::DownloadError> {
//! let outcome = FileDownloader::new(&client, url)
//!     .save_to("ubuntu.iso")
//!     .log_progress_to("progress.log")
//!     .send()
//!     .await?;
//! println!("{} bytes", outcome.bytes_written);
//! # Ok(())
//! # }
//! ```
//!
//! 不支持断点续传、重试、多连接并发与校验和；出错时已写入的部分文件原样保留。

mod single_download;

use std::path::Path;

use reqwest::Client;
use url::Url;

use crate::internal::downloader::traits::download::DownloadHook;
use crate::internal::license::structs::LicenseAcceptor;
use crate::internal::progress::structs::{
    OnReportWriterAdapter, ProgressReport, ProgressWritersContainer,
};
use crate::internal::progress::traits::progress_writer::ProgressWriter;

use super::download_config::DownloadConfig;
use super::download_error::DownloadError;
use super::download_hooks_container::DownloadHooksContainer;
use super::download_outcome::DownloadOutcome;
use super::download_request::DownloadRequest;
use super::download_status::DownloadStatus;
use super::hook_adapters::{AfterCompleteHookAdapter, BeforeStartHookAdapter, OnStatusHookAdapter};
use single_download::run_single_thread_download;

/// 文件下载器，链式配置后调用 [`FileDownloader::send`] 执行一次下载。
pub struct FileDownloader {
    pub(crate) client: Client,
    pub(crate) source_url: Url,
    pub(crate) config: DownloadConfig,
    pub(crate) hooks: DownloadHooksContainer,
    pub(crate) writers: ProgressWritersContainer,
}

impl FileDownloader {
    pub fn new(client: &Client, source_url: Url) -> Self {
        Self {
            client: client.clone(),
            source_url,
            config: DownloadConfig::default(),
            hooks: Default::default(),
            writers: Default::default(),
        }
    }

    /// 按请求配置目标路径、进度日志，以及（如有）许可协议确认。
    pub fn from_request(client: &Client, request: &DownloadRequest) -> Self {
        let downloader = Self::new(client, request.source_url.clone())
            .save_to(&request.destination)
            .log_progress_to(&request.progress_log);
        match &request.license_url {
            Some(license_url) => downloader.accept_license(license_url.clone()),
            None => downloader,
        }
    }

    /// 设置保存路径（创建或截断）。
    pub fn save_to(mut self, path: impl AsRef<Path>) -> Self {
        self.config.save_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// 设置进度日志路径，以追加模式写入；清空由调用方负责。
    pub fn log_progress_to(mut self, path: impl AsRef<Path>) -> Self {
        self.config.progress_log_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// 设置每块最大字节数，最小为 1。
    pub fn chunk_size(mut self, n: usize) -> Self {
        self.config.chunk_size = n.max(1);
        self
    }

    /// 不在标准输出刷新进度行。
    pub fn without_console(mut self) -> Self {
        self.config.console_progress = false;
        self
    }

    /// 下载前先确认许可协议；服务器未返回 200 时不会发起下载，也不会创建目标文件。
    pub fn accept_license(self, license_url: Url) -> Self {
        let acceptor = LicenseAcceptor::new(&self.client, license_url);
        self.with_hook(acceptor)
    }

    /// 注册「开始前」钩子；闭包返回 `Err` 会中止本次下载。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<(), DownloadError>> + Send + 'static,
    {
        self.hooks.add(BeforeStartHookAdapter(f));
        self
    }

    /// 注册「状态变化」钩子。
    pub fn with_on_status_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(DownloadStatus) + Send + Sync + 'static,
    {
        self.hooks.add(OnStatusHookAdapter(f));
        self
    }

    /// 注册「完成后」钩子；下载成功结束后调用。
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(AfterCompleteHookAdapter(f));
        self
    }

    /// 添加完整钩子；可链式多次调用，按注册顺序执行。
    pub fn with_hook(mut self, hook: impl DownloadHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 追加一个进度写出端口，排在日志文件与控制台之后。
    pub fn with_progress_writer(mut self, writer: impl ProgressWriter + 'static) -> Self {
        self.writers.add(writer);
        self
    }

    /// 注册「进度」钩子；每块数据写盘后收到一份 [`ProgressReport`]。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ProgressReport) + Send + 'static,
    {
        self.writers.add(OnReportWriterAdapter(f));
        self
    }

    /// 执行下载。成功返回实际写入的字节数与声明大小。
    pub async fn send(self) -> Result<DownloadOutcome, DownloadError> {
        run_single_thread_download(
            &self.client,
            self.source_url,
            self.config,
            self.hooks,
            self.writers,
        )
        .await
    }
}
