use std::path::Path;

use crate::internal::cli::structs::Cli;
use crate::internal::downloader::structs::{DownloadError, DownloadOutcome, FileDownloader};
use crate::internal::http::functions::build_http_client;

/// 清空进度日志（不存在则创建），每次运行只做一次。
pub async fn truncate_progress_log(path: impl AsRef<Path>) -> Result<(), DownloadError> {
    tokio::fs::write(path, b"")
        .await
        .map_err(DownloadError::TruncateProgressLog)
}

/// 执行一次完整的命令行流程：解析 URL → 清空进度日志 → （可选）确认许可协议 → 下载。
///
/// 完成提示与退出码由调用方处理。
pub async fn run(cli: &Cli) -> Result<DownloadOutcome, DownloadError> {
    let request = cli.to_request()?;
    truncate_progress_log(&request.progress_log).await?;

    let client = build_http_client(&cli.http_config())?;
    FileDownloader::from_request(&client, &request)
        .chunk_size(cli.chunk_size)
        .send()
        .await
}
