//! 单连接整文件下载：一次 GET，按块流式写盘并上报进度。

use std::path::Path;

use futures_util::StreamExt;
use reqwest::{Client, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::internal::downloader::structs::{
    DownloadConfig, DownloadError, DownloadHooksContainer, DownloadOutcome, DownloadStatus,
};
use crate::internal::progress::structs::{
    ConsoleWriter, DownloadProgress, ProgressSink, ProgressWritersContainer,
};

/// 单线程下载：驱动状态机，保证任何出口都会通知终态。
pub(super) async fn run_single_thread_download(
    client: &Client,
    source_url: Url,
    config: DownloadConfig,
    mut hooks: DownloadHooksContainer,
    writers: ProgressWritersContainer,
) -> Result<DownloadOutcome, DownloadError> {
    hooks.run_on_status(DownloadStatus::Idle);

    let result = transfer(client, &source_url, &config, &mut hooks, writers).await;
    match &result {
        Ok(outcome) => {
            tracing::info!(
                url = %source_url,
                bytes = outcome.bytes_written,
                "download completed"
            );
            hooks.run_on_status(DownloadStatus::Completed);
            hooks.run_after_complete().await;
        }
        Err(err) => {
            tracing::debug!(url = %source_url, %err, "download failed");
            hooks.run_on_status(DownloadStatus::Failed);
        }
    }
    result
}

async fn transfer(
    client: &Client,
    source_url: &Url,
    config: &DownloadConfig,
    hooks: &mut DownloadHooksContainer,
    writers: ProgressWritersContainer,
) -> Result<DownloadOutcome, DownloadError> {
    let save_path = config.save_path.as_ref().ok_or(DownloadError::NoDestination)?;
    let log_path = config
        .progress_log_path
        .as_ref()
        .ok_or(DownloadError::NoProgressLog)?;

    hooks.run_on_status(DownloadStatus::Connecting);
    hooks.run_before_start().await?;

    let resp = client
        .get(source_url.clone())
        .send()
        .await?
        .error_for_status()?;

    let total = declared_length(&resp);
    if total.is_none() {
        tracing::warn!(
            url = %source_url,
            "File size is unknown. Progress won't be calculated accurately."
        );
    }

    let mut file = File::create(save_path)
        .await
        .map_err(DownloadError::CreateFile)?;
    let mut sink = open_sink(log_path, total, config.console_progress, writers).await?;

    hooks.run_on_status(DownloadStatus::Streaming);
    let streamed = stream_body(resp, &mut file, &mut sink, config.chunk_size).await;
    // 无论流是否中途出错，都先释放目标文件与进度端口，再上抛错误
    let released = release(file, sink).await;
    streamed?;
    let progress = released?;

    let outcome = DownloadOutcome {
        bytes_written: progress.bytes_done,
        declared_total: total,
    };
    outcome.warn_on_length_mismatch();
    Ok(outcome)
}

/// 响应声明的大小；缺失或为 0 时视为未知。
fn declared_length(resp: &Response) -> Option<u64> {
    resp.content_length().filter(|&len| len > 0)
}

/// 日志文件在前，控制台其次，调用方注册的端口最后。
async fn open_sink(
    log_path: &Path,
    total: Option<u64>,
    console_progress: bool,
    extra: ProgressWritersContainer,
) -> Result<ProgressSink, DownloadError> {
    let mut sink = ProgressSink::new(total, ProgressWritersContainer::default());
    sink.attach_log_file(log_path).await?;
    if console_progress {
        sink.add_writer(ConsoleWriter::stdout());
    }
    sink.append_writers(extra);
    Ok(sink)
}

async fn stream_body(
    resp: Response,
    file: &mut File,
    sink: &mut ProgressSink,
    chunk_size: usize,
) -> Result<(), DownloadError> {
    let chunk_size = chunk_size.max(1);
    let mut stream = resp.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        for piece in chunk.chunks(chunk_size) {
            file.write_all(piece)
                .await
                .map_err(DownloadError::WriteFile)?;
            sink.record_increment(piece.len() as u64).await?;
        }
    }
    Ok(())
}

async fn release(mut file: File, sink: ProgressSink) -> Result<DownloadProgress, DownloadError> {
    let flushed = file.flush().await.map_err(DownloadError::WriteFile);
    drop(file);
    let closed = sink.close().await;
    flushed?;
    closed
}
