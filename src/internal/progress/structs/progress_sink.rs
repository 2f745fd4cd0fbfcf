//! 进度汇聚器：持有本次传输的 [`DownloadProgress`]，每次增量后生成 [`ProgressReport`] 并扇出到各写出端口。

use std::path::Path;

use crate::internal::downloader::structs::DownloadError;
use crate::internal::progress::structs::{
    ConsoleWriter, DownloadProgress, LogFileWriter, ProgressReport, ProgressWritersContainer,
};
use crate::internal::progress::traits::progress_writer::ProgressWriter;

/// 进度汇聚器。
///
/// 由一次下载独占，随传输结束而释放：日志文件句柄归属于内部的 [`LogFileWriter`]，
/// 无论正常结束、提前返回还是出错，drop 时都会关闭。正常结束时应调用 [`ProgressSink::close`] 刷新缓冲。
pub struct ProgressSink {
    state: DownloadProgress,
    writers: ProgressWritersContainer,
}

impl ProgressSink {
    /// 用给定的写出端口创建。
    pub fn new(total: Option<u64>, writers: ProgressWritersContainer) -> Self {
        Self {
            state: DownloadProgress::new(total),
            writers,
        }
    }

    /// 默认组合：追加写入 `log_path` 的日志文件 + 标准输出。
    pub async fn open(
        log_path: impl AsRef<Path>,
        total: Option<u64>,
    ) -> Result<Self, DownloadError> {
        let mut sink = Self::new(total, ProgressWritersContainer::default());
        sink.attach_log_file(log_path).await?;
        sink.add_writer(ConsoleWriter::stdout());
        Ok(sink)
    }

    /// 以追加模式打开日志文件并注册为写出端口。
    pub async fn attach_log_file(
        &mut self,
        log_path: impl AsRef<Path>,
    ) -> Result<(), DownloadError> {
        let writer = LogFileWriter::open(log_path)
            .await
            .map_err(DownloadError::OpenProgressLog)?;
        self.writers.add(writer);
        Ok(())
    }

    pub fn add_writer(&mut self, writer: impl ProgressWriter + 'static) {
        self.writers.add(writer);
    }

    pub fn append_writers(&mut self, writers: ProgressWritersContainer) {
        self.writers.append(writers);
    }

    pub fn bytes_written(&self) -> u64 {
        self.state.bytes_done
    }

    /// 累加 `bytes` 并把新的进度行写到所有端口。
    ///
    /// 先累加后写出：即使写出失败，`bytes_written` 也已包含本次增量（数据已经落盘）。
    pub async fn record_increment(&mut self, bytes: u64) -> Result<ProgressReport, DownloadError> {
        self.state.advance(bytes);
        let report = self.state.report();
        self.writers
            .run_write_report(&report)
            .await
            .map_err(DownloadError::WriteProgressLog)?;
        Ok(report)
    }

    /// 刷新并释放所有端口，返回最终进度。
    pub async fn close(mut self) -> Result<DownloadProgress, DownloadError> {
        self.writers
            .run_finish()
            .await
            .map_err(DownloadError::WriteProgressLog)?;
        Ok(self.state)
    }
}
