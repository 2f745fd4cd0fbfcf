use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::internal::progress::structs::ProgressReport;
use crate::internal::progress::traits::progress_writer::ProgressWriter;

/// 进度日志文件：以追加模式打开，每个进度行后跟换行符。
///
/// 调用方负责在本次运行开始前清空文件，这里只追加。
/// 每行写完立即 flush，中途失败时文件保持为完整行组成的前缀。
#[derive(Debug)]
pub struct LogFileWriter {
    file: File,
}

impl LogFileWriter {
    /// 以追加模式打开（不存在则创建）。
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        Ok(Self { file })
    }
}

#[async_trait]
impl ProgressWriter for LogFileWriter {
    async fn write_report(&mut self, report: &ProgressReport) -> io::Result<()> {
        let line = format!("{}\n", report);
        self.file.write_all(line.as_bytes()).await?;
        self.file.flush().await
    }

    async fn finish(&mut self) -> io::Result<()> {
        self.file.flush().await
    }
}
