//! 进度写出端口：进度累计与具体输出解耦，控制台、日志文件、测试用收集器各自实现本 trait。

use std::io;

use async_trait::async_trait;

use crate::internal::progress::structs::ProgressReport;

/// 进度写出端口。
///
/// [`ProgressSink`](crate::progress::ProgressSink) 每累计一次增量就生成一个 [`ProgressReport`]，
/// 按注册顺序依次交给各端口；任一端口返回 `Err` 都会中止本次下载。
#[async_trait]
pub trait ProgressWriter: Send {
    /// 写出一行进度。
    async fn write_report(&mut self, report: &ProgressReport) -> io::Result<()>;

    /// 传输结束（成功或失败）时调用，用于刷新缓冲。
    async fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
