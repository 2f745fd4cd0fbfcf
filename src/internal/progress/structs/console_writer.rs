use std::io::{self, Stdout, Write};

use async_trait::async_trait;

use crate::internal::progress::structs::ProgressReport;
use crate::internal::progress::traits::progress_writer::ProgressWriter;

/// 控制台进度输出：每行以 `\r` 开头且不换行，后一次输出覆盖前一次。
///
/// 控制台是进程级共享资源；单次传输内只有一个写入方，因此不加锁。
/// 写控制台失败（如管道已关闭、设备已满）不影响下载，只记录 trace 日志。
pub struct ConsoleWriter<W = Stdout> {
    out: W,
}

impl ConsoleWriter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// 输出一行提示信息（如许可协议已接受、下载完成）；写失败只记录 trace 日志。
    pub fn write_message(&mut self, message: &str) {
        if let Err(err) = writeln!(self.out, "{}", message).and_then(|_| self.out.flush()) {
            tracing::trace!(%err, "console message write failed");
        }
    }

    fn write_line(&mut self, report: &ProgressReport) -> io::Result<()> {
        write!(self.out, "\r{}", report)?;
        self.out.flush()
    }
}

#[async_trait]
impl<W: Write + Send> ProgressWriter for ConsoleWriter<W> {
    async fn write_report(&mut self, report: &ProgressReport) -> io::Result<()> {
        if let Err(err) = self.write_line(report) {
            tracing::trace!(%err, "console progress write failed");
        }
        Ok(())
    }
}
