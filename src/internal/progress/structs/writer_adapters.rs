//! 单函数写出端口适配器：将闭包包装成 [`ProgressWriter`]，供 `with_on_progress_hook` 使用。

use std::io;

use async_trait::async_trait;

use crate::internal::progress::structs::ProgressReport;
use crate::internal::progress::traits::progress_writer::ProgressWriter;

/// 仅接收进度报告的写出端口适配器，闭包不会失败。
pub(crate) struct OnReportWriterAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> ProgressWriter for OnReportWriterAdapter<F>
where
    F: FnMut(&ProgressReport) + Send + 'static,
{
    async fn write_report(&mut self, report: &ProgressReport) -> io::Result<()> {
        (self.0)(report);
        Ok(())
    }
}
