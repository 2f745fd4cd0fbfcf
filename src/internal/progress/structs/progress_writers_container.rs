use std::io;

use crate::internal::progress::structs::ProgressReport;
use crate::internal::progress::traits::progress_writer::ProgressWriter;

/// 写出端口容器：按注册顺序依次分发进度报告。
#[derive(Default)]
pub struct ProgressWritersContainer {
    writers: Vec<Box<dyn ProgressWriter>>,
}

impl ProgressWritersContainer {
    /// 添加一个写出端口；支持多次调用。
    pub fn add(&mut self, writer: impl ProgressWriter + 'static) {
        self.writers.push(Box::new(writer));
    }

    /// 把另一个容器的端口依次追加到末尾。
    pub fn append(&mut self, mut other: ProgressWritersContainer) {
        self.writers.append(&mut other.writers);
    }

    /// 第一个失败的端口会短路后续端口。
    pub async fn run_write_report(&mut self, report: &ProgressReport) -> io::Result<()> {
        for w in self.writers.iter_mut() {
            w.write_report(report).await?;
        }
        Ok(())
    }

    /// 所有端口都会被调用；返回第一个错误。
    pub async fn run_finish(&mut self) -> io::Result<()> {
        let mut first_err = None;
        for w in self.writers.iter_mut() {
            if let Err(err) = w.finish().await {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
