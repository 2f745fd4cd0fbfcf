use super::progress_report::ProgressReport;

/// 下载进度：记录已写入字节数；总大小来自响应头，未知时为 `None`。
///
/// 只由进度累计步骤在每块数据写盘后修改，`bytes_done` 单调不减。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadProgress {
    /// 已写入目标文件的字节数
    pub bytes_done: u64,
    /// 声明的文件总大小（字节），未知时为 `None`
    pub total: Option<u64>,
}

impl DownloadProgress {
    pub fn new(total: Option<u64>) -> Self {
        Self {
            bytes_done: 0,
            total,
        }
    }

    /// 累加一次增量。
    pub fn advance(&mut self, bytes: u64) {
        self.bytes_done = self.bytes_done.saturating_add(bytes);
    }

    /// 进度百分比；总大小未知或为 0 时返回 `None`。
    ///
    /// 服务器声明的大小小于实际传输量时可能超过 100，这里不做截断。
    pub fn pct(&self) -> Option<f64> {
        self.total
            .filter(|&t| t > 0)
            .map(|t| (self.bytes_done as f64 / t as f64) * 100.0)
    }

    /// 已写入字节数是否超过了声明的总大小。
    pub fn is_overrun(&self) -> bool {
        self.total.is_some_and(|t| self.bytes_done > t)
    }

    /// 生成当前时刻的进度报告。
    pub fn report(&self) -> ProgressReport {
        ProgressReport {
            bytes_written: self.bytes_done,
            total_bytes: self.total,
            percentage: self.pct(),
        }
    }
}
