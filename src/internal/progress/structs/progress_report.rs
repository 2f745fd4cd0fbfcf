use std::fmt;

use crate::internal::format::functions::format_byte_count;

/// 总大小未知时的占位文本
pub const UNKNOWN_SIZE: &str = "Unknown size";

/// 百分比不可用时的占位文本
pub const PERCENTAGE_UNAVAILABLE: &str = "N/A";

/// 单次进度报告，由 [`DownloadProgress::report`](super::DownloadProgress::report) 每次重新计算，不持久化。
///
/// `Display` 输出即进度行：
/// `Download Progress: 42.00% (1.5 KB of 3.6 KB)`，总大小未知时为
/// `Download Progress: N/A (1.5 KB of Unknown size)`。
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub bytes_written: u64,
    pub total_bytes: Option<u64>,
    /// 0～100 的百分比，总大小未知时为 `None`
    pub percentage: Option<f64>,
}

impl ProgressReport {
    pub fn human_bytes_written(&self) -> String {
        format_byte_count(self.bytes_written)
    }

    /// 总大小的可读形式；未知时为 `None`。
    pub fn human_total_bytes(&self) -> Option<String> {
        self.total_bytes.map(format_byte_count)
    }

    /// `"42.00%"` 或 `"N/A"`。
    pub fn percentage_label(&self) -> String {
        match self.percentage {
            Some(pct) => format!("{:.2}%", pct),
            None => PERCENTAGE_UNAVAILABLE.to_string(),
        }
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self
            .human_total_bytes()
            .unwrap_or_else(|| UNKNOWN_SIZE.to_string());
        write!(
            f,
            "Download Progress: {} ({} of {})",
            self.percentage_label(),
            self.human_bytes_written(),
            total
        )
    }
}
