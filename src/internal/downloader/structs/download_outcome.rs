/// 单次下载成功后的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// 实际写入目标文件的字节数
    pub bytes_written: u64,
    /// 服务器声明的大小，未知时为 `None`
    pub declared_total: Option<u64>,
}

impl DownloadOutcome {
    /// 声明大小已知且与实际写入量不一致时返回 `(声明, 实际)`。
    pub fn length_mismatch(&self) -> Option<(u64, u64)> {
        self.declared_total
            .filter(|&total| total != self.bytes_written)
            .map(|total| (total, self.bytes_written))
    }

    /// 长度不一致只告警，不视为失败。
    pub(crate) fn warn_on_length_mismatch(&self) {
        if let Some((declared, actual)) = self.length_mismatch() {
            tracing::warn!(
                declared,
                actual,
                "transferred size differs from the declared content length"
            );
        }
    }
}
