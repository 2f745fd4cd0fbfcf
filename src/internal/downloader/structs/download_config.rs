use std::path::PathBuf;

/// 默认每次读取/上报的块大小：1KB
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// 本次下载的配置。
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub save_path: Option<PathBuf>,
    pub progress_log_path: Option<PathBuf>,
    /// 每块最大字节数，网络层收到的大块会按此拆分后逐块写盘与上报
    pub chunk_size: usize,
    /// 是否在标准输出刷新进度行
    pub console_progress: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            progress_log_path: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            console_progress: true,
        }
    }
}
