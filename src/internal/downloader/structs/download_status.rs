/// 下载状态（由下载器内部维护，通过钩子对外通知）
///
/// `Idle → Connecting → Streaming → Completed`，任一阶段出错则进入 `Failed`；
/// `Completed` 与 `Failed` 为终态，不会重试或续传。
///
/// 许可协议确认属于 `Connecting` 阶段；只有未设置目标路径或进度日志时才会从 `Idle` 直接进入 `Failed`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Idle,
    Connecting,
    Streaming,
    Completed,
    Failed,
}
