//! 下载相关 trait：钩子接口，供下载器在各阶段调用。

use async_trait::async_trait;

use crate::internal::downloader::structs::{DownloadError, DownloadStatus};

/// 下载流程钩子：在「开始前 / 状态变化 / 完成后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_status_hook` / `with_after_complete_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过下载器的 `with_hook` 注册。
///
/// 进度行不走钩子，见 [`ProgressWriter`](crate::progress::ProgressWriter)。
#[async_trait]
pub trait DownloadHook: Send + Sync {
    /// 发起主请求、创建目标文件之前调用（如：确认许可协议）。返回 `Err` 则中止本次下载。
    async fn before_start(&mut self) -> Result<(), DownloadError> {
        Ok(())
    }

    /// 状态机每次迁移时调用。
    fn on_status(&mut self, _status: DownloadStatus) {}

    /// 下载成功结束、所有资源释放后调用。
    async fn after_complete(&mut self) {}
}
