//! 单阶段钩子适配器：将闭包包装成 [`DownloadHook`]，供 `with_xx_hook` 使用。

use std::future::Future;

use async_trait::async_trait;

use crate::internal::downloader::structs::{DownloadError, DownloadStatus};
use crate::internal::downloader::traits::download::DownloadHook;

/// 仅实现「开始前」的钩子适配器。
pub(crate) struct BeforeStartHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> DownloadHook for BeforeStartHookAdapter<F>
where
    F: FnMut() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), DownloadError>> + Send + 'static,
{
    async fn before_start(&mut self) -> Result<(), DownloadError> {
        (self.0)().await
    }
}

/// 仅实现「状态变化」的钩子适配器。
pub(crate) struct OnStatusHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> DownloadHook for OnStatusHookAdapter<F>
where
    F: FnMut(DownloadStatus) + Send + Sync + 'static,
{
    fn on_status(&mut self, status: DownloadStatus) {
        (self.0)(status);
    }
}

/// 仅实现「完成后」的钩子适配器。
pub(crate) struct AfterCompleteHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> DownloadHook for AfterCompleteHookAdapter<F>
where
    F: FnMut() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn after_complete(&mut self) {
        (self.0)().await
    }
}
