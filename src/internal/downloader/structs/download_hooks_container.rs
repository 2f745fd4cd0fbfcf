use crate::internal::downloader::structs::{DownloadError, DownloadStatus};
use crate::internal::downloader::traits::download::DownloadHook;

/// 钩子容器：多个钩子，按添加顺序依次执行。
#[derive(Default)]
pub struct DownloadHooksContainer {
    hooks: Vec<Box<dyn DownloadHook>>,
}

impl DownloadHooksContainer {
    /// 添加一个下载钩子；支持多次调用以注册多个钩子。
    pub fn add(&mut self, hook: impl DownloadHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub async fn run_before_start(&mut self) -> Result<(), DownloadError> {
        for h in self.hooks.iter_mut() {
            h.before_start().await?;
        }
        Ok(())
    }

    pub fn run_on_status(&mut self, status: DownloadStatus) {
        tracing::debug!(?status, "download status changed");
        for h in self.hooks.iter_mut() {
            h.on_status(status);
        }
    }

    pub async fn run_after_complete(&mut self) {
        for h in self.hooks.iter_mut() {
            h.after_complete().await;
        }
    }
}
