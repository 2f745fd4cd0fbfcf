use std::io::Write;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::internal::downloader::structs::DownloadError;
use crate::internal::downloader::traits::download::DownloadHook;
use crate::internal::progress::structs::ConsoleWriter;

/// 许可协议确认器。
///
/// 只尝试一次，不重试；作为下载钩子注册时在 `before_start` 中执行，
/// 失败会让下载在连接源地址、创建目标文件之前中止。
#[derive(Debug, Clone)]
pub struct LicenseAcceptor {
    client: Client,
    license_url: Url,
}

impl LicenseAcceptor {
    pub fn new(client: &Client, license_url: Url) -> Self {
        Self {
            client: client.clone(),
            license_url,
        }
    }

    /// 发送 GET；仅 200 视为接受，其余状态码与网络错误均返回错误。
    pub async fn accept(&self) -> Result<(), DownloadError> {
        self.accept_reporting_to(&mut ConsoleWriter::stdout()).await
    }

    /// 同 [`LicenseAcceptor::accept`]，确认提示写到 `console`。
    pub async fn accept_reporting_to<W: Write + Send>(
        &self,
        console: &mut ConsoleWriter<W>,
    ) -> Result<(), DownloadError> {
        let resp = self
            .client
            .get(self.license_url.clone())
            .send()
            .await
            .map_err(DownloadError::LicenseUnreachable)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(DownloadError::LicenseRejected {
                url: self.license_url.to_string(),
                status,
            });
        }

        tracing::info!(url = %self.license_url, "license agreement accepted");
        console.write_message("License agreement accepted.");
        Ok(())
    }
}

#[async_trait]
impl DownloadHook for LicenseAcceptor {
    async fn before_start(&mut self) -> Result<(), DownloadError> {
        self.accept().await
    }
}
