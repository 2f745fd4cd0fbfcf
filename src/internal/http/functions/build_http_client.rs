use std::time::Duration;

use reqwest::Client;

use crate::internal::downloader::structs::DownloadError;

/// HTTP 客户端配置。
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// 建立连接的超时时间，`None` 表示不限制
    pub connect_timeout: Option<Duration>,
}

/// 创建下载与许可协议确认共用的客户端。
///
/// 只走 HTTP/1.1，沿用 reqwest 默认的重定向策略，不附加任何自定义请求头。
pub fn build_http_client(config: &HttpClientConfig) -> Result<Client, DownloadError> {
    let mut builder = Client::builder().http1_only();
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    Ok(builder.build()?)
}
