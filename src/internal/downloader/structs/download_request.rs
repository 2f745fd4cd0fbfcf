use std::path::PathBuf;

use url::Url;

use super::download_error::DownloadError;

/// 一次下载请求，由命令行输入构造，构造后不可变。
///
/// URL 在构造时即解析，格式错误会在打开任何网络或文件资源之前失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source_url: Url,
    pub license_url: Option<Url>,
    pub destination: PathBuf,
    pub progress_log: PathBuf,
}

impl DownloadRequest {
    /// `license_url` 为 `None` 或空字符串时表示无需确认许可协议。
    pub fn new(
        source_url: &str,
        license_url: Option<&str>,
        destination: impl Into<PathBuf>,
        progress_log: impl Into<PathBuf>,
    ) -> Result<Self, DownloadError> {
        let source_url = parse_url(source_url)?;
        let license_url = license_url
            .filter(|u| !u.is_empty())
            .map(parse_url)
            .transpose()?;

        Ok(Self {
            source_url,
            license_url,
            destination: destination.into(),
            progress_log: progress_log.into(),
        })
    }
}

pub(crate) fn parse_url(url: &str) -> Result<Url, DownloadError> {
    Url::parse(url).map_err(|source| DownloadError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
