//! 下载相关错误类型。

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// 错误分类，决定 CLI 的退出码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// URL 格式错误或参数缺失，发生在任何网络与文件 I/O 之前
    Configuration,
    /// 许可协议地址返回非 200 或不可达，下载不会开始
    LicenseRejected,
    /// 主下载过程中的网络错误
    Transport,
    /// 本地文件读写错误
    Io,
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no destination path was set")]
    NoDestination,

    #[error("no progress log path was set")]
    NoProgressLog,

    #[error("failed to accept license agreement: server returned HTTP code {}", .status.as_u16())]
    LicenseRejected { url: String, status: StatusCode },

    #[error("failed to accept license agreement: {0}")]
    LicenseUnreachable(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to create destination file: {0}")]
    CreateFile(#[source] io::Error),

    #[error("failed to write destination file: {0}")]
    WriteFile(#[source] io::Error),

    #[error("failed to truncate progress log: {0}")]
    TruncateProgressLog(#[source] io::Error),

    #[error("failed to open progress log: {0}")]
    OpenProgressLog(#[source] io::Error),

    #[error("failed to write progress log: {0}")]
    WriteProgressLog(#[source] io::Error),
}

impl DownloadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } | Self::NoDestination | Self::NoProgressLog => {
                ErrorKind::Configuration
            }
            Self::LicenseRejected { .. } | Self::LicenseUnreachable(_) => {
                ErrorKind::LicenseRejected
            }
            Self::Request(_) => ErrorKind::Transport,
            Self::CreateFile(_)
            | Self::WriteFile(_)
            | Self::TruncateProgressLog(_)
            | Self::OpenProgressLog(_)
            | Self::WriteProgressLog(_) => ErrorKind::Io,
        }
    }

    /// 进程退出码，取值参照 sysexits.h：
    /// - 64：参数/配置错误（EX_USAGE）
    /// - 77：许可协议未通过（EX_NOPERM）
    /// - 69：网络不可用（EX_UNAVAILABLE）
    /// - 74：本地 I/O 错误（EX_IOERR）
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Configuration => 64,
            ErrorKind::LicenseRejected => 77,
            ErrorKind::Transport => 69,
            ErrorKind::Io => 74,
        }
    }
}
