/// 内部导出的模块
mod internal;


/// 字节数格式化（二进制单位，保留一位小数）
pub mod format {
    use crate::internal;
    pub use internal::format::functions::*;
}

/// 进度累计与写出端口
pub mod progress {
    use crate::internal;
    pub use internal::progress::structs::progress_report::{PERCENTAGE_UNAVAILABLE, UNKNOWN_SIZE};
    pub use internal::progress::structs::{
        ConsoleWriter, DownloadProgress, LogFileWriter, ProgressReport, ProgressSink,
        ProgressWritersContainer,
    };
    pub use internal::progress::traits::progress_writer::ProgressWriter;
}

/// 许可协议前置确认
pub mod license {
    use crate::internal;
    pub use internal::license::structs::LicenseAcceptor;
}

/// 下载器：类型与入口（以 lib 为中心，此处统一导出）
pub mod downloader {
    use crate::internal;
    pub use internal::downloader::structs::{
        DownloadConfig, DownloadError, DownloadHooksContainer, DownloadOutcome, DownloadRequest,
        DownloadStatus, ErrorKind, FileDownloader, DEFAULT_CHUNK_SIZE,
    };
    pub use internal::downloader::traits::download::DownloadHook;
}

/// 共享 HTTP 客户端
pub mod http {
    use crate::internal;
    pub use internal::http::functions::*;
}

/// 命令行外壳，供 `file-downloader` 二进制使用
pub mod cli {
    use crate::internal;
    pub use internal::cli::functions::*;
    pub use internal::cli::structs::*;
}
