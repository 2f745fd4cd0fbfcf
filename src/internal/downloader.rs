//! 下载器领域模块：打开源地址、按块写盘、驱动进度汇聚器，以及可选的许可协议前置确认。
//!
//! 使用方式：`FileDownloader::new(&client, url).save_to(path).log_progress_to(log).send().await`
//! 对外导出以 [`crate::downloader`] 为准，此处仅做模块划分，不重复 pub use。

pub mod structs;
pub mod traits;
