//! 进度领域模块：累计已写入字节、计算百分比，并把进度行分发给多个写出端口（控制台、日志文件等）。
//!
//! 对外导出以 [`crate::progress`] 为准，此处仅做模块划分。

pub mod structs;
pub mod traits;
