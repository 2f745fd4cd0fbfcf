//! 命令行外壳：参数解析、日志初始化、清空进度日志，然后调用下载器。

pub mod functions;
pub mod structs;
