//! 许可协议前置确认：下载前 GET 一次许可协议地址，必须返回 200。

pub mod structs;
