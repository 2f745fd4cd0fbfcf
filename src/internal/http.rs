//! HTTP 客户端构建。

pub mod functions;
