pub mod console_writer;
pub mod download_progress;
pub mod log_file_writer;
pub mod progress_report;
pub mod progress_sink;
pub mod progress_writers_container;
pub mod writer_adapters;

// 重导出公共类型
pub use console_writer::ConsoleWriter;
pub use download_progress::DownloadProgress;
pub use log_file_writer::LogFileWriter;
pub use progress_report::ProgressReport;
pub use progress_sink::ProgressSink;
pub use progress_writers_container::ProgressWritersContainer;
pub(crate) use writer_adapters::OnReportWriterAdapter;
