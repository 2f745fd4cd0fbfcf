pub mod progress_writer;
