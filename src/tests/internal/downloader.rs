//! 下载器测试：基于本地测试服务器，覆盖逐字节一致、未知大小、日志完整性、状态机、许可协议拦截与各类失败路径。

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::downloader::{
    DownloadError, DownloadOutcome, DownloadRequest, DownloadStatus, ErrorKind, FileDownloader,
};
use crate::progress::ProgressReport;
use crate::tests::{
    random_bytes, read_log_lines, unused_local_url, CapturedLogs, Route, TestServer,
};

struct Scratch {
    _dir: TempDir,
    dest: PathBuf,
    log: PathBuf,
}

fn scratch() -> Scratch {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("download.bin");
    let log = dir.path().join("progress.log");
    Scratch {
        _dir: dir,
        dest,
        log,
    }
}

type Reports = Arc<Mutex<Vec<ProgressReport>>>;
type Statuses = Arc<Mutex<Vec<DownloadStatus>>>;

/// 预配置的下载器：关闭控制台输出，收集进度报告与状态变化。
fn downloader(url: url::Url, s: &Scratch) -> (FileDownloader, Reports, Statuses) {
    let reports: Reports = Default::default();
    let statuses: Statuses = Default::default();
    let r = reports.clone();
    let st = statuses.clone();
    let d = FileDownloader::new(&reqwest::Client::new(), url)
        .save_to(&s.dest)
        .log_progress_to(&s.log)
        .without_console()
        .with_on_progress_hook(move |report| r.lock().unwrap().push(report.clone()))
        .with_on_status_hook(move |status| st.lock().unwrap().push(status));
    (d, reports, statuses)
}

fn assert_is_prefix(file: &Path, body: &[u8]) {
    let written = std::fs::read(file).unwrap();
    assert!(written.len() <= body.len());
    assert_eq!(written.as_slice(), &body[..written.len()]);
}

#[tokio::test]
async fn known_length_download_is_byte_identical() {
    let body = random_bytes(10_000);
    let server = TestServer::start(vec![("/file", Route::ok(body.clone()))]).await;
    let s = scratch();
    let (d, reports, _) = downloader(server.url("/file"), &s);
    let (logs, _guard) = CapturedLogs::install();

    let outcome = d.send().await.unwrap();

    let logs = logs.contents();
    assert!(!logs.contains("File size is unknown"), "{}", logs);
    assert!(!logs.contains("transferred size differs"), "{}", logs);
    assert_eq!(outcome.bytes_written, 10_000);
    assert_eq!(outcome.declared_total, Some(10_000));
    assert_eq!(outcome.length_mismatch(), None);
    assert_eq!(std::fs::read(&s.dest).unwrap(), body);

    let reports = reports.lock().unwrap();
    let lines = read_log_lines(&s.log);
    assert_eq!(lines.len(), reports.len());
    assert_eq!(
        lines.last().unwrap(),
        "Download Progress: 100.00% (9.8 KB of 9.8 KB)"
    );

    let mut previous = 0;
    for (report, line) in reports.iter().zip(&lines) {
        assert!(report.bytes_written > previous);
        assert!(report.bytes_written - previous <= 1024);
        previous = report.bytes_written;
        assert_eq!(&report.to_string(), line);

        let expected = format!("{:.2}%", report.bytes_written as f64 * 100.0 / 10_000.0);
        assert_eq!(report.percentage_label(), expected);
    }
}

#[tokio::test]
async fn chunk_size_does_not_change_the_result() {
    let body = random_bytes(3_000);
    let server = TestServer::start(vec![("/file", Route::ok(body.clone()))]).await;

    for chunk_size in [1usize, 7, 1024, 64 * 1024] {
        let s = scratch();
        let (d, reports, _) = downloader(server.url("/file"), &s);
        let outcome = d.chunk_size(chunk_size).send().await.unwrap();

        assert_eq!(outcome.bytes_written, 3_000);
        assert_eq!(std::fs::read(&s.dest).unwrap(), body);

        let reports = reports.lock().unwrap();
        assert_eq!(read_log_lines(&s.log).len(), reports.len());
        assert!(reports.len() >= 3_000usize.div_ceil(chunk_size));
    }
}

#[tokio::test]
async fn unknown_size_still_completes() {
    let body = random_bytes(5_000);
    let server = TestServer::start(vec![("/file", Route::chunked(body.clone()))]).await;
    let s = scratch();
    let (d, reports, _) = downloader(server.url("/file"), &s);
    let (logs, _guard) = CapturedLogs::install();

    let outcome = d.send().await.unwrap();

    let logs = logs.contents();
    let warning = logs
        .lines()
        .find(|l| l.contains("File size is unknown"))
        .unwrap_or_else(|| panic!("no unknown-size warning in:\n{}", logs));
    assert!(warning.contains("WARN"), "{}", warning);
    assert!(!warning.contains("Warning:"), "{}", warning);
    assert_eq!(outcome.declared_total, None);
    assert_eq!(outcome.bytes_written, 5_000);
    assert_eq!(std::fs::read(&s.dest).unwrap(), body);

    let lines = read_log_lines(&s.log);
    assert_eq!(lines.len(), reports.lock().unwrap().len());
    assert!(!lines.is_empty());
    for line in &lines {
        assert!(line.contains("N/A"), "{}", line);
        assert!(line.contains("Unknown size"), "{}", line);
    }
    assert_eq!(
        lines.last().unwrap(),
        "Download Progress: N/A (4.9 KB of Unknown size)"
    );
}

#[tokio::test]
async fn empty_resource_creates_empty_file_without_progress_lines() {
    let server = TestServer::start(vec![("/empty", Route::ok(Vec::new()))]).await;
    let s = scratch();
    let (d, reports, _) = downloader(server.url("/empty"), &s);

    let outcome = d.send().await.unwrap();

    assert_eq!(outcome.bytes_written, 0);
    assert_eq!(outcome.declared_total, None);
    assert_eq!(std::fs::read(&s.dest).unwrap(), Vec::<u8>::new());
    assert!(read_log_lines(&s.log).is_empty());
    assert!(reports.lock().unwrap().is_empty());
}

#[tokio::test]
async fn status_walks_through_the_success_path() {
    let server = TestServer::start(vec![("/file", Route::ok(random_bytes(100)))]).await;
    let s = scratch();
    let (d, _, statuses) = downloader(server.url("/file"), &s);

    let completed = Arc::new(AtomicUsize::new(0));
    let c = completed.clone();
    d.with_after_complete_hook(move || {
        let c = c.clone();
        async move {
            c.fetch_add(1, Ordering::SeqCst);
        }
    })
    .send()
    .await
    .unwrap();

    assert_eq!(
        *statuses.lock().unwrap(),
        [
            DownloadStatus::Idle,
            DownloadStatus::Connecting,
            DownloadStatus::Streaming,
            DownloadStatus::Completed,
        ]
    );
    assert_eq!(completed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_license_blocks_the_download() {
    let server = TestServer::start(vec![
        ("/license", Route::status(403)),
        ("/file", Route::ok(random_bytes(100))),
    ])
    .await;
    let s = scratch();
    let (d, _, statuses) = downloader(server.url("/file"), &s);

    let err = d
        .accept_license(server.url("/license"))
        .send()
        .await
        .unwrap_err();

    match &err {
        DownloadError::LicenseRejected { status, .. } => assert_eq!(status.as_u16(), 403),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.kind(), ErrorKind::LicenseRejected);
    assert_eq!(
        err.to_string(),
        "failed to accept license agreement: server returned HTTP code 403"
    );
    assert_eq!(server.hits("/file"), 0);
    assert!(!s.dest.exists());
    assert_eq!(
        *statuses.lock().unwrap(),
        [
            DownloadStatus::Idle,
            DownloadStatus::Connecting,
            DownloadStatus::Failed,
        ]
    );
}

#[tokio::test]
async fn accepted_license_is_requested_before_the_file() {
    let body = random_bytes(2_048);
    let server = TestServer::start(vec![
        ("/license", Route::ok(b"accepted".to_vec())),
        ("/file", Route::ok(body.clone())),
    ])
    .await;
    let s = scratch();
    let (d, _, _) = downloader(server.url("/file"), &s);

    d.accept_license(server.url("/license")).send().await.unwrap();

    assert_eq!(server.requests(), ["/license", "/file"]);
    assert_eq!(std::fs::read(&s.dest).unwrap(), body);
}

#[tokio::test]
async fn unreachable_license_endpoint_is_a_license_failure() {
    let server = TestServer::start(vec![("/file", Route::ok(random_bytes(10)))]).await;
    let s = scratch();
    let (d, _, _) = downloader(server.url("/file"), &s);

    let err = d
        .accept_license(unused_local_url("/license").await)
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::LicenseUnreachable(_)));
    assert_eq!(err.kind(), ErrorKind::LicenseRejected);
    assert_eq!(server.hits("/file"), 0);
}

#[tokio::test]
async fn error_status_is_a_transport_failure() {
    let server = TestServer::start(vec![]).await;
    let s = scratch();
    let (d, _, statuses) = downloader(server.url("/missing"), &s);

    let err = d.send().await.unwrap_err();

    assert!(matches!(err, DownloadError::Request(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!s.dest.exists());
    assert_eq!(
        statuses.lock().unwrap().last(),
        Some(&DownloadStatus::Failed)
    );
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure() {
    let s = scratch();
    let (d, _, _) = downloader(unused_local_url("/file").await, &s);

    let err = d.send().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.exit_code(), 69);
}

#[tokio::test]
async fn interrupted_body_leaves_a_partial_prefix() {
    let body = random_bytes(6_000);
    let server = TestServer::start(vec![(
        "/file",
        Route::truncated(body[..2_000].to_vec(), 6_000),
    )])
    .await;
    let s = scratch();
    let (d, reports, statuses) = downloader(server.url("/file"), &s);

    let err = d.send().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_is_prefix(&s.dest, &body);
    assert_eq!(
        read_log_lines(&s.log).len(),
        reports.lock().unwrap().len()
    );
    assert_eq!(
        statuses.lock().unwrap().last(),
        Some(&DownloadStatus::Failed)
    );
}

#[tokio::test]
async fn missing_destination_fails_before_connecting() {
    let server = TestServer::start(vec![("/file", Route::ok(random_bytes(10)))]).await;
    let s = scratch();

    let statuses = Arc::new(Mutex::new(Vec::new()));
    let seen = statuses.clone();

    let err = FileDownloader::new(&reqwest::Client::new(), server.url("/file"))
        .log_progress_to(&s.log)
        .without_console()
        .with_on_status_hook(move |status| seen.lock().unwrap().push(status))
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::NoDestination));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(*statuses.lock().unwrap(), [DownloadStatus::Idle, DownloadStatus::Failed]);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn unopenable_progress_log_is_an_io_failure() {
    let server = TestServer::start(vec![("/file", Route::ok(random_bytes(10)))]).await;
    let s = scratch();
    let (d, _, _) = downloader(server.url("/file"), &s);

    let err = d
        .log_progress_to(s.log.join("not-a-dir").join("progress.log"))
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::OpenProgressLog(_)));
    assert_eq!(err.exit_code(), 74);
}

#[tokio::test]
async fn before_start_hook_can_abort() {
    let server = TestServer::start(vec![("/file", Route::ok(random_bytes(10)))]).await;
    let s = scratch();
    let (d, _, _) = downloader(server.url("/file"), &s);

    let err = d
        .with_before_start_hook(|| async { Err::<(), _>(DownloadError::NoProgressLog) })
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::NoProgressLog));
    assert!(server.requests().is_empty());
    assert!(!s.dest.exists());
}

#[tokio::test]
async fn request_wires_destination_log_and_license() {
    let body = random_bytes(1_500);
    let server = TestServer::start(vec![
        ("/license", Route::ok(Vec::new())),
        ("/file", Route::ok(body.clone())),
    ])
    .await;
    let s = scratch();
    let request = DownloadRequest::new(
        server.url("/file").as_str(),
        Some(server.url("/license").as_str()),
        &s.dest,
        &s.log,
    )
    .unwrap();

    let outcome = FileDownloader::from_request(&reqwest::Client::new(), &request)
        .without_console()
        .send()
        .await
        .unwrap();

    assert_eq!(outcome.bytes_written, 1_500);
    assert_eq!(server.requests(), ["/license", "/file"]);
    assert_eq!(std::fs::read(&s.dest).unwrap(), body);
    assert_eq!(
        read_log_lines(&s.log).last().unwrap(),
        "Download Progress: 100.00% (1.5 KB of 1.5 KB)"
    );
}

#[test]
fn length_mismatch_only_with_a_known_total() {
    let exact = DownloadOutcome {
        bytes_written: 10,
        declared_total: Some(10),
    };
    let short = DownloadOutcome {
        bytes_written: 7,
        declared_total: Some(10),
    };
    let unknown = DownloadOutcome {
        bytes_written: 7,
        declared_total: None,
    };
    assert_eq!(exact.length_mismatch(), None);
    assert_eq!(short.length_mismatch(), Some((10, 7)));
    assert_eq!(unknown.length_mismatch(), None);
}

#[test]
fn length_mismatch_is_logged_as_a_warning() {
    let (logs, _guard) = CapturedLogs::install();

    DownloadOutcome {
        bytes_written: 10,
        declared_total: Some(10),
    }
    .warn_on_length_mismatch();
    assert_eq!(logs.contents(), "");

    DownloadOutcome {
        bytes_written: 7,
        declared_total: Some(10),
    }
    .warn_on_length_mismatch();
    let logs = logs.contents();
    assert!(logs.contains("WARN"), "{}", logs);
    assert!(logs.contains("declared=10"), "{}", logs);
    assert!(logs.contains("actual=7"), "{}", logs);
}
