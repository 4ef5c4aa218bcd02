//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::Output;

use flate2::write::GzEncoder;
use flate2::Compression;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bootstrap script that records its arguments in the source tree
pub const RECORDING_BOOTSTRAP: &str = "#!/bin/sh\necho \"bootstrap $*\" >> calls.log\n";

/// b2 script that records its arguments in the source tree
pub const RECORDING_B2: &str = "#!/bin/sh\necho \"b2 $*\" >> calls.log\n";

/// Bootstrap script that prints progress to stdout, like the real one
pub const CHATTY_BOOTSTRAP: &str =
    "#!/bin/sh\necho 'Building Boost.Build engine'\necho \"bootstrap $*\" >> calls.log\n";

/// Bootstrap script that always fails
pub const FAILING_BOOTSTRAP: &str = "#!/bin/sh\necho 'bootstrap broke' >&2\nexit 1\n";

/// Build a `.tar.gz` laid out like a Boost source release
///
/// Every entry lives under `boost_<version_underscored>/`; the two scripts
/// are executable.
pub fn fake_boost_archive(version_underscored: &str, bootstrap: &str, b2: &str) -> Vec<u8> {
    let root = format!("boost_{version_underscored}");
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let entries: [(&str, &[u8], u32); 4] = [
        ("bootstrap.sh", bootstrap.as_bytes(), 0o755),
        ("b2", b2.as_bytes(), 0o755),
        ("boost/version.hpp", b"#define BOOST_VERSION 107600\n", 0o644),
        ("Jamroot", b"# jam\n", 0o644),
    ];

    for (name, contents, mode) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(mode);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("{root}/{name}"), contents)
            .expect("Failed to append archive entry");
    }

    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream")
}

/// Serve `archive` at the release path for `version` (e.g. `1.76`)
pub async fn serve_release(version: &str, archive: Vec<u8>) -> MockServer {
    let server = MockServer::start().await;
    let underscored = format!("{version}.0").replace('.', "_");
    Mock::given(method("GET"))
        .and(path(format!(
            "/release/{version}.0/source/boost_{underscored}.tar.gz"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive))
        .mount(&server)
        .await;
    server
}

/// A port nothing is listening on
pub fn unused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("No local address").port()
}

/// Run boost-install with `args` and `work_dir` as its work directory
pub async fn run_install(work_dir: &Path, args: &[&str]) -> Output {
    let cwd = std::env::current_dir().expect("No current directory");
    run_install_in(&cwd, work_dir, args).await
}

/// Run boost-install from `cwd`, passing `work_dir` unchanged
pub async fn run_install_in(cwd: &Path, work_dir: &Path, args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_boost-install"))
        .current_dir(cwd)
        .args(args)
        .arg("--work-dir")
        .arg(work_dir)
        .env_remove("BOOST_INSTALL_BASE_URL")
        .env_remove("BOOST_INSTALL_WORK_DIR")
        .output()
        .await
        .expect("Failed to execute boost-install")
}
