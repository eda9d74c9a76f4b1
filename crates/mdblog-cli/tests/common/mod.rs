#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured `mdblog` command suitable for integration tests.
///
/// Points the config at a file that does not exist so the developer's own
/// configuration never leaks into test runs.
#[allow(dead_code)]
pub fn mdblog_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdblog"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("MDBLOG_CONFIG", root.join("no-such-config.toml"));
    cmd.env("MDBLOG_CONTENT_DIR", root);
    cmd.env_remove("MDBLOG_CACHE_TTL_SECS");
    cmd.env_remove("MDBLOG_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[allow(dead_code)]
pub fn write_post(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small blog: two categories, one series, one Korean alias.
#[allow(dead_code)]
pub fn sample_blog() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create content dir");
    let root = dir.path();

    write_post(
        root,
        "tech/hello-world.mdx",
        "---\ntitle: Hello World\ndate: 2024-01-10\ndescription: First post\ntags: [intro]\n---\n# Hello\n## Why\n### Because\n## How\n",
    );
    write_post(
        root,
        "tech/ownership.mdx",
        "---\ntitle: Ownership\ndate: 2024-02-01\ndescription: Rust ownership\nkoreanSlug: \"소유권\"\nseries: rust-basics\nseriesTitle: Rust Basics\nseriesOrder: 2\ntags: [rust]\nstatus: done\n---\n# Ownership\n## Moves\n",
    );
    write_post(
        root,
        "tech/traits.md",
        "---\ntitle: Traits\ndate: 2023-12-01\ndescription: Rust traits\nseries: rust-basics\nseriesOrder: 1\ntags: [rust]\npriority: high\n---\nNo headings here.\n",
    );
    write_post(
        root,
        "life/moving.mdx",
        "---\ntitle: Moving House\ndate: 2024-03-15\ndescription: Boxes\n---\nSo many boxes.\n",
    );
    dir
}
