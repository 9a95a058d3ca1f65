#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bench-chart binary.
#[macro_export]
macro_rules! bench_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bench-chart"))
    };
}

/// The three-row benchmark used throughout the tests.
pub const SAMPLE_RESULTS: &str = "method,ms\nDijkstra,12.5\nA*,8.1\nBFS,15.0\n";

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture whose `results.csv` holds [`SAMPLE_RESULTS`].
    pub fn with_sample_results() -> Self {
        let fixture = Self::new();
        fixture.create_results(SAMPLE_RESULTS);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes `results.csv`.
    pub fn create_results(&self, content: &str) {
        self.create_file("results.csv", content);
    }

    /// Writes `.bench-chart.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bench-chart.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn read_bytes(&self, relative_path: &str) -> Vec<u8> {
        fs::read(self.join(relative_path)).expect("Failed to read file")
    }
}

/// Width and height from a PNG's IHDR chunk.
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}
