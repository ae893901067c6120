//! Common test utilities and fixtures for integration tests.

pub mod fixtures;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use mcq_core::{QuestionOrder, RandomPermuter};
use mcq_shuffle::{Config, OutputFormat, Prompter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// Scratch directory holding the input files of one run.
pub struct TestContext {
    pub dir: TempDir,
}

impl TestContext {
    /// Create a context with `input.txt` and `boilerplate.txt` written.
    pub fn new() -> Self {
        let ctx = Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        };
        ctx.write("input.txt", &fixtures::sample_mcq_content(3, 4));
        ctx.write("boilerplate.txt", fixtures::SAMPLE_BOILERPLATE);
        ctx
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("failed to write fixture");
        path
    }

    pub fn remove(&self, name: &str) {
        std::fs::remove_file(self.path(name)).expect("failed to remove fixture");
    }

    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("failed to read output")
    }

    /// Non-interactive config pointing at this directory.
    pub fn config(&self, format: OutputFormat, sets: usize) -> Config {
        Config {
            input: self.path("input.txt"),
            boilerplate: self.path("boilerplate.txt"),
            image: self.path("set_image.jpg"),
            output: Some(self.path("output")),
            format,
            sets: Some(sets),
            question_order: Some(QuestionOrder::Original),
            interactive: false,
            ..Config::default()
        }
    }
}

/// Prompter fed from a fixed script of answers.
pub fn scripted(answers: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
}

pub fn seeded(seed: u64) -> RandomPermuter<StdRng> {
    RandomPermuter::new(StdRng::seed_from_u64(seed))
}
