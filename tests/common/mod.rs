//! Common test utilities and helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary workspace holding saved orders and files to import
pub struct OrderDir {
    temp_dir: TempDir,
}

impl OrderDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file to import
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Orders saved by the binary, i.e. `order*.yml` files
    pub fn saved_orders(&self) -> Vec<PathBuf> {
        let mut orders: Vec<PathBuf> = fs::read_dir(self.path())
            .expect("read temp dir")
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("order") && n.ends_with(".yml"))
            })
            .collect();
        orders.sort();
        orders
    }

    /// Contents of the single saved order
    pub fn only_saved_order(&self) -> String {
        let orders = self.saved_orders();
        assert_eq!(orders.len(), 1, "expected exactly one saved order: {orders:?}");
        fs::read_to_string(&orders[0]).expect("read saved order")
    }

    /// The binary, saving into this directory and resolving paths against it
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("takeaway").expect("binary builds");
        cmd.current_dir(self.path())
            .env_remove("TAKEAWAY_OUTPUT_DIR")
            .arg("--output-dir")
            .arg(self.path());
        cmd
    }
}
