//! Isolated storefront environments for driving the `nexbuy` binary

#![allow(dead_code)]

pub use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary home directory. The TempDir must stay alive for the whole test.
pub struct TestStorefront {
    pub temp_dir: TempDir,
    pub home: PathBuf,
}

impl TestStorefront {
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory the binary stores the cart and session in
    pub fn data_dir(&self) -> PathBuf {
        self.home.join("data")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join("config")
    }

    pub fn cart_file(&self) -> PathBuf {
        self.data_dir().join("nexbuy_cart_v1.json")
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("nexbuy_user.json")
    }

    /// A `nexbuy` command bound to this storefront, with colours disabled
    pub fn nexbuy(&self) -> Command {
        let mut cmd = Command::cargo_bin("nexbuy").expect("nexbuy binary is built");
        cmd.env("NEXBUY_HOME", &self.home)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Parsed contents of the saved cart
    pub fn saved_cart(&self) -> anyhow::Result<serde_json::Value> {
        let raw = fs::read_to_string(self.cart_file())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrite the saved cart with raw text
    pub fn write_cart(&self, raw: &str) -> anyhow::Result<()> {
        fs::create_dir_all(self.data_dir())?;
        fs::write(self.cart_file(), raw)?;
        Ok(())
    }

    /// Write a config file before the first run
    pub fn write_config(&self, json: &str) -> anyhow::Result<()> {
        fs::create_dir_all(self.config_dir())?;
        fs::write(self.config_dir().join("config.json"), json)?;
        Ok(())
    }
}

/// Creates an empty storefront home
pub fn setup_storefront() -> anyhow::Result<TestStorefront> {
    let temp_dir = TempDir::new()?;
    let home = temp_dir.path().join("home");
    fs::create_dir_all(&home)?;

    Ok(TestStorefront { temp_dir, home })
}
