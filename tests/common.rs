#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Command bound to a private config and data directory.
pub fn th(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("task-heatmap");
    cmd.env("TASK_HEATMAP_HOME", home);
    cmd
}

/// Create a fresh, empty home directory for one test
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_task_heatmap", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Create a temporary output file path inside the home and ensure it's removed
pub fn temp_out(home: &Path, name: &str, ext: &str) -> String {
    let p = home.join(format!("{}_out.{}", name, ext));
    fs::remove_file(&p).ok();
    p.to_string_lossy().to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Initialize the home and add the given activities
pub fn init_with_activities(home: &Path, names: &[&str]) {
    th(home).arg("init").assert().success();
    for name in names {
        th(home)
            .args(["activity", "add", name])
            .assert()
            .success();
    }
}
