use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_with_activities, setup_home, th, today};

#[test]
fn test_plain_heatmap_shows_window_and_summary() {
    let home = setup_home("heatmap_plain");
    init_with_activities(&home, &["Reading"]);
    th(&home).args(["log", "8"]).assert().success();

    let start = (today() - chrono::Duration::days(364))
        .format("%Y-%m-%d")
        .to_string();
    let end = today().format("%Y-%m-%d").to_string();

    th(&home)
        .args(["heatmap", "--plain", "--anchor", "today"])
        .assert()
        .success()
        .stdout(contains(format!("Reading: {start} → {end}")))
        .stdout(contains("█"))
        .stdout(contains("less ·░▒▓█ more (full at 8 h)"))
        .stdout(contains("Total hours this year: 8 hrs"));
}

#[test]
fn test_first_entry_anchor_starts_at_first_log() {
    let home = setup_home("heatmap_first_entry");
    init_with_activities(&home, &["Reading"]);
    let first = (today() - chrono::Duration::days(3))
        .format("%Y-%m-%d")
        .to_string();
    th(&home)
        .args(["log", "2", "--date", &first])
        .assert()
        .success();

    th(&home)
        .args(["heatmap", "--plain"])
        .assert()
        .success()
        .stdout(contains(format!("Reading: {first} →")));
}

#[test]
fn test_colored_heatmap_uses_truecolor() {
    let home = setup_home("heatmap_color");
    init_with_activities(&home, &["Reading"]);

    th(&home)
        .arg("heatmap")
        .assert()
        .success()
        .stdout(contains("\u{1b}[").and(contains("204;204;204")));
}
