#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    // The icon is optional; builds from a bare checkout must not fail on it.
    if std::path::Path::new("res/task-heatmap.ico").exists() {
        res.set_icon("res/task-heatmap.ico");
    }
    res.set("FileDescription", "task-heatmap CLI")
        .set("ProductName", "task-heatmap")
        .set("OriginalFilename", "task-heatmap.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));

    if let Err(e) = res.compile() {
        println!("cargo:warning=failed to embed Windows resources: {e}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
