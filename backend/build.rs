use fs_extra::dir::CopyOptions;
use std::fs;
use std::path::Path;

/// Trunk output of the `frontend` crate.
const FRONTEND_DIST: &str = "../frontend/dist";
/// Root embedded by `include_dir!` in `main.rs` is `STATIC_ROOT/dist`.
const STATIC_ROOT: &str = "static";

/// Replaces the embedded tree with a fresh copy of the frontend bundle.
fn copy_frontend_bundle(dist: &Path, static_root: &Path) -> Result<(), fs_extra::error::Error> {
    if static_root.exists() {
        fs::remove_dir_all(static_root)?;
    }
    fs::create_dir_all(static_root)?;
    fs_extra::dir::copy(dist, static_root, &CopyOptions::new().overwrite(true))?;
    Ok(())
}

fn main() {
    let dist = Path::new(FRONTEND_DIST);
    let static_root = Path::new(STATIC_ROOT);

    if dist.exists() {
        if let Err(e) = copy_frontend_bundle(dist, static_root) {
            panic!("could not embed the WheatSure frontend from {}: {}", dist.display(), e);
        }
    } else {
        println!("cargo:warning=frontend bundle not found at {FRONTEND_DIST}; serving API only");
    }

    // `include_dir!` needs the directory even when no bundle was built.
    if let Err(e) = fs::create_dir_all(static_root.join("dist")) {
        panic!("could not create {}/dist: {}", STATIC_ROOT, e);
    }

    println!("cargo:rerun-if-changed={FRONTEND_DIST}");
}
