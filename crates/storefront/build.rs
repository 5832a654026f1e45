//! Build script for the storefront crate.
//!
//! Copies `static/css/main.css` to `static/css/derived/main.<hash>.css`, where
//! `<hash>` is the first eight hex digits of its SHA-256, and exports the URL
//! path of that copy as `CSS_PATH` for the `css_path` template filter. Editing
//! the stylesheet therefore changes its URL. Older hashed copies are removed.
//!
//! If the copy cannot be written, `CSS_PATH` points at the unhashed
//! `/static/css/main.css` instead.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

const CSS_DIR: &str = "static/css";
const FALLBACK_CSS_PATH: &str = "/static/css/main.css";

fn main() {
    // Only the source file; derived/ is written below and must not retrigger.
    println!("cargo:rerun-if-changed={CSS_DIR}/main.css");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());

    let css_path = match hashed_css(&Path::new(&manifest_dir).join(CSS_DIR)) {
        Ok(path) => path,
        Err(e) => {
            println!("cargo:warning=Serving unhashed main.css: {e}");
            FALLBACK_CSS_PATH.to_string()
        }
    };

    println!("cargo:rustc-env=CSS_PATH={css_path}");
}

/// Write the content-addressed copy of `main.css` and return its URL path.
fn hashed_css(css_dir: &Path) -> io::Result<String> {
    let content = fs::read(css_dir.join("main.css"))?;

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..8).unwrap_or(&digest);
    let file_name = format!("main.{short_hash}.css");

    let derived_dir = css_dir.join("derived");
    fs::create_dir_all(&derived_dir)?;
    fs::write(derived_dir.join(&file_name), &content)?;

    for entry in fs::read_dir(&derived_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name != file_name && name.starts_with("main.") && name.ends_with(".css") {
            fs::remove_file(entry.path())?;
        }
    }

    Ok(format!("/static/css/derived/{file_name}"))
}
