//! Build script for storefront crate.
//!
//! Fingerprints the stylesheet and script so templates can link to
//! content-addressed copies under `static/<kind>/derived/`.

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:warning=CARGO_MANIFEST_DIR not set, skipping asset hashing");
        println!("cargo:rustc-env=CSS_HASH=");
        println!("cargo:rustc-env=JS_HASH=");
        return;
    };
    let root = Path::new(&manifest_dir);

    fingerprint(root, "css", "main.css", "CSS_HASH");
    fingerprint(root, "js", "app.js", "JS_HASH");
}

/// Hash `static/<kind>/<file>` and export the short hash as `env_key`.
///
/// A missing or unreadable asset exports an empty hash so templates fall
/// back to the unhashed path.
fn fingerprint(root: &Path, kind: &str, file: &str, env_key: &str) {
    let source = root.join("static").join(kind).join(file);
    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(&source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {file}: {e}");
            println!("cargo:rustc-env={env_key}=");
            return;
        }
    };

    // First 8 hex chars of SHA256
    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..8).unwrap_or(&digest);

    match copy_derived(root, kind, file, &source, short_hash) {
        Ok(()) => println!("cargo:rustc-env={env_key}={short_hash}"),
        Err(e) => {
            println!("cargo:warning=Could not write derived {file}: {e}");
            println!("cargo:rustc-env={env_key}=");
        }
    }
}

fn copy_derived(
    root: &Path,
    kind: &str,
    file: &str,
    source: &Path,
    short_hash: &str,
) -> io::Result<()> {
    let derived_dir = root.join("static").join(kind).join("derived");
    fs::create_dir_all(&derived_dir)?;

    let (stem, ext) = file.rsplit_once('.').unwrap_or((file, ""));
    fs::copy(source, derived_dir.join(format!("{stem}.{short_hash}.{ext}")))?;
    Ok(())
}
