//! Build script for sc2_dicts.
//!
//! Calls out to sc2_dicts_codegen to cross-reference the python-sc2 dict
//! snapshots in `data/` with the id enums in `src/ids/`.

use std::path::Path;
use std::{env, println};

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let manifest_dir = Path::new(&manifest_dir);

    // Additional rerun triggers for build.rs itself
    println!("cargo:rerun-if-changed=build.rs");

    let generated = sc2_dicts_codegen::generate_all(
        Path::new(&out_dir),
        &manifest_dir.join("src/ids"),
        &manifest_dir.join("data"),
    )
    .unwrap_or_else(|e| panic!("sc2_dicts codegen failed: {}", e));

    for artifact in &generated {
        for diagnostic in &artifact.diagnostics {
            println!("cargo:warning={}: {}", artifact.target, diagnostic);
        }
    }
}
