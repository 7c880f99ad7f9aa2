//! Generates the `ErrorKind` catalog from the kind lists.
//!
//! The baseline list in `kinds/predefined.kinds` is followed by
//! `kinds/user_defined.kinds` and, when set, the file named by
//! `ERROR_TRAIL_KINDS_FILE`. The output is a single `define_error_kinds!`
//! invocation written to `$OUT_DIR/error_kinds.rs`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

#[path = "build/catalog.rs"]
mod catalog;

use catalog::KindDef;

const KINDS_FILE_ENV: &str = "ERROR_TRAIL_KINDS_FILE";

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let predefined = manifest_dir.join("kinds/predefined.kinds");
    let user_defined = manifest_dir.join("kinds/user_defined.kinds");

    println!("cargo:rerun-if-changed={}", predefined.display());
    println!("cargo:rerun-if-changed={}", user_defined.display());
    println!("cargo:rerun-if-changed=build/catalog.rs");
    println!("cargo:rerun-if-env-changed={KINDS_FILE_ENV}");

    let mut sources = vec![predefined, user_defined];
    if let Some(extra) = env::var_os(KINDS_FILE_ENV).filter(|v| !v.is_empty()) {
        // Relative paths resolve against this package, not the embedding one.
        let extra = manifest_dir.join(extra);
        println!("cargo:rerun-if-changed={}", extra.display());
        sources.push(extra);
    }

    let mut kinds = Vec::new();
    for source in &sources {
        read_kinds(source, &mut kinds)?;
    }
    catalog::check_catalog(&kinds).map_err(|msg| anyhow!(msg))?;

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(out_dir.join("error_kinds.rs"), catalog::render(&kinds))?;

    Ok(())
}

fn read_kinds(path: &Path, kinds: &mut Vec<KindDef>) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading error kind list {}", path.display()))?;
    catalog::parse_kinds(&path.display().to_string(), &contents, kinds).map_err(|msg| anyhow!(msg))
}
