use std::error::Error;
use vergen_gitcl::{Emitter, GitclBuilder};

/// Environment variable that packagers can set when building outside of a git checkout
const GIT_DESCRIBE_OVERRIDE: &str = "LEVENSHTEIN_DAG_GIT_DESCRIBE";

/// Emits the git describe string that FULL_VERSION is built from.
/// # Errors
/// * if `git` is not installed
/// * if there is no .git folder, e.g. when building from a source tarball
fn emit_git_describe() -> Result<(), Box<dyn Error>> {
    let gitcl = GitclBuilder::default()
        .describe(false, true, Some("NoTagShouldMatchThisPattern"))
        .build()?;

    Emitter::default()
        .fail_on_error()
        .add_instructions(&gitcl)?
        .emit()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed={GIT_DESCRIBE_OVERRIDE}");
    if emit_git_describe().is_err() {
        let git_desc = std::env::var(GIT_DESCRIBE_OVERRIDE)
            .unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE={git_desc}");
    }

    // vergen tracks the git state, we track the manifest and sources
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=src");

    Ok(())
}
