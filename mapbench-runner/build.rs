use std::path::PathBuf;

use cargo_metadata::{Metadata, MetadataCommand};
use rustc_version::version_meta;

/// The benchmarked libraries (and the measuring library) whose versions are reported
const LIBRARIES: [&str; 4] = ["im", "rpds", "indexmap", "criterion"];

/// The version of the library `name` the workspace members resolved to
fn resolved_version(meta: &Metadata, name: &str) -> Option<String> {
    let resolve = meta.resolve.as_ref()?;
    resolve
        .nodes
        .iter()
        .filter(|node| meta.workspace_members.contains(&node.id))
        .flat_map(|node| node.dependencies.iter())
        .map(|id| &meta[id])
        .find(|package| package.name.as_str() == name)
        .map(|package| package.version.to_string())
}

fn main() {
    let meta = version_meta().expect("The rustc version should be present");
    println!(
        "cargo:rustc-env=MAPBENCH_RUSTC_VERSION={}",
        meta.short_version_string
    );
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let workspace = match MetadataCommand::new()
        .manifest_path(manifest_dir.join("Cargo.toml"))
        .exec()
    {
        Ok(workspace) => {
            println!(
                "cargo:rerun-if-changed={}",
                workspace.workspace_root.join("Cargo.lock")
            );
            Some(workspace)
        }
        Err(error) => {
            println!("cargo:warning=Unable to query the versions of the benchmarked libraries: {error}");
            None
        }
    };

    for name in LIBRARIES {
        let version = workspace
            .as_ref()
            .and_then(|workspace| resolved_version(workspace, name))
            .unwrap_or_else(|| "unknown".to_owned());
        println!(
            "cargo:rustc-env=MAPBENCH_VERSION_{}={version}",
            name.to_uppercase()
        );
    }
}
