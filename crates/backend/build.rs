use std::env;
use std::fs;
use std::path::Path;

/// Files looked up next to the executable at runtime
const RUNTIME_FILES: [&str; 2] = ["config.toml", "db.json"];

fn main() {
    for name in RUNTIME_FILES {
        println!("cargo:rerun-if-changed=../../{}", name);
    }

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out;
    // the binary lands in target/<profile>
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    for name in RUNTIME_FILES {
        let source = workspace_root.join(name);
        let dest = target_dir.join(name);

        if source.exists() {
            fs::copy(&source, &dest)
                .unwrap_or_else(|e| panic!("Failed to copy {}: {}", name, e));
            println!("cargo:warning=Copied {} to {:?}", name, dest);
        } else {
            println!("cargo:warning={} not found at {:?}, using built-in defaults", name, source);
        }
    }
}
