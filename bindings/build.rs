use std::env;
use std::path::{Path, PathBuf};

use cbindgen::{Config, DocumentationStyle, Language};

/// The header is placed next to the library built for the current profile.
fn header_path(crate_dir: &Path) -> PathBuf {
    let profile = env::var("PROFILE").expect("PROFILE missing");
    crate_dir
        .join("..")
        .join("target")
        .join(profile)
        .join("sysio.h")
}

fn header_config() -> Config {
    Config {
        language: Language::C,
        include_guard: Some(String::from("SYSIO_H")),
        documentation_style: DocumentationStyle::Doxy,
        ..Default::default()
    }
}

fn main() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing"));

    // Regenerate the header whenever the exported surface changes.
    println!("cargo:rerun-if-changed=src/lib.rs");
    cbindgen::generate_with_config(&crate_dir, header_config())
        .expect("Generating sysio.h failed")
        .write_to_file(header_path(&crate_dir));

    #[cfg(target_os = "windows")]
    {
        let mut resource = winres::WindowsResource::new();
        resource.set("ProductName", "sysio");
        resource.set("FileDescription", "C interface of the system I/O module");
        resource
            .compile()
            .expect("Embedding Windows resources failed");
    }
}
