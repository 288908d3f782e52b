//! Build script compiling the optional C variants.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    let probe = cc::Build::new();
    let compiler = probe.get_compiler();
    let is_gnu_like = compiler.is_like_gnu() || compiler.is_like_clang();
    let is_msvc = compiler.is_like_msvc();

    if !(is_gnu_like || is_msvc) {
        println!("cargo:warning=No GCC/Clang/MSVC compiler found. C variants disabled.");
        return;
    }

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            // Same LLVM backend as rustc, the comparison would say nothing.
            println!("cargo:warning=Vanilla Clang detected. C variants disabled (requires GCC, MSVC, or Apple Clang).");
            return;
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else {
        "MSVC"
    };

    let mut sources = Vec::new();
    match glob::glob("src/**/*.c") {
        Ok(entries) => {
            for file in entries.filter_map(|entry| entry.ok()) {
                println!("cargo:rerun-if-changed={}", file.display());
                sources.push(file);
            }
        }
        Err(e) => {
            println!("cargo:warning=Bad glob pattern ({e}). C variants disabled.");
            return;
        }
    }
    if sources.is_empty() {
        return;
    }

    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    let is_rust_native =
        rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native");

    let mut build = cc::Build::new();
    build.files(&sources).opt_level(3);
    if is_rust_native {
        build.flag_if_supported("-march=native");
        println!("cargo:warning=Detected Rust target-cpu=native. Enabling -march=native for C compilation.");
    }
    build.compile("variant_bench_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
