use std::path::Path;

fn main() {
    if let Ok(lib) = pkg_config::Config::new()
        .atleast_version("1.14.0")
        .find("cairo")
    {
        for libdir in &lib.link_paths {
            println!(
                "cargo:rustc-link-search=native={}",
                libdir.clone().into_os_string().into_string().unwrap()
            );
        }
        for libname in &lib.libs {
            println!("cargo:rustc-link-lib={}", libname);
        }
        return;
    }

    // Some distros ship the runtime library without the .pc file or the
    // unversioned dev symlink.  Probe the usual library directories and,
    // failing an unversioned .so, symlink the versioned one into OUT_DIR
    // so the linker can find it with plain -lcairo.
    let candidates = [
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
        "/usr/lib64",
        "/usr/lib",
        "/usr/local/lib",
        "/opt/homebrew/lib",
    ];

    for dir in candidates {
        if Path::new(dir).join("libcairo.so").exists()
            || Path::new(dir).join("libcairo.dylib").exists()
        {
            println!("cargo:rustc-link-search=native={}", dir);
            println!("cargo:rustc-link-lib=cairo");
            return;
        }
    }

    #[cfg(unix)]
    for dir in candidates {
        let versioned = Path::new(dir).join("libcairo.so.2");
        if versioned.exists() {
            let out_dir = std::env::var("OUT_DIR").unwrap();
            let shim = Path::new(&out_dir).join("libcairo.so");
            let _ = std::fs::remove_file(&shim);
            std::os::unix::fs::symlink(&versioned, &shim).unwrap();
            println!("cargo:rustc-link-search=native={}", out_dir);
            println!("cargo:rustc-link-lib=cairo");
            return;
        }
    }

    // Last resort: assume the toolchain's default search path knows better.
    println!("cargo:rustc-link-lib=cairo");
}
