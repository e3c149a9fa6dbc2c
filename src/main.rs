//! Host-side helper: `cargo run` compiles the WASM bundle into
//! `static/pkg` and serves the static site locally.

use std::process::{Command, Stdio};

fn main() {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever artifacts are already in static/pkg.");
        }
    }

    println!("Launching local server at http://127.0.0.1:8000 …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Stay in the foreground until the server is interrupted.
    let _ = server.wait();
}
