//! # Crop Replay
//! Replays a recorded cropper session and prints every selection it produced.
//!

use std::{
    io::{Write, stdout},
    path::PathBuf,
};

use crop_replay::{Script, replay};
use failure::{Failure, Ignore};
use logger::setup_logger;
use mimalloc::MiMalloc;
use tracing::{info, info_span};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod failure;
mod logger;

/// The Cargo package version.
#[cfg(not(debug_assertions))]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The Cargo package version or '0.0.0' if a non-release build.
#[cfg(debug_assertions)]
pub const VERSION: &str = "0.0.0";

/// Script used when none is given on the command line.
const DEFAULT_SCRIPT: &str = "crop-session.toml";

/// If this instance should have debug enabled.
pub fn should_debug() -> bool {
    std::env::args().any(|arg| arg.eq("--debug"))
}

/// The first argument that is not a flag.
fn script_path() -> PathBuf {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .unwrap_or_else(|| DEFAULT_SCRIPT.to_string())
        .into()
}

fn main() {
    let _logger_guard = setup_logger(should_debug()).log_and_panic("Could not set up the logger");

    let _span = info_span!("[Main Thread]").entered();
    info!("Crop Replay v{}", VERSION);

    let path = script_path();
    let Some(script) = Script::load_or_create(&path).report("Could not load the script") else {
        return;
    };

    let report = replay(&script);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{report}").ignore();
}
