use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::{Arg, USAGE};

/// Handles `-help`, `--help`, `-version` and `--version`, and prints help when run without arguments.
pub fn maybe_print_help_and_exit() {
    match std::env::args_os().nth(1) {
        None => print_help_and_exit(),
        Some(arg) => {
            let arg = arg.as_os_str();
            if arg == OsStr::new("--help") || arg == OsStr::new("-help") {
                print_help_and_exit()
            }
            if arg == OsStr::new("--version") || arg == OsStr::new("-version") {
                println!("Version: {}", version_string());
                std::process::exit(0);
            }
        }
    }
}

fn print_help_and_exit() -> ! {
    print_help();
    std::process::exit(0);
}

fn print_help() {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {USAGE}");
    println!();
    println!("Decodes <input>, scales it so that its longer side is 200 pixels");
    println!("and writes the result to <output> as a JPEG file.");
    println!();
    println!("Options:");
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        println!("  -{name:19} {}", arg.help_text());
    }
}

pub fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("thumbnail {version} {cpu} {repo}")
}
