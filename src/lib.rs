//! `thumbnail` is primarily a command-line tool.
//! The library interface exists for the binary and the tests, and is subject to change at any time.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
mod init;
pub mod logger;
pub mod operations;
pub mod plan;
