//! Embedded word pools
//!
//! Per-difficulty pools compiled into the binary at build time.

// Include generated word pools from build script
include!(concat!(env!("OUT_DIR"), "/easy.rs"));
include!(concat!(env!("OUT_DIR"), "/medium.rs"));
include!(concat!(env!("OUT_DIR"), "/hard.rs"));
