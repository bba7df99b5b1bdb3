//! Report rendering for scan results.

pub mod console;

pub use console::render;
