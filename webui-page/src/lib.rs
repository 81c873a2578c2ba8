#![no_std]

//! Control page served on `/`.
//!
//! The page's script matches `RGB(r,g,b)` in every command reply to update
//! its swatch, so the status line format is part of its contract.

pub const INDEX_HTML: &str = include_str!("../index.html");
