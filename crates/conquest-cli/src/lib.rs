//! Terminal front end for Conquest and Connect placement chess.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration loading
//! - [`prompt`] - line-oriented prompts over any reader/writer pair
//! - [`render`] - ASCII board rendering
//! - [`storage`] - save-file storage
//! - [`session`] - the interactive menus and round loop

pub mod config;
pub mod prompt;
pub mod render;
pub mod session;
pub mod storage;
