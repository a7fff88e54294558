// src/lib.rs
pub mod args;
pub mod config;
pub mod logging;
pub mod presentation;
