// src/lib.rs

pub mod api;
pub mod catalog;
pub mod config;
pub mod explorer;
pub mod inspect;
pub mod ui;
