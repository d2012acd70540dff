// src/lib.rs
//
// randwalk: random-walk paths drawn with a pan/zoom camera

pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod views;
