pub mod camera;
pub mod config;
pub mod controls;
pub mod engine;
pub mod game;
pub mod geometry;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod ui;
pub mod window;
pub mod world;
