pub mod app;
pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod schedule;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
