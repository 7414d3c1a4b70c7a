pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logger;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
