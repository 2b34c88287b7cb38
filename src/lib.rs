pub mod agent;
pub mod config;
pub mod game_repr;
pub mod orchestrator;
pub mod renderer;
