//! different utility modules used throughout the project
/// logger setup: terminal plus optional file, level names
pub mod logger;
/// TOML description of a task: method, right-hand side, initial point, interval, step
pub mod task_config;
