mod commands;
mod logging;
mod setup;

pub use commands::run;
