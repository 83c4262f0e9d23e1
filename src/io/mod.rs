pub mod clock;
pub mod config_io;
pub mod logging;
