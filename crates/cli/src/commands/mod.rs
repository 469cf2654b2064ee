pub mod alerts;
pub mod config;
pub mod utils;

pub use alerts::{
    handle_list, handle_parse, handle_sample, handle_send, AlertClient, BodyFormat,
    MessageSource,
};
pub use config::{handle_config_command, ConfigCommands};
