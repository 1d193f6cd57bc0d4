//! Config file loading and creation.

mod load;
mod template;

#[cfg(test)]
mod tests;

pub use load::{
    create_default_config, default_config_path, find_config_in, load_default, load_from_path,
    parse_config, ConfigFormat, CONFIG_FILE_STEM,
};
