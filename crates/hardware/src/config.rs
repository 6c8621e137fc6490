//! Configuration for the simulator.
//!
//! The pipeline itself is fixed (8 stages, one instruction per cycle); what
//! varies per program image is the memory map. Configuration is supplied as
//! JSON (`--config` on the CLI) or via `Config::default()`.

use serde::Deserialize;

/// Default memory-map constants.
mod defaults {
    /// Base address at which the program image is loaded and fetch begins.
    pub const TEXT_BASE: u32 = 496;

    /// Base address of data memory. Words in the image tail at or above this
    /// address (after the BREAK instruction) are preloaded as data.
    pub const DATA_BASE: u32 = 600;

    /// Number of words of data memory.
    pub const DATA_WORDS: usize = 32;
}

/// Simulator configuration: the memory map of the loaded program.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address of the first instruction word in the image.
    #[serde(default = "Config::default_text_base")]
    pub text_base: u32,

    /// Address of the first data memory word.
    #[serde(default = "Config::default_data_base")]
    pub data_base: u32,

    /// Size of data memory in words.
    #[serde(default = "Config::default_data_words")]
    pub data_words: usize,
}

impl Config {
    fn default_text_base() -> u32 {
        defaults::TEXT_BASE
    }

    fn default_data_base() -> u32 {
        defaults::DATA_BASE
    }

    fn default_data_words() -> usize {
        defaults::DATA_WORDS
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_base: defaults::TEXT_BASE,
            data_base: defaults::DATA_BASE,
            data_words: defaults::DATA_WORDS,
        }
    }
}
