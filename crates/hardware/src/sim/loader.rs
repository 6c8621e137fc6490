//! Program image loading.
//!
//! A program image is a text stream in which `'0'` and `'1'` characters are
//! successive bits of a flat bitstream; every other character is ignored.
//! Each 32 consecutive bits form one word, most significant bit first, in
//! fetch order starting at the configured text base.
//!
//! For simulation, the image tail doubles as the initial contents of data
//! memory: scanning backward from the end of the image down to the data
//! base, every word until (but not including) the halt instruction is
//! preloaded at its image address.

use crate::common::SimError;
use crate::config::Config;
use crate::core::mem::{DataMemory, ProgramImage};
use crate::isa::decode;

/// A parsed image together with its preloaded data memory.
#[derive(Debug, Clone)]
pub struct LoadedProgram {
    /// The instruction words, based at the configured text base.
    pub image: ProgramImage,
    /// Data memory, preloaded from the image tail.
    pub memory: DataMemory,
}

/// Parses `'0'`/`'1'` characters into 32-bit words, MSB first.
///
/// Characters other than `'0'` and `'1'` are skipped; a trailing partial
/// word is dropped.
pub fn parse_bitstream(text: &str) -> Vec<u32> {
    let mut words = Vec::new();
    let mut word = 0u32;
    let mut nbits = 0u32;
    for ch in text.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            _ => continue,
        };
        word = (word << 1) | bit;
        nbits += 1;
        if nbits == 32 {
            words.push(word);
            word = 0;
            nbits = 0;
        }
    }
    words
}

/// Parses an image for disassembly (no data memory involved).
pub fn parse_image(text: &str, config: &Config) -> ProgramImage {
    ProgramImage::new(config.text_base, parse_bitstream(text))
}

/// Parses an image and initializes data memory from its tail.
///
/// # Errors
///
/// [`SimError::DataAccessFault`] when a data word in the image tail falls
/// outside the configured data memory.
pub fn load_program(text: &str, config: &Config) -> Result<LoadedProgram, SimError> {
    let image = parse_image(text, config);
    let mut memory = DataMemory::new(config.data_base, config.data_words);

    for (addr, word) in image.iter().rev() {
        if addr < config.data_base {
            break;
        }
        if decode(word, addr).is_halt() {
            break;
        }
        memory.write(addr, word as i32)?;
    }

    tracing::debug!(
        words = image.len(),
        base = image.base(),
        "program image loaded"
    );
    Ok(LoadedProgram { image, memory })
}
