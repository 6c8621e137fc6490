//! Instruction and data memory.
//!
//! Both memories are flat word arrays with unit latency. Every access is
//! bounds- and alignment-checked: a malformed program that runs off either
//! array is a fatal [`SimError`], surfaced distinctly from a normal halt,
//! never a silent corruption.

use crate::common::SimError;
use crate::common::constants::WORD_SIZE;

/// The loaded program image: the words fetched by the front of the pipeline.
#[derive(Debug, Clone)]
pub struct ProgramImage {
    base: u32,
    words: Vec<u32>,
}

impl ProgramImage {
    /// Wraps a word list loaded at `base`.
    pub fn new(base: u32, words: Vec<u32>) -> Self {
        Self { base, words }
    }

    /// Address of the first word.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Number of words in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the image holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Address one past the last word.
    pub fn end(&self) -> u32 {
        self.base + (self.words.len() as u32) * WORD_SIZE
    }

    /// Fetches the instruction word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::FetchOutOfRange`] when `addr` is below the base,
    /// misaligned, or past the end of the image.
    pub fn fetch(&self, addr: u32) -> Result<u32, SimError> {
        if addr < self.base || !addr.is_multiple_of(WORD_SIZE) {
            return Err(SimError::FetchOutOfRange { addr });
        }
        let idx = ((addr - self.base) / WORD_SIZE) as usize;
        self.words
            .get(idx)
            .copied()
            .ok_or(SimError::FetchOutOfRange { addr })
    }

    /// Iterates `(address, word)` pairs in fetch order, for disassembly and
    /// the backward data-memory scan.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, u32)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, &w)| (self.base + (i as u32) * WORD_SIZE, w))
    }
}

/// Flat data memory, addressed by `(address - base) / WORD_SIZE`.
#[derive(Debug, Clone)]
pub struct DataMemory {
    base: u32,
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a zeroed data memory of `len` words based at `base`.
    pub fn new(base: u32, len: usize) -> Self {
        Self {
            base,
            words: vec![0; len],
        }
    }

    /// Address of the first data word.
    pub const fn base(&self) -> u32 {
        self.base
    }

    fn index(&self, addr: u32) -> Result<usize, SimError> {
        if addr < self.base || !addr.is_multiple_of(WORD_SIZE) {
            return Err(SimError::DataAccessFault { addr });
        }
        let idx = ((addr - self.base) / WORD_SIZE) as usize;
        if idx < self.words.len() {
            Ok(idx)
        } else {
            Err(SimError::DataAccessFault { addr })
        }
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::DataAccessFault`] when `addr` is outside or misaligned
    /// within the configured memory.
    pub fn read(&self, addr: u32) -> Result<i32, SimError> {
        Ok(self.words[self.index(addr)?])
    }

    /// Writes `val` to the word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::DataAccessFault`] when `addr` is outside or misaligned
    /// within the configured memory.
    pub fn write(&mut self, addr: u32, val: i32) -> Result<(), SimError> {
        let idx = self.index(addr)?;
        self.words[idx] = val;
        Ok(())
    }

    /// All data words in address order, for snapshots.
    pub fn words(&self) -> &[i32] {
        &self.words
    }
}
