//! Fatal simulation errors.
//!
//! The core is a closed-world simulator over a fixed instruction set:
//! unrecognized encodings decode to NOP rather than failing, so the only
//! error conditions are addressing faults from malformed programs. Those
//! must terminate the simulation loudly instead of corrupting state, and
//! they are distinct from the normal halt (BREAK committed in writeback).

use thiserror::Error;

/// Unrecoverable simulation fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The program counter ran past the end of the loaded program image.
    #[error("instruction fetch outside the program image at address {addr}")]
    FetchOutOfRange {
        /// The faulting fetch address.
        addr: u32,
    },

    /// A load or store touched an address outside (or misaligned within)
    /// the configured data memory.
    #[error("data access outside data memory at address {addr}")]
    DataAccessFault {
        /// The faulting data address.
        addr: u32,
    },
}
