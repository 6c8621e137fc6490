//! Pipeline stage implementations.
//!
//! One function per stage (the two fetch stages and the two memory stages
//! share a file), each reading its predecessor's slot and prior-cycle
//! latches and writing its own. The engine calls them in reverse pipeline
//! order every cycle.

/// ID: instruction decode.
pub mod decode;
/// EX: operand selection, bypass, and execution.
pub mod execute;
/// IF and IS: the two raw-word fetch stages.
pub mod fetch;
/// DF and DS: the two memory stages.
pub mod memory;
/// RF: register operand fetch.
pub mod regfetch;
/// WB: register-file commit.
pub mod writeback;
