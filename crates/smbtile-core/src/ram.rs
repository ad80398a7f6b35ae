use core::ops::Deref;

use crate::{error::DecodeError, memory::RAM_SIZE};

/// Read-only view over a working RAM snapshot.
///
/// The snapshot is owned by the emulator; the decoder borrows it for a single
/// call. Construction checks the length once so every later read is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RamView<'a>(&'a [u8]);

impl<'a> RamView<'a> {
    /// Wraps `bytes`, which must cover at least the full 2 KiB working RAM.
    ///
    /// Longer buffers (for example a whole CPU address space dump) are
    /// accepted; only the first [`RAM_SIZE`] bytes are ever read.
    pub fn new(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        if bytes.len() < RAM_SIZE {
            return Err(DecodeError::MemoryTooShort {
                expected: RAM_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(&bytes[..RAM_SIZE]))
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.0[addr as usize]
    }

    /// Reads `addr + index`, for the per-slot object tables.
    pub fn read_indexed(&self, addr: u16, index: usize) -> u8 {
        self.0[addr as usize + index]
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.0
    }
}

impl Deref for RamView<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}
