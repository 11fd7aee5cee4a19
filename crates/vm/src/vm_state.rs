//! VM termination state.

/// Indicates how a VM execution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VMState {
    /// The execution completed successfully.
    HALT = 1 << 0,

    /// The execution ended abnormally: invalid instruction, failed decode,
    /// or an exception the VM could not catch.
    FAULT = 1 << 1,
}

impl VMState {
    #[inline]
    pub fn is_halt(self) -> bool {
        self == VMState::HALT
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        self == VMState::FAULT
    }
}

impl std::fmt::Display for VMState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VMState::HALT => f.write_str("HALT"),
            VMState::FAULT => f.write_str("FAULT"),
        }
    }
}
