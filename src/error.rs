//! Error types for numeric kernels

use thiserror::Error;

/// Failure raised by a kernel whose result left its integer range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Checked arithmetic overflowed
    #[error("{kernel}({input}) overflows a 64-bit result")]
    Overflow { kernel: &'static str, input: u64 },
}

impl KernelError {
    pub fn overflow(kernel: &'static str, input: u64) -> Self {
        KernelError::Overflow { kernel, input }
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;
