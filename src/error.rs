use std::collections::TryReserveError;
use std::fmt;

/// Failure to acquire storage for a new node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The allocator refused to grow the node arena
    OutOfMemory(TryReserveError),
    /// Every node index is already in use
    CapacityExceeded,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationError::OutOfMemory(e) => write!(f, "unable to allocate a tree node: {}", e),
            AllocationError::CapacityExceeded => write!(f, "tree node index space exhausted"),
        }
    }
}

impl std::error::Error for AllocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AllocationError::OutOfMemory(e) => Some(e),
            AllocationError::CapacityExceeded => None,
        }
    }
}

impl From<TryReserveError> for AllocationError {
    fn from(error: TryReserveError) -> Self {
        AllocationError::OutOfMemory(error)
    }
}
