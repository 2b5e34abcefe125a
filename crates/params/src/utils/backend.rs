//! Constants for native context management

/// Default upper bound on live contexts held by one backend instance
pub const DEFAULT_MAX_CONTEXTS: usize = 1024;

/// First raw handle value a backend hands out. Zero is reserved for
/// "no context".
pub const FIRST_CONTEXT_HANDLE: u64 = 1;
