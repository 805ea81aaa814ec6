#[cfg(feature = "no_prefix_checks")]
pub const ENABLE_PREFIX_CHECKS: bool = false;
#[cfg(not(feature = "no_prefix_checks"))]
pub const ENABLE_PREFIX_CHECKS: bool = true;

#[cfg(feature = "trace_steps")]
pub const TRACE_STEPS: bool = true;
#[cfg(not(feature = "trace_steps"))]
pub const TRACE_STEPS: bool = false;
