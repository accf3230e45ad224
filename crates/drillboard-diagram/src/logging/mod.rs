//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade. The
//! library itself only emits through `log`; hosts that already install a
//! logger can skip this module entirely.

mod init;

pub use init::init_logging;
