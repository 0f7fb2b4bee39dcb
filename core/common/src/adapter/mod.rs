//! 標準アダプタ

mod clock;
mod std_clock;
mod std_env_resolver;
mod stderr_log;

pub use clock::Clock;
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
pub use stderr_log::{NoopLog, StderrJsonLog};
