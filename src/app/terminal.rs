//! Terminal presentation settings and the tracing subscriber.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Crates whose events pass the default filter. HTTP and HTML library
/// internals stay silent unless `RUST_LOG` asks for them.
const LOGGED_CRATES: [&str; 2] = ["favicon_core", "favicon_fetch"];

/// Environment facts that affect presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TerminalEnv {
    /// `NO_COLOR` is set to a non-empty value.
    pub(crate) no_color: bool,
    /// `TERM=dumb`.
    pub(crate) dumb: bool,
    /// stderr is attached to a terminal.
    pub(crate) stderr_tty: bool,
}

impl TerminalEnv {
    /// Reads the current process environment.
    pub(crate) fn detect() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
            dumb: std::env::var("TERM").is_ok_and(|value| value.eq_ignore_ascii_case("dumb")),
            stderr_tty: io::stderr().is_terminal(),
        }
    }
}

/// Presentation choices for one run, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TerminalSettings {
    /// ANSI colors in log output.
    pub(crate) color: bool,
    /// Per-site progress bar on stderr.
    pub(crate) progress: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub(crate) default_filter: String,
}

impl TerminalSettings {
    pub(crate) fn resolve(args: &Args, env: TerminalEnv) -> Self {
        let level = args.default_log_level();
        Self {
            color: !(args.no_color || env.no_color || env.dumb),
            progress: env.stderr_tty && !args.quiet && !env.dumb,
            default_filter: LOGGED_CRATES
                .iter()
                .map(|krate| format!("{krate}={level}"))
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Installs the stderr subscriber. `RUST_LOG` wins over the default filter.
    pub(crate) fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));
        let _ = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_ansi(self.color)
            .with_env_filter(filter)
            .try_init();
    }
}
