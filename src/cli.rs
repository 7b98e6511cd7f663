//! CLI definition and parsing for `pw-io`.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Global flags may appear before or after the subcommand.

use clap::{Parser, Subcommand, ValueHint};
use std::time::Duration;

use crate::access::RetryPolicy;
use crate::config::types::{Config, LogLevel};

/// Inspect, list, move and wait on files using the pw_io path types.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Path value objects and locked-file helpers")]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    #[arg(long, help = "Print the config file location used by pw-io and exit")]
    pub print_config: bool,

    #[arg(long, help = "Write a template config file at the config location and exit")]
    pub init_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show how a path decomposes into directory, name and extension.
    Info {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: String,
        /// Treat the path as a directory even if it does not exist.
        #[arg(long)]
        dir: bool,
    },
    /// Print names in natural order (file2 before file10).
    Sort {
        names: Vec<String>,
        #[arg(long)]
        descending: bool,
    },
    /// List files (or directories) in a directory.
    Ls {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: String,
        /// Shell-style mask, e.g. `*.txt`.
        #[arg(long)]
        pattern: Option<String>,
        #[arg(short, long)]
        recursive: bool,
        /// List directories instead of files.
        #[arg(long)]
        dirs: bool,
    },
    /// Wait until a file can be opened, retrying while another process holds it.
    Wait {
        #[arg(value_hint = ValueHint::FilePath)]
        file: String,
        #[arg(long)]
        timeout_ms: Option<u64>,
        #[arg(long)]
        poll_ms: Option<u64>,
        /// Request exclusive read/write instead of shared read.
        #[arg(long)]
        write: bool,
    },
    /// Move a file into a directory (created if missing).
    Mv {
        #[arg(value_hint = ValueHint::FilePath)]
        file: String,
        #[arg(value_hint = ValueHint::DirPath)]
        dir: String,
    },
    /// Rename a file in place.
    Rename {
        #[arg(value_hint = ValueHint::FilePath)]
        file: String,
        name: String,
    },
    /// Create a directory and any missing parents.
    Mkdir {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: String,
    },
    /// Send a file or directory to the trash.
    Recycle {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: String,
    },
}

impl Args {
    /// Precedence: --debug > --log-level value > None (use config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(Command::Wait { timeout_ms, poll_ms, .. }) = &self.command {
            if let Some(ms) = timeout_ms {
                cfg.wait_timeout = Duration::from_millis(*ms);
            }
            if let Some(ms) = poll_ms {
                cfg.poll_interval = Duration::from_millis(*ms);
            }
        }
    }

    pub fn retry_policy(&self, cfg: &Config) -> RetryPolicy {
        let mut cfg = cfg.clone();
        self.apply_overrides(&mut cfg);
        RetryPolicy::from(&cfg)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_wins_over_log_level() {
        let args = Args::try_parse_from(["pw-io", "--log-level", "quiet", "-d", "sort", "a"]).unwrap();
        assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
    }

    #[test]
    fn wait_flags_override_config() {
        let args =
            Args::try_parse_from(["pw-io", "wait", "f.txt", "--timeout-ms", "300", "--poll-ms", "50"]).unwrap();
        let policy = args.retry_policy(&Config::default());
        assert_eq!(policy.timeout, Duration::from_millis(300));
        assert_eq!(policy.poll_interval, Duration::from_millis(50));
    }

    #[test]
    fn global_flag_after_subcommand() {
        let args = Args::try_parse_from(["pw-io", "ls", ".", "--json", "-r"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Some(Command::Ls { recursive: true, .. })));
    }
}
