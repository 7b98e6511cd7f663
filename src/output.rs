//! User-facing console output for `pw-io`.
//! Prefixed status lines are colored only when stdout is a TTY; primary
//! results (paths, sorted names) are printed bare so they can be scripted.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Warn,
    Error,
    Ok,
}

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn prefix(tone: Tone) -> String {
    let label = match tone {
        Tone::Info => "info:",
        Tone::Warn => "warn:",
        Tone::Error => "error:",
        Tone::Ok => "ok:",
    };
    if !is_tty() {
        return label.to_string();
    }
    match tone {
        Tone::Info => label.cyan().bold().to_string(),
        Tone::Warn => label.yellow().bold().to_string(),
        Tone::Error => label.red().bold().to_string(),
        Tone::Ok => label.green().bold().to_string(),
    }
}

pub fn print_info(msg: &str) {
    println!("{} {msg}", prefix(Tone::Info));
}

pub fn print_warn(msg: &str) {
    eprintln!("{} {msg}", prefix(Tone::Warn));
}

pub fn print_error(msg: &str) {
    eprintln!("{} {msg}", prefix(Tone::Error));
}

pub fn print_success(msg: &str) {
    println!("{} {msg}", prefix(Tone::Ok));
}

/// Bare line for primary output.
pub fn print_user(msg: &str) {
    println!("{msg}");
}

/// `label: value` line, label dimmed on a TTY.
pub fn print_field(label: &str, value: &str) {
    if is_tty() {
        println!("{:>16} {value}", format!("{label}:").dimmed());
    } else {
        println!("{label}: {value}");
    }
}
