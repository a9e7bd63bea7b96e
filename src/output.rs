//! User-facing console lines.
//! Each notice gets a short prefix (`info:`, `ok:`, `warn:`, `error:`), colored
//! only when the stream it goes to is a TTY. Errors and warnings go to stderr.

use owo_colors::{AnsiColors, OwoColorize};

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn is_tty(self) -> bool {
        match self {
            Stream::Stdout => atty::is(atty::Stream::Stdout),
            Stream::Stderr => atty::is(atty::Stream::Stderr),
        }
    }
}

fn print_prefixed(stream: Stream, prefix: &str, color: AnsiColors, msg: &str) {
    let line = if stream.is_tty() {
        format!("{} {}", prefix.color(color).bold(), msg)
    } else {
        format!("{prefix} {msg}")
    };
    match stream {
        Stream::Stdout => println!("{line}"),
        Stream::Stderr => eprintln!("{line}"),
    }
}

pub fn print_info(msg: &str) {
    print_prefixed(Stream::Stdout, "info:", AnsiColors::Cyan, msg);
}

pub fn print_success(msg: &str) {
    print_prefixed(Stream::Stdout, "ok:", AnsiColors::Green, msg);
}

pub fn print_warn(msg: &str) {
    print_prefixed(Stream::Stderr, "warn:", AnsiColors::Yellow, msg);
}

pub fn print_error(msg: &str) {
    print_prefixed(Stream::Stderr, "error:", AnsiColors::Red, msg);
}

/// Plain line with no prefix, e.g. the heading above a prompt.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
