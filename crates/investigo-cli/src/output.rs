//! Console result sink.

use std::io::Write;

use colored::{Color, Colorize};
use investigo_probe::{Verdict, VerdictSink};

/// Process-wide display switches, fixed before probing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunOptions {
    pub color: bool,
    pub verbose: bool,
}

/// Writes one `[<marker>] <site>: <detail>` line per reportable verdict.
pub(crate) struct ConsoleSink<W: Write> {
    options: RunOptions,
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub(crate) fn new(options: RunOptions, out: W) -> Self {
        Self { options, out }
    }

    pub(crate) fn header(&mut self, username: &str, site_count: usize) {
        let username = paint(username, Color::BrightWhite, self.options.color);
        if let Err(err) = writeln!(self.out, "Investigating {username} on {site_count} sites") {
            tracing::warn!(error = %err, "failed to write batch header");
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> VerdictSink for ConsoleSink<W> {
    fn emit(&mut self, site: &str, verdict: &Verdict) {
        if let Some(line) = format_line(site, verdict, self.options) {
            // Each verdict is a single write so lines never interleave.
            if let Err(err) = writeln!(self.out, "{line}") {
                tracing::warn!(site, error = %err, "failed to write result line");
            }
        }
    }
}

/// Render the result line for `verdict`, or `None` when it is suppressed
/// (not-found outside verbose mode).
pub(crate) fn format_line(site: &str, verdict: &Verdict, options: RunOptions) -> Option<String> {
    let color = options.color;
    let (marker, detail) = match verdict {
        Verdict::Found { link } => (paint("+", Color::BrightGreen, color), link.clone()),
        Verdict::Error { message } => (
            paint("!", Color::Red, color),
            paint(message, Color::BrightMagenta, color),
        ),
        Verdict::NotFound { message } if options.verbose => (
            paint("-", Color::BrightRed, color),
            paint(message, Color::BrightYellow, color),
        ),
        Verdict::NotFound { .. } => return None,
    };
    let site = paint(site, Color::BrightWhite, color);
    Some(format!("[{marker}] {site}: {detail}"))
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}
