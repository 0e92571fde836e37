//! Terminal output for group listings and document checks.
//!
//! Decorations go to stderr so group names on stdout can be piped. JSON,
//! quiet, verbose and no-color modes are read from `FRONTEND_STATUS_*`
//! variables set by `main`.

use frontend_status::GroupReport;
use std::io::IsTerminal;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Color when stderr is a terminal, unless `NO_COLOR` or `--no-color` is set.
pub fn color_enabled() -> bool {
    if std::env::var("NO_COLOR").is_ok() || std::env::var("FRONTEND_STATUS_NO_COLOR").is_ok() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// How usable a status document is for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    /// Named groups and nothing skipped.
    Ok,
    /// Some groups were skipped for lacking a name.
    Partial,
    /// No named groups at all: the dashboard would be empty.
    Empty,
}

impl Health {
    pub fn of(report: &GroupReport) -> Self {
        match (report.names.len(), report.unnamed) {
            (0, _) => Health::Empty,
            (_, 0) => Health::Ok,
            _ => Health::Partial,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Health::Ok => "ok",
            Health::Partial => "partial",
            Health::Empty => "empty",
        }
    }

    /// One-line explanation for the status footer.
    pub fn summary(self, report: &GroupReport) -> String {
        match self {
            Health::Ok => plural(report.names.len(), "group"),
            Health::Partial => format!("{} unnamed", plural(report.unnamed, "group")),
            Health::Empty => "no named groups found".to_string(),
        }
    }
}

/// Renders symbols and labels, colored or plain.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Plain output regardless of the terminal.
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    pub fn ok_sym(&self) -> &'static str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    pub fn warn_sym(&self) -> &'static str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    /// Warn when a count the dashboard depends on is zero.
    pub fn count_sym(&self, count: usize) -> &'static str {
        if count == 0 {
            self.warn_sym()
        } else {
            self.ok_sym()
        }
    }

    /// Health label, green when ok and yellow otherwise.
    pub fn health(&self, health: Health) -> String {
        let code = match health {
            Health::Ok => GREEN,
            Health::Partial | Health::Empty => YELLOW,
        };
        self.paint(code, health.label())
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Stderr footer after a `groups` listing.
pub fn listing_footer(s: &Styled, count: usize, location: &str) -> String {
    if count == 0 {
        format!("  {} no groups in {location}", s.warn_sym())
    } else {
        format!(
            "  {} {} from {}",
            s.ok_sym(),
            plural(count, "group"),
            s.dim(location)
        )
    }
}

/// Lines of a `check` report, without the trailing status footer.
pub fn report_lines(s: &Styled, location: &str, report: &GroupReport, verbose: bool) -> Vec<String> {
    let mut lines = vec![
        format!("  {}", s.bold(location)),
        check_line(s.ok_sym(), "Root:", &report.root),
        check_line(
            s.count_sym(report.containers),
            "Containers:",
            &plural(report.containers, "groups element"),
        ),
        check_line(
            s.count_sym(report.names.len()),
            "Groups:",
            &plural(report.names.len(), "group"),
        ),
    ];
    if verbose {
        lines.extend(report.names.iter().map(|name| format!("        {}", s.dim(name))));
    }
    if report.unnamed > 0 {
        lines.push(check_line(
            s.warn_sym(),
            "Unnamed:",
            &format!("{} (skipped)", plural(report.unnamed, "group")),
        ));
    }
    lines
}

/// Status footer for a `check` report.
pub fn status_line(s: &Styled, report: &GroupReport) -> String {
    let health = Health::of(report);
    format!(
        "  {}: {} ({})",
        s.bold("Status"),
        s.health(health),
        health.summary(report)
    )
}

fn check_line(symbol: &str, label: &str, value: &str) -> String {
    format!("    {symbol} {label:<16} {value}")
}

pub fn is_quiet() -> bool {
    std::env::var("FRONTEND_STATUS_QUIET").is_ok()
}

pub fn is_verbose() -> bool {
    std::env::var("FRONTEND_STATUS_VERBOSE").is_ok()
}

pub fn is_json() -> bool {
    std::env::var("FRONTEND_STATUS_JSON").is_ok()
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}

/// "1 group", "3 groups".
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(names: &[&str], unnamed: usize) -> GroupReport {
        GroupReport {
            root: "frontend".into(),
            containers: 1,
            names: names.iter().map(|n| n.to_string()).collect(),
            unnamed,
        }
    }

    #[test]
    fn test_health_of_report() {
        assert_eq!(Health::of(&report(&["main"], 0)), Health::Ok);
        assert_eq!(Health::of(&report(&["main"], 2)), Health::Partial);
        assert_eq!(Health::of(&report(&[], 0)), Health::Empty);
        assert_eq!(Health::of(&report(&[], 3)), Health::Empty);
    }

    #[test]
    fn test_status_line_plain() {
        let s = Styled::plain();
        assert_eq!(
            status_line(&s, &report(&["main", "cms"], 0)),
            "  Status: ok (2 groups)"
        );
        assert_eq!(
            status_line(&s, &report(&["main"], 1)),
            "  Status: partial (1 group unnamed)"
        );
        assert_eq!(
            status_line(&s, &report(&[], 0)),
            "  Status: empty (no named groups found)"
        );
    }

    #[test]
    fn test_report_lines() {
        let s = Styled::plain();
        let lines = report_lines(&s, "monitor/frontend_status.xml", &report(&["main"], 1), true);
        assert_eq!(
            lines,
            vec![
                "  monitor/frontend_status.xml".to_string(),
                "    OK Root:            frontend".to_string(),
                "    OK Containers:      1 groups element".to_string(),
                "    OK Groups:          1 group".to_string(),
                "        main".to_string(),
                "    ?? Unnamed:         1 group (skipped)".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_counts_warn() {
        let s = Styled::plain();
        let empty = GroupReport {
            containers: 0,
            ..report(&[], 0)
        };
        let lines = report_lines(&s, "x", &empty, false);
        assert!(lines[2].starts_with("    ?? Containers:"));
        assert!(lines[3].starts_with("    ?? Groups:"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_listing_footer() {
        let s = Styled::plain();
        assert_eq!(listing_footer(&s, 0, "a.xml"), "  ?? no groups in a.xml");
        assert_eq!(listing_footer(&s, 1, "a.xml"), "  OK 1 group from a.xml");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "group"), "0 groups");
        assert_eq!(plural(1, "group"), "1 group");
        assert_eq!(plural(2, "container"), "2 containers");
    }
}
