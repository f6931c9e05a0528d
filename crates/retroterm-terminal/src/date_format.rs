//! `%`-escape date formatting for `date +FORMAT`.
//!
//! Only eight escapes are recognized (`%Y %m %d %H %M %S %a %b`). Anything
//! else, including unknown `%` sequences and a trailing `%`, is copied
//! through literally. The scan is a single left-to-right pass, so
//! substituted text is never re-examined.

use retroterm_platform::Timestamp;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn weekday_abbrev(ts: &Timestamp) -> &'static str {
    WEEKDAYS[usize::from(ts.weekday) % 7]
}

fn month_abbrev(ts: &Timestamp) -> &'static str {
    MONTHS[usize::from(ts.month.clamp(1, 12)) - 1]
}

/// Expand the recognized escapes in `pattern` for the instant `ts`.
pub fn format(pattern: &str, ts: &Timestamp) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let expansion = match chars.peek() {
            Some('Y') => format!("{:04}", ts.year),
            Some('m') => format!("{:02}", ts.month),
            Some('d') => format!("{:02}", ts.day),
            Some('H') => format!("{:02}", ts.hour),
            Some('M') => format!("{:02}", ts.minute),
            Some('S') => format!("{:02}", ts.second),
            Some('a') => weekday_abbrev(ts).to_string(),
            Some('b') => month_abbrev(ts).to_string(),
            _ => {
                out.push('%');
                continue;
            },
        };
        chars.next();
        out.push_str(&expansion);
    }
    out
}

/// The default `date` rendering, e.g. `Thu Mar 07 2024 14:05:09 GMT+0000`.
pub fn long_form(ts: &Timestamp) -> String {
    let offset = ts.utc_offset_minutes;
    let sign = if offset < 0 { '-' } else { '+' };
    let abs = offset.unsigned_abs();
    format!(
        "{} GMT{sign}{:02}{:02}",
        format("%a %b %d %Y %H:%M:%S", ts),
        abs / 60,
        abs % 60
    )
}
