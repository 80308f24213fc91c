//! Roadmap text parser.
//!
//! Converts the loosely structured text returned by a generator into a
//! [`Roadmap`]. The expected shape is markdown-like:
//!
//! ```text
//! ### Week 1: Fundamentals
//! **Set up the environment**
//! - Install the toolchain
//! - Configure the editor
//! **Read the book**
//! ```
//!
//! Parsing is total: it never fails, and malformed input degrades to a
//! best-effort (possibly empty) model. A week section is only emitted for
//! text that follows a week boundary line; preamble before the first
//! boundary is discarded.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{roadmap::UNDEFINED_FOCUS, Roadmap, Task, Week};

/// Line prefix that starts a new week section.
const WEEK_BOUNDARY: &str = "### ";

/// Line prefix that marks a subtask bullet.
const BULLET: &str = "- ";

fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Week (\d+):\s*(.+)$").expect("header pattern is valid"))
}

fn task_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*)\*\*").expect("task pattern is valid"))
}

/// Parse raw roadmap text into a structured model.
///
/// Never fails; returns an empty roadmap for input with no week boundary.
pub fn parse(raw: &str) -> Roadmap {
    let mut weeks = Vec::new();
    // Header line and body lines of the section currently being collected.
    let mut section: Option<(String, Vec<String>)> = None;

    for line in raw.lines() {
        if let Some(header) = line.strip_prefix(WEEK_BOUNDARY) {
            if let Some((prev_header, body)) = section.take() {
                weeks.push(parse_section(&prev_header, &body, weeks.len() + 1));
            }
            section = Some((header.to_string(), Vec::new()));
        } else if let Some((_, body)) = section.as_mut() {
            body.push(line.to_string());
        }
        // Preamble before the first boundary falls through and is dropped.
    }

    if let Some((header, body)) = section {
        weeks.push(parse_section(&header, &body, weeks.len() + 1));
    }

    Roadmap { weeks }
}

/// Parse one week section from its header line and body lines.
///
/// `position` is the 1-based index of the section among all sections, used
/// as the week number when the header does not follow the
/// `Week <n>: <focus>` convention.
fn parse_section(header: &str, body: &[String], position: usize) -> Week {
    let (number, focus) = match header_re().captures(header.trim()) {
        Some(caps) => match caps[1].parse::<u32>() {
            Ok(number) => (number, caps[2].trim().to_string()),
            Err(_) => (position as u32, UNDEFINED_FOCUS.to_string()),
        },
        None => (position as u32, UNDEFINED_FOCUS.to_string()),
    };

    let mut tasks = Vec::new();
    let mut current: Option<Task> = None;

    for line in body {
        let line = line.trim();

        if let Some(caps) = task_re().captures(line) {
            let name = caps[1].trim();
            if !name.is_empty() {
                if let Some(task) = current.take() {
                    tasks.push(task);
                }
                current = Some(Task::new(name));
                continue;
            }
        }

        if let Some(rest) = line.strip_prefix(BULLET) {
            // Bullets before the first task line have no owner and are
            // dropped rather than attached to a synthetic task.
            if let Some(task) = current.as_mut() {
                task.subtasks.push(rest.trim().to_string());
            }
        }
        // Blank and unrecognized lines are ignored.
    }

    // Flush-on-end: the last task has no following task line to commit it.
    if let Some(task) = current {
        tasks.push(task);
    }

    Week {
        number,
        focus,
        tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_roadmap() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_preamble_without_boundary_is_discarded() {
        let roadmap = parse("Here is your roadmap.\nGood luck!\n");
        assert!(roadmap.is_empty());
    }

    #[test]
    fn test_week_header_parsed() {
        let roadmap = parse("### Week 3: Ship it\n");
        assert_eq!(roadmap.weeks.len(), 1);
        assert_eq!(roadmap.weeks[0].number, 3);
        assert_eq!(roadmap.weeks[0].focus, "Ship it");
        assert!(roadmap.weeks[0].tasks.is_empty());
    }

    #[test]
    fn test_malformed_header_falls_back_to_position() {
        let roadmap = parse("### garbage\n**A**\n");
        assert_eq!(roadmap.weeks.len(), 1);
        assert_eq!(roadmap.weeks[0].number, 1);
        assert_eq!(roadmap.weeks[0].focus, UNDEFINED_FOCUS);
        assert_eq!(roadmap.weeks[0].tasks.len(), 1);
    }

    #[test]
    fn test_fallback_number_is_chunk_position() {
        let roadmap = parse("### Week 1: A\n### nope\n### Week 7: B\n### also nope\n");
        let numbers: Vec<u32> = roadmap.iter().map(|w| w.number).collect();
        assert_eq!(numbers, vec![1, 2, 7, 4]);
    }

    #[test]
    fn test_unparseable_week_digits_fall_back() {
        // 99999999999999999999 overflows u32; the header is treated as
        // malformed rather than panicking.
        let roadmap = parse("### Week 99999999999999999999: Huge\n");
        assert_eq!(roadmap.weeks[0].number, 1);
        assert_eq!(roadmap.weeks[0].focus, UNDEFINED_FOCUS);
    }
}
