// ABOUTME: Guest-list text parser turning free-form lines into guest records
// ABOUTME: Handles trailing gender markers, "+N" plus-one notation, and per-list id assignment

use crate::guest::{Gender, Guest};
use crate::ParserConfig;
use std::fmt;
use tracing::{debug, trace, warn};

/// Parse a block of guest text with the default [`ParserConfig`]
///
/// One guest per line. A line may end with a gender marker (`M`, `Female`,
/// `n`, ...) and/or a `+N` suffix that adds N plus-one guests. Blank lines
/// are skipped. Never fails: unrecognized input simply becomes part of the
/// guest name.
pub fn parse_guest_list(text: &str, guest_list_id: &str) -> Vec<Guest> {
    GuestListParser::default().parse(text, guest_list_id).guests
}

/// Something odd in the input that did not stop parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Line produced a guest with an empty name (e.g. just `F` or `+2`)
    EmptyName { line: usize },
    /// `+N` exceeded the configured cap and was clamped
    PlusOnesCapped {
        line: usize,
        requested: u64,
        allowed: u32,
    },
}

impl ParseWarning {
    /// 1-based input line the warning refers to
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::EmptyName { line } | ParseWarning::PlusOnesCapped { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::EmptyName { line } => {
                write!(f, "line {line}: guest has an empty name")
            }
            ParseWarning::PlusOnesCapped {
                line,
                requested,
                allowed,
            } => write!(
                f,
                "line {line}: +{requested} exceeds the limit, only {allowed} plus-ones added"
            ),
        }
    }
}

/// Guests produced by one parse, with any warnings raised along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub guests: Vec<Guest>,
    pub warnings: Vec<ParseWarning>,
}

/// Parser for human-typed guest lists
#[derive(Debug, Clone, Default)]
pub struct GuestListParser {
    config: ParserConfig,
}

impl GuestListParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `text` into guests belonging to `guest_list_id`
    pub fn parse(&self, text: &str, guest_list_id: &str) -> ParseOutcome {
        let mut sink = GuestSink::new(guest_list_id);
        let mut warnings = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim_matches(is_blank);
            if line.is_empty() {
                continue;
            }

            let (base, requested) = match split_plus_ones(line) {
                Some((base, digits)) => (base, Some(parse_count(digits))),
                None => (line, None),
            };

            let (name, gender) = extract_gender(base);
            if name.is_empty() {
                warnings.push(ParseWarning::EmptyName { line: line_no });
            }

            let count = match requested {
                Some(requested) => self.clamp_plus_ones(requested, line_no, &mut warnings),
                None => 0,
            };

            trace!(line = line_no, name = %name, plus_ones = count, "parsed guest line");

            let plus_one_name = format!("{name}{}", self.config.plus_one_suffix);
            sink.push(name.clone(), gender, None);
            for _ in 0..count {
                sink.push(plus_one_name.clone(), gender, Some(name.clone()));
            }
        }

        for warning in &warnings {
            warn!(guest_list_id, "{warning}");
        }
        debug!(
            guest_list_id,
            guests = sink.guests.len(),
            warnings = warnings.len(),
            "parsed guest list"
        );

        ParseOutcome {
            guests: sink.guests,
            warnings,
        }
    }

    fn clamp_plus_ones(
        &self,
        requested: u64,
        line: usize,
        warnings: &mut Vec<ParseWarning>,
    ) -> u64 {
        match self.config.max_plus_ones {
            Some(allowed) if requested > u64::from(allowed) => {
                warnings.push(ParseWarning::PlusOnesCapped {
                    line,
                    requested,
                    allowed,
                });
                u64::from(allowed)
            }
            _ => requested,
        }
    }
}

/// Accumulates guests and hands out sequential ids for one parse
struct GuestSink<'a> {
    guest_list_id: &'a str,
    next_seq: usize,
    guests: Vec<Guest>,
}

impl<'a> GuestSink<'a> {
    fn new(guest_list_id: &'a str) -> Self {
        Self {
            guest_list_id,
            next_seq: 1,
            guests: Vec::new(),
        }
    }

    fn push(&mut self, name: String, gender: Option<Gender>, guest_of: Option<String>) {
        let id = format!("{}-{}", self.guest_list_id, self.next_seq);
        self.next_seq += 1;
        self.guests.push(Guest {
            id,
            name,
            gender,
            arrived: false,
            arrived_at: None,
            guest_of,
            guest_list_id: self.guest_list_id.to_string(),
        });
    }
}

/// Whitespace, plus the byte-order mark editors put at the start of a file
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Split a trimmed line into its base and the digits of a trailing `+N`
///
/// Matches `+`, optional whitespace, then ASCII digits at the very end of the
/// line. The base has trailing whitespace removed.
fn split_plus_ones(line: &str) -> Option<(&str, &str)> {
    let digits_start = line.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits_start == line.len() {
        return None;
    }
    let (head, digits) = line.split_at(digits_start);
    let base = head.trim_end_matches(is_blank).strip_suffix('+')?;
    Some((base.trim_end_matches(is_blank), digits))
}

/// Digit runs too large for u64 saturate; the cap handles them from there.
fn parse_count(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Strip a trailing gender keyword, returning the remaining name
///
/// Without a keyword the text is returned unchanged. With one, the remaining
/// tokens are rejoined with single spaces, which leaves an empty name when the
/// keyword was the only token.
fn extract_gender(text: &str) -> (String, Option<Gender>) {
    let mut tokens: Vec<&str> = text.split(is_blank).filter(|t| !t.is_empty()).collect();
    match tokens.last().and_then(|token| Gender::from_token(token)) {
        Some(gender) => {
            tokens.pop();
            (tokens.join(" "), Some(gender))
        }
        None => (text.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(guests: &[Guest]) -> Vec<&str> {
        guests.iter().map(|g| g.name.as_str()).collect()
    }

    fn ids(guests: &[Guest]) -> Vec<&str> {
        guests.iter().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn test_plain_name() {
        let guests = parse_guest_list("John Smith", "gl1");
        assert_eq!(
            guests,
            vec![Guest {
                id: "gl1-1".to_string(),
                name: "John Smith".to_string(),
                gender: None,
                arrived: false,
                arrived_at: None,
                guest_of: None,
                guest_list_id: "gl1".to_string(),
            }]
        );
    }

    #[test]
    fn test_trailing_gender_marker() {
        let guests = parse_guest_list("Sarah Jones F", "gl1");
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Sarah Jones");
        assert_eq!(guests[0].gender, Some(Gender::Female));
    }

    #[test]
    fn test_plus_ones_expand_after_primary() {
        let guests = parse_guest_list("Stefan Kovacovic + 2", "gl1");
        assert_eq!(ids(&guests), ["gl1-1", "gl1-2", "gl1-3"]);
        assert_eq!(
            names(&guests),
            [
                "Stefan Kovacovic",
                "Stefan Kovacovic (Guest)",
                "Stefan Kovacovic (Guest)"
            ]
        );
        assert_eq!(guests[0].guest_of, None);
        for plus_one in &guests[1..] {
            assert_eq!(plus_one.guest_of.as_deref(), Some("Stefan Kovacovic"));
            assert!(!plus_one.arrived);
            assert_eq!(plus_one.guest_list_id, "gl1");
        }
    }

    #[test]
    fn test_plus_one_shares_gender() {
        let guests = parse_guest_list("Jennifer Lawrence F + 1", "gl3");
        assert_eq!(guests.len(), 2);
        assert_eq!(guests[0].name, "Jennifer Lawrence");
        assert_eq!(guests[0].gender, Some(Gender::Female));
        assert_eq!(guests[1].name, "Jennifer Lawrence (Guest)");
        assert_eq!(guests[1].gender, Some(Gender::Female));
        assert_eq!(guests[1].guest_of.as_deref(), Some("Jennifer Lawrence"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let guests = parse_guest_list("John Smith\n\n\nJane Doe M", "gl1");
        assert_eq!(ids(&guests), ["gl1-1", "gl1-2"]);
        assert_eq!(names(&guests), ["John Smith", "Jane Doe"]);
        assert_eq!(guests[1].gender, Some(Gender::Male));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_guest_list("", "gl1").is_empty());
        assert!(parse_guest_list("  \n\t\n   ", "gl1").is_empty());
    }

    #[test]
    fn test_mixed_list_ids_run_across_lines() {
        let text = "David Danks M\nLiam Wise\nStefan Kovacovic + 2\nSarah Jones F\nAlex Kim N";
        let guests = parse_guest_list(text, "gl1");
        assert_eq!(
            ids(&guests),
            ["gl1-1", "gl1-2", "gl1-3", "gl1-4", "gl1-5", "gl1-6", "gl1-7"]
        );
        assert_eq!(guests[6].name, "Alex Kim");
        assert_eq!(guests[6].gender, Some(Gender::Neutral));
    }

    #[test]
    fn test_windows_line_endings_and_padding() {
        let guests = parse_guest_list("  Tom Holland M  \r\n\r\n Zendaya f\r\n", "gl3");
        assert_eq!(names(&guests), ["Tom Holland", "Zendaya"]);
        assert_eq!(guests[1].gender, Some(Gender::Female));
    }

    #[test]
    fn test_plus_without_space_or_with_wide_gap() {
        let guests = parse_guest_list("Jamie Taylor+1\nChris Wong   +    2", "gl2");
        assert_eq!(
            names(&guests),
            [
                "Jamie Taylor",
                "Jamie Taylor (Guest)",
                "Chris Wong",
                "Chris Wong (Guest)",
                "Chris Wong (Guest)"
            ]
        );
    }

    #[test]
    fn test_plus_zero_emits_primary_only() {
        let guests = parse_guest_list("Rachel Green F + 0", "gl2");
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Rachel Green");
        assert_eq!(guests[0].gender, Some(Gender::Female));
    }

    #[test]
    fn test_malformed_plus_kept_in_name() {
        let guests = parse_guest_list("Liam Wise +\nMia + two\nNoah +2 VIP", "gl1");
        assert_eq!(names(&guests), ["Liam Wise +", "Mia + two", "Noah +2 VIP"]);
        assert!(guests.iter().all(|g| g.guest_of.is_none()));
    }

    #[test]
    fn test_digits_without_plus_are_part_of_name() {
        let guests = parse_guest_list("Table 12", "gl1");
        assert_eq!(names(&guests), ["Table 12"]);
    }

    #[test]
    fn test_unrecognized_trailing_token_keeps_line() {
        let guests = parse_guest_list("Michael   Brown   VIP", "gl2");
        assert_eq!(names(&guests), ["Michael   Brown   VIP"]);
        assert_eq!(guests[0].gender, None);
    }

    #[test]
    fn test_gender_strip_collapses_inner_whitespace() {
        let guests = parse_guest_list("Michael   Brown   male", "gl2");
        assert_eq!(names(&guests), ["Michael Brown"]);
        assert_eq!(guests[0].gender, Some(Gender::Male));
    }

    #[test]
    fn test_gender_marker_only_in_last_position() {
        let guests = parse_guest_list("M Night Shyamalan", "gl1");
        assert_eq!(names(&guests), ["M Night Shyamalan"]);
        assert_eq!(guests[0].gender, None);
    }

    #[test]
    fn test_lone_gender_keyword_gives_empty_name_and_warning() {
        let outcome = GuestListParser::default().parse("Emma Watson\nF", "gl3");
        assert_eq!(names(&outcome.guests), ["Emma Watson", ""]);
        assert_eq!(outcome.guests[1].gender, Some(Gender::Female));
        assert_eq!(outcome.warnings, vec![ParseWarning::EmptyName { line: 2 }]);
    }

    #[test]
    fn test_bare_plus_count_gives_empty_primary() {
        let outcome = GuestListParser::default().parse("+2", "gl1");
        assert_eq!(names(&outcome.guests), ["", " (Guest)", " (Guest)"]);
        assert_eq!(outcome.guests[1].guest_of.as_deref(), Some(""));
        assert_eq!(outcome.warnings, vec![ParseWarning::EmptyName { line: 1 }]);
    }

    #[test]
    fn test_plus_ones_capped() {
        let config = ParserConfig {
            max_plus_ones: Some(3),
            ..ParserConfig::default()
        };
        let outcome = GuestListParser::new(config).parse("\nBig Party + 10", "gl1");
        assert_eq!(outcome.guests.len(), 4);
        assert_eq!(
            outcome.warnings,
            vec![ParseWarning::PlusOnesCapped {
                line: 2,
                requested: 10,
                allowed: 3
            }]
        );
        assert_eq!(outcome.warnings[0].line(), 2);
    }

    #[test]
    fn test_overflowing_count_is_capped() {
        let outcome = GuestListParser::default().parse("Crowd + 99999999999999999999999", "gl1");
        assert_eq!(outcome.guests.len(), 51);
        assert!(matches!(
            outcome.warnings[0],
            ParseWarning::PlusOnesCapped {
                requested: u64::MAX,
                allowed: 50,
                ..
            }
        ));
    }

    #[test]
    fn test_unbounded_config_honours_large_counts() {
        let outcome = GuestListParser::new(ParserConfig::unbounded()).parse("Crowd + 120", "gl1");
        assert_eq!(outcome.guests.len(), 121);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.guests[120].id, "gl1-121");
    }

    #[test]
    fn test_custom_plus_one_suffix() {
        let config = ParserConfig {
            plus_one_suffix: " +1".to_string(),
            ..ParserConfig::default()
        };
        let outcome = GuestListParser::new(config).parse("Tom Holland M + 1", "gl3");
        assert_eq!(names(&outcome.guests), ["Tom Holland", "Tom Holland +1"]);
    }

    #[test]
    fn test_byte_order_mark_treated_as_whitespace() {
        let guests = parse_guest_list("\u{FEFF}F\nDavid Danks M", "gl1");
        assert_eq!(names(&guests), ["", "David Danks"]);
        assert_eq!(guests[0].gender, Some(Gender::Female));

        let guests = parse_guest_list("\u{FEFF}Stefan Kovacovic + 1", "gl1");
        assert_eq!(
            names(&guests),
            ["Stefan Kovacovic", "Stefan Kovacovic (Guest)"]
        );
        assert_eq!(guests[1].guest_of.as_deref(), Some("Stefan Kovacovic"));

        assert!(parse_guest_list("\u{FEFF}\n\u{FEFF}  ", "gl1").is_empty());
    }

    #[test]
    fn test_split_plus_ones() {
        assert_eq!(split_plus_ones("Ann + 2"), Some(("Ann", "2")));
        assert_eq!(split_plus_ones("Ann+007"), Some(("Ann", "007")));
        assert_eq!(split_plus_ones("1+23"), Some(("1", "23")));
        assert_eq!(split_plus_ones("Ann +"), None);
        assert_eq!(split_plus_ones("Ann 2"), None);
        assert_eq!(split_plus_ones("+ 5 6"), None);
    }

    #[test]
    fn test_warning_display() {
        let warning = ParseWarning::PlusOnesCapped {
            line: 4,
            requested: 80,
            allowed: 50,
        };
        assert_eq!(
            warning.to_string(),
            "line 4: +80 exceeds the limit, only 50 plus-ones added"
        );
        assert_eq!(
            ParseWarning::EmptyName { line: 1 }.to_string(),
            "line 1: guest has an empty name"
        );
    }
}
