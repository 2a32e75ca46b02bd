use lazy_static::lazy_static;
use regex::Regex;

/// Keyword -> room count, checked top to bottom, first substring hit wins.
///
/// Order is part of the contract: "2.5br" contains "5br" and resolves to "5",
/// "11 bed" contains "1 bed" and resolves to "1". Do not sort this table.
pub const KEYWORD_TABLE: &[(&str, &str)] = &[
    ("studio", "1"),
    ("1 bed", "1"),
    ("1br", "1"),
    ("1 bhk", "1"),
    ("1 bedroom", "1"),
    ("onebedroom", "1"),
    ("1.5 br", "1.5"),
    ("1.5 bhk", "1.5"),
    ("1.5 bed", "1.5"),
    ("2 bed", "2"),
    ("2br", "2"),
    ("2 bhk", "2"),
    ("2 bedroom", "2"),
    ("twobedroom", "2"),
    ("2.5 br", "2.5"),
    ("2.5 bhk", "2.5"),
    ("3 bed", "3"),
    ("3br", "3"),
    ("3 bhk", "3"),
    ("3 bedroom", "3"),
    ("threebedroom", "3"),
    ("4 bed", "4"),
    ("4br", "4"),
    ("4 bhk", "4"),
    ("4 bedroom", "4"),
    ("fourbedroom", "4"),
    ("5 bed", "5"),
    ("5br", "5"),
    ("5 bhk", "5"),
    ("5 bedroom", "5"),
    ("6 bed", "6"),
    ("6br", "6"),
    ("6 bhk", "6"),
    ("6 bedroom", "6"),
    ("penthouse", "4"),
    ("duplex", "3"),
    ("executive", "1"),
    ("premium one", "1"),
    ("premium two", "2"),
];

lazy_static! {
    /// Fallback: a number (decimals allowed) followed by optional whitespace and "br".
    /// Matches: "7 br", "1.5br", "3.25 br"
    pub static ref BEDROOM_NUMBER_PATTERN: Regex = Regex::new(r"(\d+(\.\d+)?)\s*br").unwrap();
}

/// First table entry whose keyword occurs in `normalized`
pub fn match_keyword(normalized: &str) -> Option<&'static str> {
    KEYWORD_TABLE
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, category)| *category)
}

/// Number captured by the fallback pattern, verbatim
pub fn match_bedroom_number(normalized: &str) -> Option<&str> {
    BEDROOM_NUMBER_PATTERN
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
