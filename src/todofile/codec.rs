//! # Record Codec
//!
//! Maps one line of the todo file to one [`Item`] and back. The format is a
//! single literal shape per line:
//!
//! ```text
//! {id:3, title:"Buy milk"}
//! ```
//!
//! Titles are written raw, without escaping. A title containing `"}` will not
//! survive a round trip.
//!
//! Parsing never fails hard: a line either yields an item or a
//! [`ParseOutcome`] that the store turns into a diagnostic.

use crate::model::{Item, ItemId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::num::IntErrorKind;

static RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{id:(\d+), title:"(.+?)"\}"#).expect("record pattern is valid")
});

/// Why a line that has the record shape still could not become an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The id digits do not form an integer we can read.
    InvalidId,
    /// The id is larger than [`ItemId::MAX`].
    IdOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(Item),
    Unmatched,
    Malformed(Malformed),
}

pub fn serialize(item: &Item) -> String {
    format!("{{id:{}, title:\"{}\"}}", item.id, item.title())
}

pub fn to_lines(items: &[Item]) -> Vec<String> {
    items.iter().map(serialize).collect()
}

pub fn deserialize(line: &str) -> ParseOutcome {
    let Some(caps) = RECORD.captures(line) else {
        return ParseOutcome::Unmatched;
    };

    match caps[1].parse::<ItemId>() {
        Ok(id) => ParseOutcome::Parsed(Item::new(id, &caps[2])),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            ParseOutcome::Malformed(Malformed::IdOverflow)
        }
        Err(_) => ParseOutcome::Malformed(Malformed::InvalidId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_exact_shape() {
        let item = Item::new(3, "Buy milk");
        assert_eq!(serialize(&item), r#"{id:3, title:"Buy milk"}"#);
    }

    #[test]
    fn round_trips_titles_with_punctuation() {
        for title in ["Buy milk", "call {mom}", "a, b: c", "say \"hi\" later", "ünïcödé"] {
            let item = Item::new(42, title);
            assert_eq!(deserialize(&serialize(&item)), ParseOutcome::Parsed(item));
        }
    }

    #[test]
    fn garbage_is_unmatched() {
        assert_eq!(deserialize("hello world"), ParseOutcome::Unmatched);
        assert_eq!(deserialize(""), ParseOutcome::Unmatched);
        assert_eq!(deserialize(r#"{id:-1, title:"x"}"#), ParseOutcome::Unmatched);
        assert_eq!(deserialize(r#"{id:1, title:""}"#), ParseOutcome::Unmatched);
    }

    #[test]
    fn record_can_be_embedded_in_a_longer_line() {
        assert_eq!(
            deserialize(r#"junk {id:5, title:"Walk dog"} trailing"#),
            ParseOutcome::Parsed(Item::new(5, "Walk dog"))
        );
    }

    #[test]
    fn title_stops_at_first_quote_brace() {
        assert_eq!(
            deserialize(r#"{id:1, title:"a"} b"}"#),
            ParseOutcome::Parsed(Item::new(1, "a"))
        );
    }

    #[test]
    fn huge_id_is_overflow() {
        assert_eq!(
            deserialize(r#"{id:99999999999999999999, title:"x"}"#),
            ParseOutcome::Malformed(Malformed::IdOverflow)
        );
    }

    #[test]
    fn non_ascii_digits_are_invalid() {
        // `\d` is Unicode aware, integer parsing is not.
        assert_eq!(
            deserialize("{id:\u{0663}, title:\"x\"}"),
            ParseOutcome::Malformed(Malformed::InvalidId)
        );
    }

    #[test]
    fn to_lines_keeps_order() {
        let items = vec![Item::new(2, "B"), Item::new(1, "A")];
        assert_eq!(
            to_lines(&items),
            vec![r#"{id:2, title:"B"}"#, r#"{id:1, title:"A"}"#]
        );
    }
}
