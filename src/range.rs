//! Parsing of user-supplied number ranges.
//!
//! `--ayat` takes a selection such as `5`, `2-5` or `1,3-5,9`; `--range`
//! for hadith lookups only takes the `a-b` pair the hadith API accepts.

use crate::error::RangeError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Largest span a single `a-b` item of a selection may cover.
pub const MAX_SPAN: u32 = 1000;

/// Parse an ayah selection into the set of numbers it names.
pub fn parse_selection(input: &str) -> Result<BTreeSet<u32>, RangeError> {
    if input.trim().is_empty() {
        return Err(RangeError::Empty);
    }
    let mut selected = BTreeSet::new();
    for item in input.split(',') {
        let item = item.trim();
        if item.contains('-') {
            let (start, end) = parse_pair(item)?;
            if end - start >= MAX_SPAN {
                return Err(RangeError::TooWide {
                    start,
                    end,
                    limit: MAX_SPAN,
                });
            }
            selected.extend(start..=end);
        } else {
            selected.insert(parse_number(item)?);
        }
    }
    Ok(selected)
}

/// An inclusive `start-end` span of hadith numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HadithRange {
    pub start: u32,
    pub end: u32,
}

impl FromStr for HadithRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RangeError::Empty);
        }
        if !s.contains('-') {
            return Err(RangeError::Malformed(s.to_string()));
        }
        let (start, end) = parse_pair(s)?;
        Ok(HadithRange { start, end })
    }
}

impl fmt::Display for HadithRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn parse_pair(item: &str) -> Result<(u32, u32), RangeError> {
    let mut bounds = item.split('-');
    let (Some(start), Some(end), None) = (bounds.next(), bounds.next(), bounds.next()) else {
        return Err(RangeError::Malformed(item.to_string()));
    };
    let start = parse_bound(start, item)?;
    let end = parse_bound(end, item)?;
    if start > end {
        return Err(RangeError::Reversed { start, end });
    }
    Ok((start, end))
}

fn parse_bound(bound: &str, item: &str) -> Result<u32, RangeError> {
    parse_number(bound.trim()).map_err(|_| RangeError::Malformed(item.to_string()))
}

fn parse_number(item: &str) -> Result<u32, RangeError> {
    // `u32::from_str` accepts a leading '+', which is not part of the syntax.
    if item.is_empty() || !item.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::Malformed(item.to_string()));
    }
    item.parse()
        .map_err(|_| RangeError::Malformed(item.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(numbers: &[u32]) -> BTreeSet<u32> {
        numbers.iter().copied().collect()
    }

    #[test]
    fn parses_single_numbers_lists_and_ranges() {
        assert_eq!(parse_selection("1-3").unwrap(), set(&[1, 2, 3]));
        assert_eq!(parse_selection("1,3-5").unwrap(), set(&[1, 3, 4, 5]));
        assert_eq!(parse_selection("5").unwrap(), set(&[5]));
        assert_eq!(parse_selection("2,5,7-9").unwrap(), set(&[2, 5, 7, 8, 9]));
    }

    #[test]
    fn duplicates_collapse_and_whitespace_is_ignored() {
        assert_eq!(parse_selection(" 1 , 1-2 ,2 ").unwrap(), set(&[1, 2]));
        assert_eq!(parse_selection("3 - 4").unwrap(), set(&[3, 4]));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_selection(""), Err(RangeError::Empty));
        assert_eq!(parse_selection("   "), Err(RangeError::Empty));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_selection("abc"), Err(RangeError::Malformed("abc".into())));
        assert_eq!(parse_selection("+3"), Err(RangeError::Malformed("+3".into())));
    }

    #[test]
    fn rejects_partially_valid_input() {
        assert!(matches!(parse_selection("1,x"), Err(RangeError::Malformed(_))));
        assert!(matches!(parse_selection("1,,2"), Err(RangeError::Malformed(_))));
        assert!(matches!(parse_selection("1-"), Err(RangeError::Malformed(_))));
        assert!(matches!(parse_selection("-3"), Err(RangeError::Malformed(_))));
        assert!(matches!(parse_selection("1-2-3"), Err(RangeError::Malformed(_))));
    }

    #[test]
    fn rejects_reversed_and_oversized_spans() {
        assert_eq!(
            parse_selection("5-2"),
            Err(RangeError::Reversed { start: 5, end: 2 })
        );
        assert!(matches!(
            parse_selection("1-4000000000"),
            Err(RangeError::TooWide { .. })
        ));
        assert_eq!(parse_selection("1-1000").unwrap().len(), 1000);
    }

    #[test]
    fn hadith_range_accepts_only_pairs() {
        let range: HadithRange = "1-3".parse().unwrap();
        assert_eq!(range, HadithRange { start: 1, end: 3 });
        assert_eq!(range.to_string(), "1-3");

        assert!(matches!("5".parse::<HadithRange>(), Err(RangeError::Malformed(_))));
        assert!(matches!("1,3".parse::<HadithRange>(), Err(RangeError::Malformed(_))));
        assert!(matches!("1-3,5".parse::<HadithRange>(), Err(RangeError::Malformed(_))));
        assert!(matches!("abc1-3".parse::<HadithRange>(), Err(RangeError::Malformed(_))));
        assert_eq!("".parse::<HadithRange>(), Err(RangeError::Empty));
        assert_eq!(
            "9-4".parse::<HadithRange>(),
            Err(RangeError::Reversed { start: 9, end: 4 })
        );
    }
}
