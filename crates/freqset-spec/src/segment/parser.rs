//! Frequency-set string parser.

use super::Segment;
use crate::error::ParseError;

const DWELL_DELIMITER: char = '=';
const RANGE_DELIMITER: char = '-';

/// Parses a frequency-set string into segments, in input order.
///
/// Accepted tokens, separated by commas and trimmed:
/// - `144` fixed tone for `default_dwell` seconds
/// - `144=360` fixed tone for 360 seconds
/// - `160-180` linear sweep for `default_dwell` seconds
/// - `520-555=60` linear sweep for 60 seconds
///
/// Empty tokens are skipped. The dwell is split off before the range check.
///
/// # Example
/// ```
/// use freqset_spec::parse_frequency_set;
///
/// let segments = parse_frequency_set("144, 520-555=60", 180.0).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].end_frequency(), 555.0);
/// assert_eq!(segments[1].duration(), 60.0);
/// ```
pub fn parse_frequency_set(spec: &str, default_dwell: f64) -> Result<Vec<Segment>, ParseError> {
    spec.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| parse_token(index, token, default_dwell))
        .collect()
}

fn parse_token(index: usize, token: &str, default_dwell: f64) -> Result<Segment, ParseError> {
    let (freq_part, dwell) = match token.split_once(DWELL_DELIMITER) {
        Some((lhs, rhs)) => {
            if rhs.contains(DWELL_DELIMITER) {
                return Err(ParseError::RepeatedDelimiter {
                    index,
                    token: token.to_string(),
                    delimiter: DWELL_DELIMITER,
                });
            }
            (lhs.trim(), parse_number(index, token, rhs)?)
        }
        None => (token, default_dwell),
    };

    if !(dwell.is_finite() && dwell > 0.0) {
        return Err(ParseError::NonPositiveDwell {
            index,
            token: token.to_string(),
            dwell,
        });
    }

    if freq_part.starts_with(RANGE_DELIMITER) {
        return Err(ParseError::NegativeFrequency {
            index,
            token: token.to_string(),
        });
    }

    let (start, end) = match freq_part.split_once(RANGE_DELIMITER) {
        Some((lhs, rhs)) => {
            if rhs.contains(RANGE_DELIMITER) {
                return Err(ParseError::RepeatedDelimiter {
                    index,
                    token: token.to_string(),
                    delimiter: RANGE_DELIMITER,
                });
            }
            (
                parse_frequency(index, token, lhs)?,
                parse_frequency(index, token, rhs)?,
            )
        }
        None => {
            let freq = parse_frequency(index, token, freq_part)?;
            (freq, freq)
        }
    };

    // Both frequencies and the dwell were checked above.
    Segment::new(start, end, dwell).ok_or_else(|| ParseError::NonPositiveDwell {
        index,
        token: token.to_string(),
        dwell,
    })
}

fn parse_frequency(index: usize, token: &str, field: &str) -> Result<f64, ParseError> {
    let frequency = parse_number(index, token, field)?;
    if frequency.is_finite() && frequency > 0.0 {
        Ok(frequency)
    } else {
        Err(ParseError::InvalidFrequency {
            index,
            token: token.to_string(),
            frequency,
        })
    }
}

fn parse_number(index: usize, token: &str, field: &str) -> Result<f64, ParseError> {
    let field = field.trim();
    field.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        index,
        token: token.to_string(),
        value: field.to_string(),
    })
}
