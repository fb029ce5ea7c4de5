//! Argument types parsed from the command line.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StatsError};
use crate::request::{CallerOptions, OptionValue};


/// One `key=value` request option.
///
/// A value containing commas becomes a list, so `-o leagueIds=103,104`
/// is sent as `leagueIds=103,104`.
///
/// # Examples
///
/// ```rust
/// use mlb_statsapi::cli::types::OptionArg;
///
/// let arg: OptionArg = "personId=677594".parse().unwrap();
/// assert_eq!(arg.key, "personId");
/// assert_eq!(arg.value.to_string(), "677594");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionArg {
    pub key: String,
    pub value: OptionValue,
}

impl FromStr for OptionArg {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StatsError::InvalidOption {
            input: s.to_string(),
        };

        let (key, raw) = s.split_once('=').ok_or_else(invalid)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(invalid());
        }

        let value = if raw.contains(',') {
            OptionValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(OptionValue::from)
                    .collect(),
            )
        } else {
            OptionValue::from(raw)
        };

        Ok(Self {
            key: key.to_string(),
            value,
        })
    }
}

impl fmt::Display for OptionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Collect repeated `-o` arguments; a later key replaces an earlier one.
pub fn options_from_args(args: &[OptionArg]) -> CallerOptions {
    args.iter()
        .map(|arg| (arg.key.clone(), arg.value.clone()))
        .collect()
}
