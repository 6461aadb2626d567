use crate::SessionError;
use std::fmt;
use std::str::FromStr;

/// Ground-truth digit supplied by the user, always in 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(u8);

impl Label {
    pub const MAX: u8 = 9;

    pub fn new(value: i64) -> Result<Self, SessionError> {
        if !(0..=Self::MAX as i64).contains(&value) {
            return Err(SessionError::InvalidLabel(format!(
                "{value} is outside 0-{}",
                Self::MAX
            )));
        }
        Ok(Self(value as u8))
    }

    /// Parse text entry. Only a base-10 integer (surrounding whitespace
    /// allowed) is accepted.
    pub fn parse(text: &str) -> Result<Self, SessionError> {
        let value = text
            .trim()
            .parse::<i64>()
            .map_err(|_| SessionError::InvalidLabel(format!("{text:?} is not an integer")))?;
        Self::new(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Label {
    type Error = SessionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Label {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
