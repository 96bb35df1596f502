use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 1440;

/// Minutes since midnight. The schedule is same-day only, so every
/// valid value lies in [0, 1439].
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Time(pub u16);

#[derive(Debug, Error, PartialEq)]
pub enum ParseTimeError {
    #[error("invalid time '{0}': expected HH:MM")]
    Format(String),
    #[error("invalid time '{0}': hour must be in range [0, 23]")]
    Hour(String),
    #[error("invalid time '{0}': minute must be in range [0, 59]")]
    Minute(String),
}

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hh, mm) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError::Format(s.to_string()))?;
        let hour = hh
            .parse::<u16>()
            .map_err(|_| ParseTimeError::Format(s.to_string()))?;
        let minute = mm
            .parse::<u16>()
            .map_err(|_| ParseTimeError::Format(s.to_string()))?;
        if hour > 23 {
            return Err(ParseTimeError::Hour(s.to_string()));
        }
        if minute > 59 {
            return Err(ParseTimeError::Minute(s.to_string()));
        }
        Ok(Time(hour * 60 + minute))
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Add<u16> for Time {
    type Output = Self;

    // Saturating: a floor past the end of the day admits no flight.
    fn add(self, rhs: u16) -> Self::Output {
        Time(self.0.saturating_add(rhs))
    }
}

/// Elapsed minutes between two times on the same day.
impl Sub<Time> for Time {
    type Output = u16;

    fn sub(self, rhs: Time) -> Self::Output {
        self.0 - rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(Ok(Time(0)), "00:00".parse());
        assert_eq!(Ok(Time(510)), "08:30".parse());
        assert_eq!(Ok(Time(23 * 60 + 59)), "23:59".parse());
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        assert_eq!(
            Err(ParseTimeError::Format("0830".to_string())),
            "0830".parse::<Time>()
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(
            Err(ParseTimeError::Format("ab:cd".to_string())),
            "ab:cd".parse::<Time>()
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            Err(ParseTimeError::Hour("24:00".to_string())),
            "24:00".parse::<Time>()
        );
        assert_eq!(
            Err(ParseTimeError::Minute("10:60".to_string())),
            "10:60".parse::<Time>()
        );
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!("08:30", Time(510).to_string());
        assert_eq!("00:05", Time(5).to_string());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Time(660), Time(600) + 60);
        assert_eq!(180, Time(660) - Time(480));
        assert_eq!(Time(u16::MAX), Time(1439) + u16::MAX);
    }
}
