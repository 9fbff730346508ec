use core::str::FromStr;

use crate::error::{Error, Result};

/// Cutoff intensity; samples at or above it are opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u8);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(128);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_opaque(self, sample: u8) -> bool {
        sample >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<u32> for Threshold {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| Error::ThresholdOutOfRange(value))
    }
}

// Out-of-range values are rejected, not clamped.
impl FromStr for Threshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s.trim().parse().map_err(|_| Error::InvalidThreshold)?;
        Self::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_128() {
        assert_eq!(Threshold::default().value(), 128);
    }

    #[test]
    fn comparison_is_inclusive() {
        let t = Threshold::new(128);
        assert!(t.is_opaque(128));
        assert!(t.is_opaque(255));
        assert!(!t.is_opaque(127));
        assert!(Threshold::new(0).is_opaque(0));
    }

    #[test]
    fn parse() {
        assert_eq!("0".parse::<Threshold>(), Ok(Threshold::new(0)));
        assert_eq!(" 255 ".parse::<Threshold>(), Ok(Threshold::new(255)));
        assert_eq!("256".parse::<Threshold>(), Err(Error::ThresholdOutOfRange(256)));
        assert_eq!("-1".parse::<Threshold>(), Err(Error::InvalidThreshold));
        assert_eq!("abc".parse::<Threshold>(), Err(Error::InvalidThreshold));
    }

    #[test]
    fn try_from_wide() {
        assert_eq!(Threshold::try_from(200u32), Ok(Threshold::new(200)));
        assert_eq!(Threshold::try_from(1000u32), Err(Error::ThresholdOutOfRange(1000)));
    }
}
