use crate::error::FilterError;

/// Direction of a finite difference along one axis.
///
/// The integer flag encoding is `0` for [`Orientation::Forward`] and `1` for
/// [`Orientation::Backward`]; any other integer is rejected.
///
/// # Example
///
/// ```
/// use kerpy_filters::{FilterError, Orientation};
///
/// assert_eq!(Orientation::try_from(1u8), Ok(Orientation::Backward));
/// assert_eq!(Orientation::try_from(2u8), Err(FilterError::InvalidOrientation(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Orientation {
    /// Flag `0`: the coefficient before the center is negative.
    #[default]
    Forward,
    /// Flag `1`: the coefficient before the center is positive.
    Backward,
}

impl Orientation {
    /// The sign `2 * flag - 1` applied to the stencil: `-1` forward, `+1` backward.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Backward => 1.0,
        }
    }

    /// The opposite orientation.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl TryFrom<i64> for Orientation {
    type Error = FilterError;

    fn try_from(flag: i64) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Self::Forward),
            1 => Ok(Self::Backward),
            other => {
                log::warn!("rejected orientation flag {other}");
                Err(FilterError::InvalidOrientation(other))
            }
        }
    }
}

impl TryFrom<i32> for Orientation {
    type Error = FilterError;

    fn try_from(flag: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(flag))
    }
}

impl TryFrom<u8> for Orientation {
    type Error = FilterError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(flag))
    }
}

impl From<bool> for Orientation {
    fn from(backward: bool) -> Self {
        if backward {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Forward => 0,
            Orientation::Backward => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Orientation;
    use crate::FilterError;

    #[test]
    fn flags() -> Result<(), FilterError> {
        assert_eq!(Orientation::try_from(0i32)?, Orientation::Forward);
        assert_eq!(Orientation::try_from(1i64)?, Orientation::Backward);
        assert_eq!(Orientation::from(true), Orientation::Backward);
        assert_eq!(u8::from(Orientation::Backward), 1);
        Ok(())
    }

    #[test]
    fn invalid_flags() {
        for flag in [-1i64, 2, 7] {
            let err = Orientation::try_from(flag).unwrap_err();
            assert_eq!(err, FilterError::InvalidOrientation(flag));
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn signs() {
        assert_eq!(Orientation::Forward.sign(), -1.0);
        assert_eq!(Orientation::Backward.sign(), 1.0);
        assert_eq!(Orientation::Forward.reversed(), Orientation::Backward);
    }

    #[test]
    fn serde_as_flag() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Orientation::Backward)?, "1");
        assert_eq!(serde_json::from_str::<Orientation>("0")?, Orientation::Forward);
        assert!(serde_json::from_str::<Orientation>("2").is_err());
        Ok(())
    }
}
