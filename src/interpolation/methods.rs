//! Tangent estimation method variants.
//!
//! Provides the [`Method`] enum, which enumerates every supported way of
//! estimating the derivative at a breakpoint. The evaluator always builds a
//! piecewise cubic Hermite interpolant; the method only decides its tangents.

use std::str::FromStr;

use crate::interpolation::errors::InterpolationError;


/// Tangent estimation methods.
/// - [`Method::Linear`]           straight segments, tangents ignored
/// - [`Method::FiniteDifference`] average of adjacent secants
/// - [`Method::Cardinal`]         scaled central difference, uses tension
/// - [`Method::FritschCarlson`]   averaged secants projected onto the monotone disk
/// - [`Method::FritschButland`]   weighted harmonic mean of adjacent secants
/// - [`Method::Steffen`]          parabolic estimate limited by the adjacent secants
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    Linear,
    #[default]
    FiniteDifference,
    Cardinal,
    FritschCarlson,
    FritschButland,
    Steffen,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::Linear,
        Method::FiniteDifference,
        Method::Cardinal,
        Method::FritschCarlson,
        Method::FritschButland,
        Method::Steffen,
    ];

    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Linear           => "linear",
            Method::FiniteDifference => "finitedifference",
            Method::Cardinal         => "cardinal",
            Method::FritschCarlson   => "fritschcarlson",
            Method::FritschButland   => "fritschbutland",
            Method::Steffen          => "steffen",
        }
    }

    /// Only [`Method::Cardinal`] reads the tension parameter.
    pub const fn uses_tension(self) -> bool {
        matches!(self, Method::Cardinal)
    }

    /// Methods whose tangents satisfy the Fritsch–Carlson sufficient
    /// condition on every segment where the data is monotone.
    pub const fn is_monotone_preserving(self) -> bool {
        matches!(
            self,
            Method::FritschCarlson | Method::FritschButland | Method::Steffen
        )
    }

    /// Parses a method tag, falling back to [`Method::FiniteDifference`]
    /// for anything unrecognised.
    ///
    /// Use [`str::parse`] to reject unknown tags instead.
    pub fn parse_lenient(tag: &str) -> Method {
        match tag.parse() {
            Ok(method) => method,
            Err(_) => {
                tracing::warn!(
                    tag,
                    fallback = Method::FiniteDifference.method_name(),
                    "unknown interpolation method, falling back"
                );
                Method::FiniteDifference
            }
        }
    }
}

impl FromStr for Method {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.method_name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| InterpolationError::UnknownMethod { got: tag.to_string() })
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
