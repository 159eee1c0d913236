//! Percent value object

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use std::fmt;

/// A percentage stored as a fraction (1.0 == 100%)
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Percent(BigDecimal);

impl Percent {
	pub fn from_fraction(fraction: BigDecimal) -> Self {
		Self(fraction)
	}

	pub fn from_percent(percent: impl Into<BigDecimal>) -> Self {
		Self(percent.into() / BigDecimal::from(100))
	}

	pub fn from_basis_points(basis_points: u32) -> Self {
		Self(BigDecimal::from(basis_points) / BigDecimal::from(10_000))
	}

	pub fn zero() -> Self {
		Self(BigDecimal::zero())
	}

	pub fn as_fraction(&self) -> &BigDecimal {
		&self.0
	}

	/// Basis points (percent x 100), rounded half-up; the wire form used in
	/// withdraw memos
	pub fn basis_points(&self) -> u32 {
		(&self.0 * BigDecimal::from(10_000))
			.with_scale_round(0, RoundingMode::HalfUp)
			.to_u32()
			.unwrap_or(0)
	}

	/// `1 - p`, floored at zero
	pub fn complement(&self) -> Percent {
		let complement = BigDecimal::from(1) - &self.0;
		if complement < BigDecimal::zero() {
			Self(BigDecimal::zero())
		} else {
			Self(complement)
		}
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}
}

impl fmt::Display for Percent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let percent = (&self.0 * BigDecimal::from(100)).with_scale_round(2, RoundingMode::HalfUp);
		write!(f, "{}%", percent)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_basis_points_round_trip() {
		let percent = Percent::from_percent(50);
		assert_eq!(percent.basis_points(), 5_000);
		assert_eq!(Percent::from_basis_points(5_000), percent);
	}

	#[test]
	fn test_complement_floors_at_zero() {
		assert_eq!(Percent::from_percent(30).complement(), Percent::from_percent(70));
		assert!(Percent::from_percent(150).complement().is_zero());
	}

	#[test]
	fn test_display() {
		assert_eq!(Percent::from_basis_points(125).to_string(), "1.25%");
	}
}
