//! Parsing of human-entered latitude/longitude strings.

use crate::Coordinates;
use anyhow::{Result, anyhow, ensure};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	// 35° 41' 22'' N
	static ref DMS: Regex =
		Regex::new(r#"(?i)^(\d+)[°º]\s*(\d+)['′’]\s*(\d+(?:\.\d+)?)(?:''|["″”])?\s*([NSEW])?$"#).unwrap();
	// 35° 41.37' N
	static ref DM: Regex = Regex::new(r#"(?i)^(\d+)[°º]\s*(\d+(?:\.\d+)?)['′’]\s*([NSEW])?$"#).unwrap();
}

/// Parses a single coordinate in degrees-minutes-seconds, degrees-minutes or
/// plain decimal notation. `S` and `W` hemispheres yield negative values.
#[must_use]
pub fn parse_coordinate(input: &str) -> Option<f64> {
	let input = input.trim();

	if let Some(caps) = DMS.captures(input) {
		let degrees: f64 = caps[1].parse().ok()?;
		let minutes: f64 = caps[2].parse().ok()?;
		let seconds: f64 = caps[3].parse().ok()?;
		return Some(apply_hemisphere(
			degrees + minutes / 60.0 + seconds / 3600.0,
			caps.get(4).map(|m| m.as_str()),
		));
	}

	if let Some(caps) = DM.captures(input) {
		let degrees: f64 = caps[1].parse().ok()?;
		let minutes: f64 = caps[2].parse().ok()?;
		return Some(apply_hemisphere(degrees + minutes / 60.0, caps.get(3).map(|m| m.as_str())));
	}

	input.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn apply_hemisphere(value: f64, hemisphere: Option<&str>) -> f64 {
	match hemisphere {
		Some(h) if h.eq_ignore_ascii_case("S") || h.eq_ignore_ascii_case("W") => -value,
		_ => value,
	}
}

/// Parses and range-checks a latitude/longitude pair.
pub fn parse_lat_lng(lat: &str, lng: &str) -> Result<Coordinates> {
	let lat_value = parse_coordinate(lat).ok_or_else(|| anyhow!("cannot parse latitude '{}'", lat.trim()))?;
	let lng_value = parse_coordinate(lng).ok_or_else(|| anyhow!("cannot parse longitude '{}'", lng.trim()))?;
	ensure!(
		(-90.0..=90.0).contains(&lat_value),
		"latitude must be between -90 and 90, got {lat_value}"
	);
	ensure!(
		(-180.0..=180.0).contains(&lng_value),
		"longitude must be between -180 and 180, got {lng_value}"
	);
	Ok(Coordinates::new(lng_value, lat_value))
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	#[rstest]
	#[case("35° 41' 22'' N", 35.0 + 41.0 / 60.0 + 22.0 / 3600.0)]
	#[case("139° 45' 0'' E", 139.75)]
	#[case("35°41'22\"N", 35.0 + 41.0 / 60.0 + 22.0 / 3600.0)]
	#[case("33º 52′ 4.5″ s", -(33.0 + 52.0 / 60.0 + 4.5 / 3600.0))]
	#[case("35° 41.37' N", 35.0 + 41.37 / 60.0)]
	#[case("70° 30' W", -70.5)]
	#[case("35.689166", 35.689166)]
	#[case(" -139.75 ", -139.75)]
	fn parses_supported_notations(#[case] input: &str, #[case] expected: f64) {
		assert_relative_eq!(parse_coordinate(input).unwrap(), expected, epsilon = 1e-9);
	}

	#[test]
	fn tokyo_example() {
		let value = parse_coordinate("35° 41' 22'' N").unwrap();
		assert_relative_eq!(value, 35.68944, epsilon = 1e-5);
	}

	#[rstest]
	#[case("")]
	#[case("north")]
	#[case("35° N")]
	#[case("inf")]
	#[case("35.6abc")]
	fn rejects_garbage(#[case] input: &str) {
		assert_eq!(parse_coordinate(input), None);
	}

	#[test]
	fn pair_is_accepted() {
		let c = parse_lat_lng("35° 41' 22'' N", "139° 45' 0'' E").unwrap();
		assert_relative_eq!(c.y(), 35.68944, epsilon = 1e-5);
		assert_relative_eq!(c.x(), 139.75, epsilon = 1e-9);
	}

	#[rstest]
	#[case("91", "0", "latitude must be between")]
	#[case("0", "180.5", "longitude must be between")]
	#[case("x", "0", "cannot parse latitude")]
	#[case("0", "", "cannot parse longitude")]
	fn pair_is_rejected(#[case] lat: &str, #[case] lng: &str, #[case] message: &str) {
		let err = parse_lat_lng(lat, lng).unwrap_err();
		assert!(err.to_string().contains(message), "{err}");
	}
}
