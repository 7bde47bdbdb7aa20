use approx::assert_relative_eq;
use proptest::prelude::*;
use stargaze_coords::{
    compute_horizontal, is_visible, EquatorialCoordinate, GeoCoordinate, Instant,
    POLE_AZIMUTH_DEG,
};

const PRINCETON_LAT: f64 = 40.343;
const PRINCETON_LON: f64 = -74.651;
const VEGA: (f64, f64) = (279.234, 38.783);
const SIRIUS: (f64, f64) = (101.287, -16.716);

fn at(iso: &str) -> Instant {
    iso.parse().unwrap()
}

// --- Reference scenarios ---

#[test]
fn vega_overhead_from_princeton_at_equinox_noon() {
    let pos = compute_horizontal(
        &at("2024-03-20T12:00:00Z"),
        PRINCETON_LAT,
        PRINCETON_LON,
        VEGA.0,
        VEGA.1,
    );
    assert!((pos.altitude_deg - 86.11).abs() < 0.5);
    assert!(is_visible(pos.altitude_deg, 0.0));
}

#[test]
fn vega_rising_in_the_northeast_before_dawn() {
    let pos = compute_horizontal(
        &at("2024-03-21T04:00:00Z"),
        PRINCETON_LAT,
        PRINCETON_LON,
        VEGA.0,
        VEGA.1,
    );
    assert_relative_eq!(pos.altitude_deg, 9.0366, epsilon = 1e-3);
    assert_relative_eq!(pos.azimuth_deg, 45.808, epsilon = 1e-2);
    assert!(is_visible(pos.altitude_deg, 5.0));
    assert!(!is_visible(pos.altitude_deg, 10.0));
}

#[test]
fn sirius_setting_in_princeton_but_down_in_beijing() {
    let instant = at("2024-03-21T04:00:00Z");
    let princeton = compute_horizontal(&instant, PRINCETON_LAT, PRINCETON_LON, SIRIUS.0, SIRIUS.1);
    assert_relative_eq!(princeton.altitude_deg, 8.197, epsilon = 1e-2);
    assert_relative_eq!(princeton.azimuth_deg, 239.76, epsilon = 1e-1);

    let beijing = compute_horizontal(&instant, 39.9042, 116.4074, SIRIUS.0, SIRIUS.1);
    assert_relative_eq!(beijing.altitude_deg, -22.548, epsilon = 1e-2);
    assert!(!is_visible(beijing.altitude_deg, 0.0));
}

#[test]
fn typed_path_matches_raw_path() {
    let instant = at("2024-03-20T12:00:00Z");
    let vega = EquatorialCoordinate::new(VEGA.0, VEGA.1).unwrap();
    let observer = GeoCoordinate::new(PRINCETON_LAT, PRINCETON_LON).unwrap();
    assert_eq!(
        vega.to_horizontal(&instant, &observer),
        compute_horizontal(&instant, PRINCETON_LAT, PRINCETON_LON, VEGA.0, VEGA.1)
    );
}

// --- Properties ---

fn instant_strategy() -> impl Strategy<Value = Instant> {
    // 1900..2100
    (-2_208_988_800_000i64..4_102_444_800_000i64)
        .prop_map(|ms| Instant::from_unix_millis(ms as f64))
}

proptest! {
    #[test]
    fn altitude_stays_in_range(
        instant in instant_strategy(),
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        ra in 0.0f64..360.0,
        dec in -90.0f64..=90.0,
    ) {
        let pos = compute_horizontal(&instant, lat, lon, ra, dec);
        prop_assert!((-90.0..=90.0).contains(&pos.altitude_deg));
    }

    #[test]
    fn azimuth_stays_in_range(
        instant in instant_strategy(),
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        ra in 0.0f64..360.0,
        dec in -90.0f64..=90.0,
    ) {
        let pos = compute_horizontal(&instant, lat, lon, ra, dec);
        prop_assert!(pos.azimuth_deg >= 0.0 && pos.azimuth_deg < 360.0);
    }

    #[test]
    fn star_on_meridian_at_observer_latitude_is_at_zenith(
        instant in instant_strategy(),
        lat in -89.0f64..=89.0,
        lon in -180.0f64..=180.0,
    ) {
        let lst = stargaze_time::local_sidereal_degrees(&instant, lon);
        let pos = compute_horizontal(&instant, lat, lon, lst, lat);
        prop_assert!((pos.altitude_deg - 90.0).abs() < 1e-4);
    }

    #[test]
    fn pole_observer_sees_fixed_altitude(
        first in instant_strategy(),
        second in instant_strategy(),
        ra in 0.0f64..360.0,
        dec in -90.0f64..=90.0,
    ) {
        let a = compute_horizontal(&first, 90.0, 0.0, ra, dec);
        let b = compute_horizontal(&second, 90.0, 0.0, ra, dec);
        prop_assert!((a.altitude_deg - b.altitude_deg).abs() < 1e-9);
        prop_assert_eq!(a.azimuth_deg, POLE_AZIMUTH_DEG);
        prop_assert_eq!(b.azimuth_deg, POLE_AZIMUTH_DEG);
    }

    #[test]
    fn repeated_calls_are_bit_identical(
        instant in instant_strategy(),
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        ra in 0.0f64..360.0,
        dec in -90.0f64..=90.0,
    ) {
        let a = compute_horizontal(&instant, lat, lon, ra, dec);
        let b = compute_horizontal(&instant, lat, lon, ra, dec);
        prop_assert_eq!(a.altitude_deg.to_bits(), b.altitude_deg.to_bits());
        prop_assert_eq!(a.azimuth_deg.to_bits(), b.azimuth_deg.to_bits());
    }
}

#[test]
fn threshold_is_strict() {
    assert!(!is_visible(0.0, 0.0));
    assert!(is_visible(0.0001, 0.0));
}
