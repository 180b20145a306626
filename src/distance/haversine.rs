//! Great-circle distance on a spherical Earth.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Non-finite input yields non-finite output; callers validate coordinates.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Coordinate;
/// use u_delivery::distance::haversine_km;
///
/// let d = haversine_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 0.01));
/// assert!((d - 1.112).abs() < 1e-3);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
