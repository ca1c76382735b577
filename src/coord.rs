/// Mean radius of the Earth, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical coordinate, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    lat: f64,
    lng: f64,
}

impl Coord {
    /// Create a new `Coord`. The components are not validated,
    /// see `is_valid`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Return the latitude component of this `Coord`.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Return the longitude component of this `Coord`.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Return true if the latitude is within [-90, 90] and the longitude is
    /// within [-180, 180]. NaN components are never valid.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Return the great-circle distance in kilometres between this `Coord`
    /// and `other`, using the haversine formula on a sphere of radius
    /// `EARTH_RADIUS_KM`.
    ///
    /// # Example
    /// ```rust
    /// use nearaddr::Coord;
    /// let belo_horizonte = Coord::new(-19.9167, -43.9345);
    /// let rio = Coord::new(-22.9068, -43.1729);
    /// let km = belo_horizonte.distance_km(&rio);
    /// assert!((km - 340.0).abs() < 5.0);
    /// ```
    pub fn distance_km(&self, other: &Coord) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = other.lng.to_radians() - self.lng.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        // Rounding can push `a` just past 1 for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat(), self.lng())
    }
}

impl From<(f64, f64)> for Coord {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod test {
    use super::Coord;

    const TOLERANCE_KM: f64 = 1e-6;

    fn sample_coords() -> Vec<Coord> {
        let mut coords = Vec::new();
        for lat in (-90..=90).step_by(30) {
            for lng in (-180..=180).step_by(45) {
                coords.push(Coord::new(lat as f64 + 0.25, lng as f64 - 0.5));
            }
        }
        coords.push(Coord::new(-19.9167, -43.9345));
        coords.push(Coord::new(0.0, 0.0));
        coords
    }

    #[test]
    fn distance_to_self_is_zero() {
        for coord in sample_coords() {
            assert_eq!(coord.distance_km(&coord), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let coords = sample_coords();
        for a in &coords {
            for b in &coords {
                let ab = a.distance_km(b);
                let ba = b.distance_km(a);
                assert!((ab - ba).abs() < TOLERANCE_KM, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn distance_is_non_negative() {
        let coords = sample_coords();
        for a in &coords {
            for b in &coords {
                assert!(a.distance_km(b) >= 0.0);
            }
        }
    }

    #[test]
    fn distinct_coords_have_positive_distance() {
        let a = Coord::new(10.0, 20.0);
        let b = Coord::new(10.0, 20.0001);
        assert!(a.distance_km(&b) > 0.0);
    }

    #[test]
    fn distances_along_the_equator_add_up() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(0.0, 10.0);
        let c = Coord::new(0.0, 25.0);
        let sum = a.distance_km(&b) + b.distance_km(&c);
        assert!((a.distance_km(&c) - sum).abs() < TOLERANCE_KM);
    }

    #[test]
    fn distances_along_a_meridian_add_up() {
        let a = Coord::new(-40.0, 12.0);
        let b = Coord::new(5.0, 12.0);
        let c = Coord::new(60.0, 12.0);
        let sum = a.distance_km(&b) + b.distance_km(&c);
        assert!((a.distance_km(&c) - sum).abs() < TOLERANCE_KM);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let km = Coord::new(0.0, 0.0).distance_km(&Coord::new(0.0, 1.0));
        assert!((km - 111.195).abs() < 0.01);
    }

    #[test]
    fn antipodal_points_are_half_a_circumference_apart() {
        let km = Coord::new(0.0, 0.0).distance_km(&Coord::new(0.0, 180.0));
        let half = std::f64::consts::PI * super::EARTH_RADIUS_KM;
        assert!((km - half).abs() < 1e-3);
    }

    #[test]
    fn nan_propagates() {
        let km = Coord::new(f64::NAN, 0.0).distance_km(&Coord::new(0.0, 0.0));
        assert!(km.is_nan());
    }

    #[test]
    fn validity() {
        assert!(Coord::new(90.0, -180.0).is_valid());
        assert!(Coord::new(-19.9167, -43.9345).is_valid());
        assert!(!Coord::new(90.5, 0.0).is_valid());
        assert!(!Coord::new(0.0, 181.0).is_valid());
        assert!(!Coord::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(-19.92, -43.94).to_string(), "-19.92, -43.94");
    }
}
