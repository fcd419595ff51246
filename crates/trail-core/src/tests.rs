//! Unit tests for trail-core primitives.

#[cfg(test)]
mod ids {
    use crate::LocationId;

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(LocationId(0) < LocationId(1));
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{polyline_length_m, GeoPoint, ProjPoint};

    #[test]
    fn mercator_equator_origin() {
        let p = GeoPoint::new(0.0, 0.0).to_mercator();
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn mercator_known_point() {
        // lon 180° maps to the projection's eastern edge, ~20 037 508 m.
        let p = GeoPoint::new(0.0, 180.0).to_mercator();
        assert!((p.x - 20_037_508.34).abs() < 1.0, "got {}", p.x);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn mercator_inverse_roundtrip() {
        let g = GeoPoint::new(37.9, 26.6);
        let back = g.to_mercator().to_wgs84();
        assert!((back.lat - g.lat).abs() < 1e-9, "lat {}", back.lat);
        assert!((back.lon - g.lon).abs() < 1e-9, "lon {}", back.lon);
    }

    #[test]
    fn wgs84_of_origin() {
        let g = ProjPoint::new(0.0, 0.0).to_wgs84();
        assert!(g.lat.abs() < 1e-12);
        assert!(g.lon.abs() < 1e-12);
    }

    #[test]
    fn mercator_latitude_stretches_north() {
        let a = GeoPoint::new(10.0, 0.0).to_mercator();
        let b = GeoPoint::new(20.0, 0.0).to_mercator();
        // Mercator stretches with latitude: the second 10° span is longer.
        assert!(b.y - a.y > a.y);
    }

    #[test]
    fn proj_distance() {
        let a = ProjPoint::new(0.0, 0.0);
        let b = ProjPoint::new(3.0, 4.0);
        assert_eq!(a.distance_m(b), 5.0);
        assert_eq!(b.distance_m(a), 5.0);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let pts = [
            ProjPoint::new(0.0, 0.0),
            ProjPoint::new(3.0, 4.0),
            ProjPoint::new(3.0, 10.0),
        ];
        assert!((polyline_length_m(&pts) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn polyline_degenerate() {
        assert_eq!(polyline_length_m(&[]), 0.0);
        assert_eq!(polyline_length_m(&[ProjPoint::new(1.0, 1.0)]), 0.0);
    }
}

#[cfg(test)]
mod params {
    use crate::WalkParams;

    #[test]
    fn default_constants() {
        let w = WalkParams::default();
        assert_eq!(w.speed_kmh, 5.0);
        assert_eq!(w.kcal_per_km, 60.0);
    }
}
