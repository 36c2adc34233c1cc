use claims::{assert_matches, assert_ok};
use great_circle::{
    Corrector, Error, GeoPoint, Geodesy, GreatCircle, MultiPolygon, Options, Warning, Wgs84,
    compute_shape, compute_shape_with, sample_boundary,
};

/// Difference between two longitudes, ignoring whole turns
fn lon_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn is_seam(point: &GeoPoint) -> bool {
    point.lat.abs() == 90.0 || point.lon.abs() == 180.0
}

/// Index of the `(90|-90, from)` seam vertex followed by `(90|-90, to)`
fn find_pole_seam(shape: &MultiPolygon, pole_lat: f64, from: f64, to: f64) -> Option<usize> {
    let part = &shape.parts()[0];
    part.windows(2).position(|w| {
        w[0] == GeoPoint::new(pole_lat, from) && w[1] == GeoPoint::new(pole_lat, to)
    })
}

#[test]
fn moderate_circle_is_a_single_ring() {
    let center = GeoPoint::new(45.0, 10.0);
    let radius = 100_000.0;
    let options = Options::default();

    let shape = assert_ok!(compute_shape(center, radius, &options));
    assert_eq!(shape.len(), 1);

    let part = &shape.parts()[0];
    assert_eq!(part.len(), options.segments);

    // The ring starts with bearing index 1 and closes with index 0
    let sampled = assert_ok!(sample_boundary(&Wgs84, center, radius, options.segments));
    for (k, point) in part.iter().enumerate() {
        let expected = sampled.points()[(k + 1) % options.segments];
        assert!((point.lat - expected.lat).abs() < 1e-9);
        assert!(lon_diff(point.lon, expected.lon) < 1e-9);

        let distance = assert_ok!(Wgs84.distance(center, *point));
        assert!((distance - radius).abs() < 1e-6, "{k}: {distance}");
    }
}

#[test]
fn deterministic() {
    let center = GeoPoint::new(-71.3, 160.2);
    let options = Options::default();

    let a = assert_ok!(compute_shape(center, 2_500_000.0, &options));
    let b = assert_ok!(compute_shape(center, 2_500_000.0, &options));
    assert_eq!(a, b);

    let a = assert_ok!(compute_shape(center, 2_500_000.0, &Options::legacy()));
    let b = assert_ok!(compute_shape(center, 2_500_000.0, &Options::legacy()));
    assert_eq!(a, b);
}

#[test]
fn north_pole_center_routes_over_the_pole() {
    let options = Options::default();
    let shape = assert_ok!(compute_shape(GeoPoint::new(90.0, 0.0), 1_000_000.0, &options));

    assert_eq!(shape.len(), 1);
    assert_eq!(shape.point_count(), options.segments + 4);

    let part = &shape.parts()[0];
    let i = find_pole_seam(&shape, 90.0, -180.0, 180.0).expect("missing pole seam");
    assert!(i >= 1);
    assert_eq!(part[i - 1].lon, -180.0);
    assert_eq!(part[i + 2].lon, 180.0);
    assert!((part[i - 1].lat - part[i + 2].lat).abs() < 1e-9);
}

#[test]
fn south_pole_center_routes_over_the_pole() {
    let options = Options::default();
    let shape = assert_ok!(compute_shape(GeoPoint::new(-90.0, 0.0), 1_000_000.0, &options));

    assert_eq!(shape.len(), 1);
    assert_eq!(shape.point_count(), options.segments + 4);
    assert!(find_pole_seam(&shape, -90.0, 180.0, -180.0).is_some());
}

#[test]
fn off_center_pole_has_no_other_jumps() {
    let options = Options::default();
    let center = GeoPoint::new(80.0, 45.0);
    let shape = assert_ok!(compute_shape(center, 2_000_000.0, &options));

    assert_eq!(shape.len(), 1);
    assert_eq!(shape.point_count(), options.segments + 4);

    // In the shifted frame the seam lies opposite the center longitude
    let seam_west = center.lon - 180.0;
    let seam_east = center.lon + 180.0;
    assert!(find_pole_seam(&shape, 90.0, seam_west, seam_east).is_some());

    let part = &shape.parts()[0];
    for w in part.windows(2) {
        if w[0].lat == 90.0 && w[1].lat == 90.0 {
            continue;
        }
        assert!(
            (w[1].lon - w[0].lon).abs() <= options.longitude_delta_wrap_cutoff,
            "{w:?}"
        );
    }
}

#[test]
fn antimeridian_without_shift_splits_in_two() {
    let center = GeoPoint::new(0.0, 179.9);
    let options = Options::default().with_prevent_antimeridian_wrapping(false);
    let shape = assert_ok!(compute_shape(center, 1_000_000.0, &options));

    assert_eq!(shape.len(), 2);
    assert_eq!(shape.point_count(), options.segments + 4);

    let boxes = shape.bounding_boxes();
    assert_eq!(boxes.len(), 2);
    for bbox in &boxes {
        assert!(bbox.width() <= 180.0, "{bbox:?}");
    }

    // One part on each side of the date line
    assert!(boxes[0].west >= 0.0 && boxes[0].east == 180.0, "{:?}", boxes[0]);
    assert!(boxes[1].west == -180.0 && boxes[1].east <= 0.0, "{:?}", boxes[1]);

    // No pole seams, only date line seams
    assert!(shape.parts().iter().flatten().all(|p| p.lat.abs() < 90.0));
    for part in shape.parts() {
        for w in part.windows(2) {
            if is_seam(&w[0]) && is_seam(&w[1]) {
                continue;
            }
            assert!((w[1].lon - w[0].lon).abs() <= options.longitude_delta_wrap_cutoff);
        }
    }
}

#[test]
fn antimeridian_with_shift_stays_continuous() {
    let center = GeoPoint::new(0.0, 179.9);
    let radius = 1_000_000.0;
    let options = Options::default();
    let shape = assert_ok!(compute_shape(center, radius, &options));

    assert_eq!(shape.len(), 1);
    let part = &shape.parts()[0];
    assert_eq!(part.len(), options.segments);
    assert!(part.iter().any(|p| p.lon > 180.0));

    // Undoing the shift reproduces the directly sampled points
    let sampled = assert_ok!(sample_boundary(&Wgs84, center, radius, options.segments));
    for (k, point) in part.iter().enumerate() {
        let expected = sampled.points()[(k + 1) % options.segments];
        let normalized = point.normalized();
        assert!((normalized.lat - expected.lat).abs() < 1e-9);
        assert!(lon_diff(normalized.lon, expected.lon) < 1e-9, "{k}");
    }
}

#[test]
fn legacy_preset_matches_unshifted_pipeline() {
    let center = GeoPoint::new(0.0, 179.9);
    let radius = 1_000_000.0;
    let options = Options::legacy();

    let shape = assert_ok!(compute_shape(center, radius, &options));

    let ring = assert_ok!(sample_boundary(&Wgs84, center, radius, options.segments));
    let reference = assert_ok!(Corrector::new(120.0, false).correct(
        &Wgs84,
        &ring,
        center,
        radius,
        &mut Vec::new()
    ));

    assert_eq!(shape, reference);
    assert_eq!(shape.len(), 2);
}

#[test]
fn set_radius_clamps() {
    let center = GeoPoint::new(0.0, 0.0);
    let mut circle = assert_ok!(GreatCircle::new(center, 1000.0, Options::default()));
    assert_eq!(circle.radius(), 1000.0);
    assert_eq!(circle.center(), center);

    assert_ok!(circle.set_radius(2e7));
    assert_eq!(circle.radius(), 1e7);
    assert_eq!(
        circle.warnings().first(),
        Some(&Warning::RadiusClamped {
            requested: 2e7,
            applied: 1e7
        })
    );
}

#[test]
fn set_center_recomputes() {
    let mut circle = assert_ok!(GreatCircle::new(
        GeoPoint::new(0.0, 179.5),
        500_000.0,
        Options::legacy()
    ));
    assert_eq!(circle.shape().len(), 2);

    let shape = assert_ok!(circle.set_center(GeoPoint::new(0.0, 0.0))).clone();
    assert_eq!(shape.len(), 1);
    assert_eq!(circle.center(), GeoPoint::new(0.0, 0.0));
    assert_eq!(circle.radius(), 500_000.0);

    let direct = assert_ok!(compute_shape(
        GeoPoint::new(0.0, 0.0),
        500_000.0,
        &Options::legacy()
    ));
    assert_eq!(shape, direct);
}

/// WGS84 destinations, with the pole distance pinned to a fixed value
struct PinnedPoleDistance(f64);

impl Geodesy for PinnedPoleDistance {
    fn destination(
        &self,
        origin: GeoPoint,
        distance_meters: f64,
        bearing_degrees: f64,
    ) -> great_circle::Result<GeoPoint> {
        Wgs84.destination(origin, distance_meters, bearing_degrees)
    }

    fn distance(&self, _: GeoPoint, _: GeoPoint) -> great_circle::Result<f64> {
        Ok(self.0)
    }
}

#[test]
fn pole_at_exact_radius_takes_the_antimeridian_branch() {
    let center = GeoPoint::new(90.0, 0.0);
    let radius = 1_000_000.0;
    let options = Options::default();

    let tie = assert_ok!(compute_shape_with(
        &PinnedPoleDistance(radius),
        center,
        radius,
        &options,
        &mut Vec::new()
    ));
    assert_eq!(tie.len(), 2);
    assert!(find_pole_seam(&tie, 90.0, -180.0, 180.0).is_none());

    let inside = assert_ok!(compute_shape_with(
        &PinnedPoleDistance(radius - 1e-6),
        center,
        radius,
        &options,
        &mut Vec::new()
    ));
    assert_eq!(inside.len(), 1);
    assert!(find_pole_seam(&inside, 90.0, -180.0, 180.0).is_some());
}

#[test]
fn too_many_crossings_are_reported() {
    let options = Options::default()
        .with_segments(3)
        .with_longitude_delta_wrap_cutoff(10.0);
    let mut warnings = Vec::new();

    let shape = assert_ok!(compute_shape_with(
        &Wgs84,
        GeoPoint::new(0.0, 0.0),
        5_000_000.0,
        &options,
        &mut warnings
    ));

    assert!(shape.len() <= 2);
    assert_eq!(warnings, vec![Warning::ExcessCrossings { count: 3 }]);
}

#[test]
fn errors() {
    let options = Options::default();

    let result = compute_shape(GeoPoint::new(0.0, 0.0), -1.0, &options);
    assert_matches!(result, Err(Error::InvalidRadius { .. }));

    let result = compute_shape(GeoPoint::new(0.0, 0.0), 1.0, &options.clone().with_segments(2));
    assert_matches!(result, Err(Error::InvalidSegmentCount { segments: 2 }));

    let result = compute_shape(GeoPoint::new(0.0, 181.0), 1.0, &options);
    assert_matches!(result, Err(Error::InvalidGeometry { .. }));

    let result = GreatCircle::new(GeoPoint::new(f64::NAN, 0.0), 1.0, options);
    assert_matches!(result, Err(Error::InvalidGeometry { .. }));
}
