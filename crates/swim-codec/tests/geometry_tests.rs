use swim_codec::{Codec, GeometricBoxCodec, ObstacleCodec};
use swim_document as doc;
use swim_model::{Globe, ObstacleShape};
use swim_test_utils::{assert_close, box_obstacle};

const DEGREES: f64 = 1e-6;
const METRES: f64 = 1e-3;

fn unit_box() -> doc::GeometricBox {
    doc::GeometricBox {
        south_west: doc::Location::new(0.0, 0.0),
        north_east: doc::Location::new(1.0, 1.0),
        bottom: 0.0,
        top: 1000.0,
    }
}

#[test]
fn test_geometric_box_corners_survive_projection() {
    for globe in [Globe::earth(), Globe::spherical_earth()] {
        let codec = GeometricBoxCodec::new(&globe);
        let bounds = codec.decode(&unit_box()).unwrap();
        assert!(bounds.r_length() > 100_000.0);
        assert!(bounds.t_length() > 0.0);

        let encoded = codec.encode(&bounds).unwrap();
        assert_close(encoded.south_west.latitude, 0.0, DEGREES);
        assert_close(encoded.south_west.longitude, 0.0, DEGREES);
        assert_close(encoded.north_east.latitude, 1.0, DEGREES);
        assert_close(encoded.north_east.longitude, 1.0, DEGREES);
        assert_close(encoded.bottom, 0.0, METRES);
        assert_close(encoded.top, 1000.0, METRES);
    }
}

#[test]
fn test_asymmetric_and_wide_boxes_survive_projection() {
    let boxes = [
        ((0.0, 0.0), (40.0, 1.0), (0.0, 100.0)),
        ((-60.0, -170.0), (60.0, 170.0), (0.0, 10_000.0)),
    ];
    for globe in [Globe::earth(), Globe::spherical_earth()] {
        let codec = GeometricBoxCodec::new(&globe);
        for (south_west, north_east, (bottom, top)) in boxes {
            let node = doc::GeometricBox {
                south_west: doc::Location::new(south_west.0, south_west.1),
                north_east: doc::Location::new(north_east.0, north_east.1),
                bottom,
                top,
            };
            let bounds = codec.decode(&node).unwrap();
            assert!(bounds.r_length() > 0.0);
            assert!(bounds.s_length() > 0.0);
            assert!(bounds.t_length() > top - bottom - METRES);

            let encoded = codec.encode(&bounds).unwrap();
            assert_close(encoded.south_west.latitude, south_west.0, DEGREES);
            assert_close(encoded.south_west.longitude, south_west.1, DEGREES);
            assert_close(encoded.north_east.latitude, north_east.0, DEGREES);
            assert_close(encoded.north_east.longitude, north_east.1, DEGREES);
            assert_close(encoded.bottom, bottom, METRES);
            assert_close(encoded.top, top, METRES);
        }
    }
}

#[test]
fn test_geometric_box_is_globe_specific() {
    let earth = Globe::earth();
    let sphere = Globe::spherical_earth();
    let on_earth = GeometricBoxCodec::new(&earth).decode(&unit_box()).unwrap();
    let on_sphere = GeometricBoxCodec::new(&sphere).decode(&unit_box()).unwrap();
    assert_ne!(on_earth.origin(), on_sphere.origin());
}

#[test]
fn test_box_obstacle_roundtrip() {
    let node = box_obstacle();
    let obstacle = ObstacleCodec.decode(&node).unwrap();

    let ObstacleShape::Box(airspace) = &obstacle.shape else {
        panic!("expected box, got {}", obstacle.shape.name());
    };
    assert_eq!(airspace.widths(), (500.0, 500.0));
    assert_eq!(airspace.altitudes(), (0.0, 200.0));
    let reference = obstacle.reference_position();
    assert_close(reference.longitude.degrees(), 0.5, DEGREES);
    assert_close(reference.altitude, 0.0, METRES);

    assert_eq!(ObstacleCodec.encode(&obstacle).unwrap(), node);
}
