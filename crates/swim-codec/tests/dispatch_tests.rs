use std::sync::Arc;

use swim_codec::{
    Codec, ConversionError, DatalinkCodec, EnvironmentCodec, ObstacleCodec, PlannerCodec, SwimCodec,
};
use swim_document as doc;
use swim_model::{Capability, Datalink, DatalinkKind, Environment, Globe, PlannerAlgorithm};
use swim_test_utils::{
    blocks_for, continuum, cylinder_obstacle, datalink, grid, planner, sphere_obstacle, swim,
};

fn environment() -> (Globe, Arc<Environment>) {
    let globe = Globe::earth();
    let environment = EnvironmentCodec::new(&globe).decode(&continuum()).unwrap();
    (globe, Arc::new(environment))
}

#[test]
fn test_every_planner_roundtrips() {
    let (_, environment) = environment();
    let codec = PlannerCodec::new(None, &environment);
    for algorithm in PlannerAlgorithm::ALL {
        let node = planner(algorithm);
        let decoded = codec.decode(&node).unwrap();
        assert_eq!(decoded.algorithm(), algorithm);
        for capability in Capability::ALL {
            assert_eq!(decoded.has_capability(capability), algorithm.has_capability(capability));
        }
        assert_eq!(codec.encode(&decoded).unwrap(), node, "{algorithm}");
    }
}

#[test]
fn test_heuristic_rrt_properties() {
    let (_, environment) = environment();
    let decoded = PlannerCodec::new(None, &environment)
        .decode(&planner(PlannerAlgorithm::HeuristicRrt))
        .unwrap();
    assert_eq!(decoded.kind.neighbors().map(|n| n.neighbor_limit), Some(15));
    assert_eq!(decoded.kind.sampling().map(|s| s.bias), Some(5));
    assert!(decoded.kind.anytime().is_none());
}

#[test]
fn test_several_planner_slots_are_malformed() {
    let (_, environment) = environment();
    let mut node = planner(PlannerAlgorithm::BasicRrt);
    node.rrtstar = Some(blocks_for(PlannerAlgorithm::RrtStar));
    let err = PlannerCodec::new(None, &environment).decode(&node).unwrap_err();
    assert_eq!(
        err,
        ConversionError::malformed("planner", "multiple alternatives populated: brrt, rrtstar")
    );
}

#[test]
fn test_mavlink_is_unsupported_both_ways() {
    let node = doc::Datalink {
        downlink_period: "PT1S".to_string(),
        mavlink: Some(doc::MavlinkDatalink {
            address: Some("udp:127.0.0.1:14550".to_string()),
        }),
        ..doc::Datalink::default()
    };
    let expected = ConversionError::unsupported("datalink", "mavlink");
    assert_eq!(DatalinkCodec.decode(&node).unwrap_err(), expected);

    let internal = Datalink::new(chrono::Duration::seconds(1), DatalinkKind::Mavlink);
    assert_eq!(DatalinkCodec.encode(&internal).unwrap_err(), expected);
}

#[test]
fn test_dronekit_datalink_roundtrip() {
    let node = doc::Datalink {
        downlink_period: "PT2S".to_string(),
        dronekit: Some(doc::DronekitDatalink {
            host: "127.0.0.1".to_string(),
            port: 5760,
        }),
        ..doc::Datalink::default()
    };
    let decoded = DatalinkCodec.decode(&node).unwrap();
    assert_eq!(decoded.kind.name(), "dronekit");
    assert_eq!(DatalinkCodec.encode(&decoded).unwrap(), node);
}

#[test]
fn test_empty_families_are_unsupported() {
    let globe = Globe::earth();
    assert_eq!(
        EnvironmentCodec::new(&globe).decode(&doc::Environment::default()).unwrap_err(),
        ConversionError::unsupported("environment", "none")
    );
    assert_eq!(
        ObstacleCodec.decode(&doc::ObstacleNode::default()).unwrap_err(),
        ConversionError::unsupported("obstacle", "none")
    );
    assert_eq!(
        DatalinkCodec
            .decode(&doc::Datalink {
                downlink_period: "PT1S".to_string(),
                ..doc::Datalink::default()
            })
            .unwrap_err(),
        ConversionError::unsupported("datalink", "none")
    );
    assert_eq!(
        SwimCodec.decode(&doc::Swim::default()).unwrap_err(),
        ConversionError::unsupported("swim", "none")
    );
}

#[test]
fn test_multiple_alternatives_are_malformed() {
    let globe = Globe::earth();
    let both = doc::Environment {
        grid: grid(4).grid,
        continuum: continuum().continuum,
    };
    assert!(matches!(
        EnvironmentCodec::new(&globe).decode(&both),
        Err(ConversionError::MalformedValue { .. })
    ));

    let obstacle = doc::ObstacleNode {
        cylinder: cylinder_obstacle().cylinder,
        sphere: sphere_obstacle().sphere,
        ..doc::ObstacleNode::default()
    };
    assert_eq!(
        ObstacleCodec.decode(&obstacle).unwrap_err(),
        ConversionError::malformed("obstacle", "multiple alternatives populated: cylinder, sphere")
    );

    let mut link = datalink();
    link.dronekit = Some(doc::DronekitDatalink::default());
    assert!(matches!(DatalinkCodec.decode(&link), Err(ConversionError::MalformedValue { .. })));

    let mut connection = swim();
    connection.live = Some(doc::LiveSwim {
        endpoint: "tcp://swim:61616".to_string(),
    });
    assert!(matches!(SwimCodec.decode(&connection), Err(ConversionError::MalformedValue { .. })));
}

#[test]
fn test_both_obstacle_shapes_decode() {
    for node in [cylinder_obstacle(), sphere_obstacle()] {
        let obstacle = ObstacleCodec.decode(&node).unwrap();
        assert_eq!(ObstacleCodec.encode(&obstacle).unwrap(), node);
    }
}
