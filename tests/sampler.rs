use solar_round_trip::transfer::mission::sampler::frame_time;
use solar_round_trip::transfer::parameters::build_timeline;
use solar_round_trip::transfer::{FrameSampler, PhaseKind};
use solar_round_trip::vector::distance;

#[test]
fn frames_span_launch_to_return() {
    let params = solar_round_trip::config::MissionParameters::default();
    let timeline = build_timeline(&params).expect("timeline");
    let sampler = timeline.sample(200);
    assert_eq!(sampler.len(), 200);

    let samples: Vec<_> = sampler.collect::<Result<_, _>>().expect("samples");
    assert_eq!(samples.len(), 200);
    assert_eq!(samples[0].t, 0.0);
    assert_eq!(samples[0].phase, PhaseKind::Outbound);
    assert_eq!(samples[199].t, timeline.t_return());
    assert_eq!(samples[199].phase, PhaseKind::Return);

    for pair in samples.windows(2) {
        assert!(pair[1].t > pair[0].t);
        assert_eq!(pair[1].index, pair[0].index + 1);
    }
    // phases appear in mission order
    let mut seen = Vec::new();
    for sample in &samples {
        if seen.last() != Some(&sample.phase) {
            seen.push(sample.phase);
        }
    }
    assert_eq!(
        seen,
        [PhaseKind::Outbound, PhaseKind::Waiting, PhaseKind::Return]
    );
}

#[test]
fn samples_agree_with_direct_queries() {
    let params = solar_round_trip::config::MissionParameters::default();
    let timeline = build_timeline(&params).expect("timeline");
    for sample in FrameSampler::new(&timeline, 0.5, 4.0, 17) {
        let sample = sample.expect("sample");
        assert_eq!(sample.spacecraft, timeline.position_at(sample.t).unwrap());
        assert_eq!(sample.origin, timeline.origin_position_at(sample.t));
        assert_eq!(sample.destination, timeline.destination_position_at(sample.t));
        if sample.phase == PhaseKind::Waiting {
            assert!(distance(&sample.spacecraft, &sample.destination) < 1e-15);
        }
    }
}

#[test]
fn frame_time_edges() {
    assert_eq!(frame_time(0.0, 2.0, 1, 0), 0.0);
    assert_eq!(frame_time(0.0, 2.0, 5, 0), 0.0);
    assert_eq!(frame_time(0.0, 2.0, 5, 2), 1.0);
    assert_eq!(frame_time(0.1, 2.7, 7, 6), 2.7);
}

#[test]
fn sampler_is_exhausted_after_last_frame() {
    let params = solar_round_trip::config::MissionParameters::default();
    let timeline = build_timeline(&params).expect("timeline");
    let mut sampler = timeline.sample(3);
    assert!(sampler.next().is_some());
    assert_eq!(sampler.len(), 2);
    assert!(sampler.next().is_some());
    assert!(sampler.next().is_some());
    assert!(sampler.next().is_none());
    assert_eq!(sampler.len(), 0);
}
