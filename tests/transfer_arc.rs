use solar_round_trip::constants::GM_SUN_AU3_YR2;
use solar_round_trip::impulsive::{ArcError, HohmannGeometry, TransferArc, TransferLeg};
use solar_round_trip::orbits::{KeplerSolver, OrbitalBody};
use solar_round_trip::vector::{distance, norm};

const R_EARTH: f64 = 1.0;
const R_MARS: f64 = 1.524;

fn earth_mars() -> HohmannGeometry {
    HohmannGeometry::between(R_EARTH, R_MARS, GM_SUN_AU3_YR2).expect("geometry")
}

#[test]
fn hohmann_ellipse_parameters() {
    let geometry = earth_mars();
    assert!((geometry.semi_major_axis_au - 1.262).abs() < 1e-12);
    assert!((geometry.eccentricity - 0.207_606_973).abs() < 1e-8);
    assert!((geometry.period_years - 1.417_715_32).abs() < 1e-6);
    assert!((geometry.time_of_flight_years - 0.708_857_66).abs() < 1e-6);
    assert!((geometry.periapsis_radius() - R_EARTH).abs() < 1e-12);
    assert!((geometry.apoapsis_radius() - R_MARS).abs() < 1e-12);
    assert_eq!(geometry.leg, TransferLeg::Raising);
}

#[test]
fn reverse_transfer_shares_ellipse_and_lowers() {
    let out = earth_mars();
    let back = HohmannGeometry::between(R_MARS, R_EARTH, GM_SUN_AU3_YR2).expect("geometry");
    assert_eq!(back.leg, TransferLeg::Lowering);
    assert!((out.semi_major_axis_au - back.semi_major_axis_au).abs() < 1e-15);
    assert!((out.time_of_flight_years - back.time_of_flight_years).abs() < 1e-15);
    assert_eq!(back.orientation_for_departure(200.0), 20.0);
    assert_eq!(out.orientation_for_departure(-30.0), 330.0);
}

#[test]
fn one_au_circle_has_one_year_period() {
    let earth = OrbitalBody::keplerian(1.0, GM_SUN_AU3_YR2, 0.0);
    assert!((earth.period() - 1.0).abs() < 1e-12);
    assert!((earth.angular_velocity_deg - 360.0).abs() < 1e-9);
}

#[test]
fn outbound_arc_hits_apsides() {
    let geometry = earth_mars();
    let arc = geometry.arc_from(0.0, 0.0).expect("arc");
    let solver = KeplerSolver::default();

    let start = arc.position_at(0.0, &solver).unwrap().expect("start");
    assert!(distance(&start, &[1.0, 0.0, 0.0]) < 1e-12);

    let end = arc.position_at(arc.t_end(), &solver).unwrap().expect("end");
    assert!((norm(&end) - R_MARS).abs() < 1e-6);
    assert!(distance(&end, &[-R_MARS, 0.0, 0.0]) < 1e-6);

    let r_start = arc.radius_at(0.0, &solver).unwrap().unwrap();
    let r_end = arc.radius_at(arc.t_end(), &solver).unwrap().unwrap();
    assert!((r_start - arc.periapsis_radius()).abs() < 1e-6);
    assert!((r_end - arc.apoapsis_radius()).abs() < 1e-6);
}

#[test]
fn raising_radius_grows_monotonically() {
    let arc = earth_mars().arc_from(0.0, 90.0).expect("arc");
    let solver = KeplerSolver::default();
    let mut previous = 0.0;
    for k in 0..=50 {
        let t = arc.duration() * k as f64 / 50.0;
        let r = arc.radius_at(t, &solver).unwrap().unwrap();
        assert!(r >= previous - 1e-12, "radius dipped at t = {t}");
        assert!(r >= R_EARTH - 1e-9 && r <= R_MARS + 1e-9);
        previous = r;
    }
}

#[test]
fn lowering_arc_starts_at_apoapsis_and_lands_opposite() {
    let back = HohmannGeometry::between(R_MARS, R_EARTH, GM_SUN_AU3_YR2).expect("geometry");
    let t0 = 2.0;
    let arc = back.arc_from(t0, 180.0).expect("arc");
    assert_eq!(arc.orientation_deg(), 0.0);
    let solver = KeplerSolver::default();

    let start = arc.position_at(t0, &solver).unwrap().expect("start");
    assert!(distance(&start, &[-R_MARS, 0.0, 0.0]) < 1e-9);
    let end = arc.position_at(arc.t_end(), &solver).unwrap().expect("end");
    assert!(distance(&end, &[R_EARTH, 0.0, 0.0]) < 1e-6);
}

#[test]
fn outside_interval_yields_none() {
    let arc = earth_mars().arc(1.0, 0.0).expect("arc");
    let solver = KeplerSolver::default();
    assert_eq!(arc.position_at(0.999, &solver).unwrap(), None);
    assert_eq!(arc.position_at(arc.t_end() + 1e-9, &solver).unwrap(), None);
    assert_eq!(arc.radius_at(5.0, &solver).unwrap(), None);
    assert_eq!(arc.progress(0.5), None);
    assert_eq!(arc.progress(1.0), Some(0.0));
}

#[test]
fn invalid_arcs_are_rejected() {
    assert!(matches!(
        TransferArc::new(1.262, 0.0, 1.4, 0.0, 0.7, 0.0, TransferLeg::Raising),
        Err(ArcError::InvalidEccentricity(_))
    ));
    assert!(matches!(
        TransferArc::new(1.262, 1.0, 1.4, 0.0, 0.7, 0.0, TransferLeg::Raising),
        Err(ArcError::InvalidEccentricity(_))
    ));
    assert!(matches!(
        TransferArc::new(1.262, 0.2, 1.4, 0.7, 0.7, 0.0, TransferLeg::Raising),
        Err(ArcError::InvalidInterval { .. })
    ));
    assert!(matches!(
        TransferArc::new(-1.0, 0.2, 1.4, 0.0, 0.7, 0.0, TransferLeg::Raising),
        Err(ArcError::InvalidParameter { .. })
    ));
    assert!(matches!(
        TransferArc::new(1.262, 0.2, 1.4, 0.0, 0.7, f64::NAN, TransferLeg::Raising),
        Err(ArcError::InvalidParameter { .. })
    ));
    assert!(matches!(
        HohmannGeometry::between(1.0, 1.0, GM_SUN_AU3_YR2),
        Err(ArcError::DegenerateTransfer { .. })
    ));
    assert!(matches!(
        HohmannGeometry::between(0.0, 1.524, GM_SUN_AU3_YR2),
        Err(ArcError::InvalidParameter { .. })
    ));
}

#[test]
fn lead_angle_for_mars() {
    let geometry = earth_mars();
    let mars = OrbitalBody::keplerian(R_MARS, GM_SUN_AU3_YR2, 0.0);
    let lead = geometry.lead_angle_deg(mars.angular_velocity_deg);
    assert!((lead - 44.361).abs() < 1e-3, "lead = {lead}");
}
