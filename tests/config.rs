use std::fs;

use solar_round_trip::config::{
    BodyConfig, ConfigError, MissionParameters, load_or_default, load_parameters,
};
use solar_round_trip::constants::GM_SUN_AU3_YR2;
use solar_round_trip::transfer::parameters::{bodies, build_timeline, options_from_parameters};
use solar_round_trip::transfer::DeparturePolicy;

#[test]
fn defaults_describe_earth_and_mars() {
    let params = MissionParameters::default();
    params.validate().expect("defaults validate");
    assert_eq!(params.origin, BodyConfig::earth());
    assert_eq!(params.destination.radius_au, 1.524);
    assert_eq!(params.destination.initial_phase_deg, 44.4);
    assert_eq!(params.window.step_years, 1e-4);
    assert_eq!(params.window.tolerance_deg, 0.1);
    assert_eq!(params.window.fallback_wait_years, None);
    assert_eq!(params.solver.max_iterations, 50);

    let (earth, mars) = bodies(&params);
    assert_eq!(earth.angular_velocity_deg, 360.0);
    // Kepler's third law: 360 / 1.524^1.5
    assert!((mars.angular_velocity_deg - 191.348).abs() < 1e-3);
}

#[test]
fn toml_config_matches_defaults() {
    let params = load_parameters("configs/mission.toml").expect("toml config");
    assert_eq!(params, MissionParameters::default());
    assert!((params.gravitational_parameter_au3_yr2 - GM_SUN_AU3_YR2).abs() < 1e-12);
}

#[test]
fn yaml_config_uses_classic_period() {
    let params = load_parameters("configs/mission.yaml").expect("yaml config");
    assert_eq!(params.destination.name, "Mars");
    let omega = params
        .destination
        .angular_velocity_deg_per_year
        .expect("explicit omega");
    assert!((omega - 360.0 / 1.88).abs() < 1e-9);
    let timeline = build_timeline(&params).expect("timeline");
    assert!((timeline.t_departure() - 1.9532).abs() < 5e-4);
}

#[test]
fn missing_path_falls_back_to_defaults() {
    let params = load_or_default(None::<&str>).expect("defaults");
    assert_eq!(params, MissionParameters::default());
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.toml");
    fs::write(
        &path,
        "[window]\nhorizon_years = 6.0\nfallback_wait_years = 1.2\n",
    )
    .expect("write");
    let params = load_parameters(&path).expect("partial config");
    assert_eq!(params.window.horizon_years, 6.0);
    assert_eq!(params.window.step_years, 1e-4);
    assert_eq!(params.destination, BodyConfig::mars());
    assert_eq!(
        options_from_parameters(&params).policy,
        DeparturePolicy::FallbackWait { wait_years: 1.2 }
    );
}

#[test]
fn destination_phase_alone_overrides_mars() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("phase.toml");
    fs::write(&path, "[destination]\ninitial_phase_deg = 10.0\n").expect("write");
    let params = load_parameters(&path).expect("phase-only config");
    assert_eq!(
        params.destination,
        BodyConfig {
            initial_phase_deg: 10.0,
            ..BodyConfig::mars()
        }
    );
    assert_eq!(params.origin, BodyConfig::earth());
}

#[test]
fn new_radius_rederives_mean_motion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("origin.yaml");
    fs::write(&path, "origin:\n  radius_au: 0.723\n  name: Venus\n").expect("write");
    let params = load_parameters(&path).expect("yaml config");
    assert_eq!(params.origin.name, "Venus");
    assert_eq!(params.origin.angular_velocity_deg_per_year, None);
    let (venus, _) = bodies(&params);
    // 360 / 0.723^1.5
    assert!((venus.angular_velocity_deg - 585.59).abs() < 0.01);
}

#[test]
fn yaml_is_read_for_other_extensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("venus.yml");
    fs::write(
        &path,
        "destination:\n  name: Venus\n  radius_au: 0.723\n  initial_phase_deg: 10.0\nsampling:\n  frames: 50\n",
    )
    .expect("write");
    let params = load_parameters(&path).expect("yaml config");
    assert_eq!(params.destination.name, "Venus");
    assert_eq!(params.sampling.frames, 50);
    assert_eq!(params.origin, BodyConfig::earth());
}

#[test]
fn invalid_values_are_rejected() {
    let mut params = MissionParameters::default();
    params.destination.radius_au = 1.0;
    assert!(matches!(params.validate(), Err(ConfigError::Invalid(_))));

    let mut params = MissionParameters::default();
    params.window.step_years = 0.0;
    assert!(matches!(params.validate(), Err(ConfigError::Invalid(_))));

    let mut params = MissionParameters::default();
    params.window.fallback_wait_years = Some(-0.5);
    assert!(matches!(params.validate(), Err(ConfigError::Invalid(_))));

    let mut params = MissionParameters::default();
    params.solver.max_iterations = 0;
    assert!(matches!(params.validate(), Err(ConfigError::Invalid(_))));

    let mut params = MissionParameters::default();
    params.sampling.frames = 1;
    assert!(matches!(params.validate(), Err(ConfigError::Invalid(_))));

    let mut params = MissionParameters::default();
    params.origin.initial_phase_deg = f64::NAN;
    assert!(matches!(params.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn load_errors_are_typed() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        load_parameters(dir.path().join("missing.toml")),
        Err(ConfigError::Io(_))
    ));

    let bad_toml = dir.path().join("bad.toml");
    fs::write(&bad_toml, "[window\nstep_years = ").expect("write");
    assert!(matches!(load_parameters(&bad_toml), Err(ConfigError::Toml(_))));

    let bad_yaml = dir.path().join("bad.yaml");
    fs::write(&bad_yaml, "window: [1, 2").expect("write");
    assert!(matches!(load_parameters(&bad_yaml), Err(ConfigError::Parse(_))));

    let invalid = dir.path().join("invalid.toml");
    fs::write(&invalid, "[window]\ntolerance_deg = -1.0\n").expect("write");
    assert!(matches!(load_parameters(&invalid), Err(ConfigError::Invalid(_))));
}
