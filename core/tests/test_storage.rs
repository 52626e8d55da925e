use std::fs;

use chrono::{TimeZone, Utc};
use traillog_core::metrics::derived_metric;
use traillog_core::{
    load_config, load_workouts, save_workouts, App, AppConfig, Coords, FixedLocation,
    FormFields, JsonFileArchive, RecordingPresenter, Workout, WorkoutKind,
};

#[test]
fn test_save_and_load_workouts() {
    let path = "tests/tmp_workouts.json";
    let _ = fs::remove_file(path);

    // to dummy-økter, en av hver type
    let run = Workout::with_date(
        Utc.with_ymd_and_hms(2024, 6, 5, 7, 30, 0).unwrap(),
        Coords::new(10.0, 20.0),
        5.0,
        30.0,
        WorkoutKind::Running { cadence_spm: 150.0 },
    );
    let ride = Workout::with_date(
        Utc.with_ymd_and_hms(2024, 6, 6, 18, 0, 0).unwrap(),
        Coords::new(10.0, 20.0),
        20.0,
        60.0,
        WorkoutKind::Cycling { elevation_gain_m: 300.0 },
    );

    // lagre til disk
    save_workouts(&[run.clone(), ride.clone()], path).expect("kunne ikke lagre arkiv");

    // les tilbake
    let loaded = load_workouts(path).expect("kunne ikke laste arkiv");
    assert_eq!(loaded, vec![run, ride]);

    // nøkkeltall er ikke i filen og beregnes på nytt etter innlasting
    assert_eq!(derived_metric(&loaded[0]), 6.0);
    assert_eq!(derived_metric(&loaded[1]), 20.0);

    // rydde opp
    fs::remove_file(path).ok();
}

#[test]
fn missing_archive_loads_empty() {
    let loaded = load_workouts("tests/finnes_ikke.json").expect("manglende fil er ikke feil");
    assert!(loaded.is_empty());
}

#[test]
fn broken_archive_is_an_error() {
    let path = "tests/tmp_broken_archive.json";
    fs::write(path, r#"[{"id": "0000012345", "date": 12}]"#).unwrap();

    let result = load_workouts(path);
    assert!(result.is_err());

    fs::remove_file(path).ok();
}

#[test]
fn archive_plugged_into_the_controller_survives_restart() {
    let path = "tests/tmp_controller_archive.json";
    let _ = fs::remove_file(path);

    // første kjøring: logg en økt
    {
        let presenter = RecordingPresenter::new();
        let (fields, _log) = presenter.handles();
        let mut app = App::new(
            Box::new(presenter),
            Box::new(FixedLocation::at(59.91, 10.75)),
            AppConfig::default(),
        )
        .with_archive(Box::new(JsonFileArchive::new(path)));

        app.bootstrap().unwrap();
        app.map_clicked(Coords::new(59.92, 10.80));
        *fields.borrow_mut() = FormFields {
            kind: "running".into(),
            distance: "5".into(),
            duration: "30".into(),
            cadence: "150".into(),
            elevation_gain: String::new(),
        };
        app.form_submitted().unwrap();
    }

    // andre kjøring: samme arkiv, økten skal komme tilbake og rendres
    {
        let presenter = RecordingPresenter::new();
        let (_fields, log) = presenter.handles();
        let mut app = App::new(
            Box::new(presenter),
            Box::new(FixedLocation::at(59.91, 10.75)),
            AppConfig::default(),
        )
        .with_archive(Box::new(JsonFileArchive::new(path)));

        app.bootstrap().unwrap();

        assert_eq!(app.store().len(), 1);
        assert_eq!(app.store().all()[0].distance_km, 5.0);
        let log = log.borrow();
        assert_eq!(log.list_entries.len(), 1);
        assert_eq!(log.markers.len(), 1);
    }

    fs::remove_file(path).ok();
}

#[test]
fn config_defaults_match_the_map_zooms() {
    let cfg = load_config("tests/ingen_konfig.json").expect("manglende konfig er ikke feil");
    assert_eq!(cfg.default_zoom, 15.0);
    assert_eq!(cfg.focus_zoom, 16.0);
    assert!(cfg.archive_path.is_none());
}

#[test]
fn config_reads_overrides_from_disk() {
    let path = "tests/tmp_config.json";
    fs::write(path, r#"{"default_zoom": 12.0, "archive_path": "workouts.json"}"#).unwrap();

    let cfg = load_config(path).expect("kunne ikke laste konfig");
    assert_eq!(cfg.default_zoom, 12.0);
    assert_eq!(cfg.focus_zoom, 16.0); // ikke satt -> default
    assert_eq!(cfg.archive_path.as_deref(), Some("workouts.json"));

    fs::remove_file(path).ok();
}
