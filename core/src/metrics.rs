use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

use crate::models::{Workout, WorkoutKind};

/// Pace (min/km) = varighet / distanse.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Fart (km/t) = distanse / (varighet/60).
pub fn speed_kmh(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Avledet nøkkeltall for en økt: pace for løping, fart for sykling.
/// Ren funksjon – samme input gir samme verdi ved gjentatt kall.
/// Distanse/varighet ≤ 0 gir inf/NaN, ikke panikk; valideringen i
/// kontrolleren stopper slike verdier før de når hit.
pub fn derived_metric(workout: &Workout) -> f64 {
    match workout.kind {
        WorkoutKind::Running { .. } => {
            pace_min_per_km(workout.distance_km, workout.duration_min)
        }
        WorkoutKind::Cycling { .. } => speed_kmh(workout.distance_km, workout.duration_min),
    }
}

/// Tellere for kontrollerhendelser. Egen Registry per instans, slik at
/// tester kan telle isolert.
pub struct Metrics {
    registry: Registry,
    workouts_logged: IntCounterVec,
    input_rejected: IntCounter,
    lookup_miss: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let workouts_logged = IntCounterVec::new(
            Opts::new("workouts_logged_total", "Antall loggede økter per type"),
            &["type"],
        )
        .unwrap();
        let input_rejected = IntCounter::new(
            "input_rejected_total",
            "Antall skjemainnsendinger avvist av valideringen",
        )
        .unwrap();
        let lookup_miss = IntCounter::new(
            "store_lookup_miss_total",
            "Antall listeklikk mot id som ikke finnes i lageret",
        )
        .unwrap();

        registry.register(Box::new(workouts_logged.clone())).unwrap();
        registry.register(Box::new(input_rejected.clone())).unwrap();
        registry.register(Box::new(lookup_miss.clone())).unwrap();

        Self {
            registry,
            workouts_logged,
            input_rejected,
            lookup_miss,
        }
    }

    /// For skraping/eksport hos den som embedder kjernen.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

/// Prosessglobal tellerinstans – standardvalget for App::new.
pub fn global_metrics() -> &'static Metrics {
    &GLOBAL_METRICS
}

pub fn workouts_logged_total(metrics: &Metrics, kind: &WorkoutKind) -> IntCounter {
    metrics
        .workouts_logged
        .with_label_values(&[kind.type_name()])
}

pub fn input_rejected_total(metrics: &Metrics) -> &IntCounter {
    &metrics.input_rejected
}

pub fn store_lookup_miss_total(metrics: &Metrics) -> &IntCounter {
    &metrics.lookup_miss
}
