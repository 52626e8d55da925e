use crate::metrics::derived_metric;
use crate::models::WorkoutKind;
use crate::render::list_title;
use crate::store::WorkoutStore;

/// Tekstrapport over loggede økter – for terminalbruk og feilsøking.
pub fn workout_report(store: &WorkoutStore) -> String {
    let mut out = String::from("--- Workout Report ---\n");

    for workout in store.all() {
        let unit = match workout.kind {
            WorkoutKind::Running { .. } => "min/km",
            WorkoutKind::Cycling { .. } => "km/h",
        };
        out.push_str(&format!(
            "{} | {} km | {} min | {:.1} {}\n",
            list_title(workout),
            workout.distance_km,
            workout.duration_min,
            derived_metric(workout),
            unit
        ));
    }

    let total_km: f64 = store.all().iter().map(|w| w.distance_km).sum();
    out.push_str(&format!("Totalt: {} økter, {:.1} km\n", store.len(), total_km));
    out
}

pub fn print_workout_report(store: &WorkoutStore) {
    print!("{}", workout_report(store));
}
