use chrono::Datelike;

use crate::metrics::derived_metric;
use crate::models::{Workout, WorkoutKind};

// prettier-ignore i kildeappen; samme rekkefølge her
pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn kind_label(workout: &Workout) -> &'static str {
    match workout.kind {
        WorkoutKind::Running { .. } => "Running",
        WorkoutKind::Cycling { .. } => "Cycling",
    }
}

fn kind_emoji(workout: &Workout) -> &'static str {
    match workout.kind {
        WorkoutKind::Running { .. } => "🏃‍♂️",
        WorkoutKind::Cycling { .. } => "🚴‍♀️",
    }
}

fn month_day(workout: &Workout) -> String {
    let month = MONTHS[workout.date.month0() as usize];
    format!("{} {}", month, workout.date.day())
}

/// Overskrift i listen: "Running on June 5".
pub fn list_title(workout: &Workout) -> String {
    format!("{} on {}", kind_label(workout), month_day(workout))
}

/// Popup-tekst på markøren: samme som tittelen, med emoji foran.
pub fn popup_label(workout: &Workout) -> String {
    format!("{} {}", kind_emoji(workout), list_title(workout))
}

/// CSS-klassen popupen skal ha: "running-popup" / "cycling-popup".
pub fn popup_class(workout: &Workout) -> String {
    format!("{}-popup", workout.kind.type_name())
}

/// (ikon, verdi, enhet) – én rad i listeoppføringen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Radene i en listeoppføring: distanse, varighet, avledet nøkkeltall
/// (én desimal) og typefeltet. Enheter per økttype.
pub fn detail_rows(workout: &Workout) -> [DetailRow; 4] {
    let (metric_unit, type_row) = match workout.kind {
        WorkoutKind::Running { cadence_spm } => (
            "min/km",
            DetailRow {
                icon: "🦶🏼",
                value: format!("{cadence_spm}"),
                unit: "spm",
            },
        ),
        WorkoutKind::Cycling { elevation_gain_m } => (
            "km/h",
            DetailRow {
                icon: "⛰",
                value: format!("{elevation_gain_m}"),
                unit: "m",
            },
        ),
    };

    [
        DetailRow {
            icon: kind_emoji(workout),
            value: format!("{}", workout.distance_km),
            unit: "km",
        },
        DetailRow {
            icon: "⏱",
            value: format!("{}", workout.duration_min),
            unit: "min",
        },
        DetailRow {
            icon: "⚡️",
            value: format!("{:.1}", derived_metric(workout)),
            unit: metric_unit,
        },
        type_row,
    ]
}
