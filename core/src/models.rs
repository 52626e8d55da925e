use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Posisjon valgt i kartet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64, // grader
    pub lng: f64, // grader
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Øktvariant med det typespesifikke feltet.
/// Lukket sett på to varianter – avledet nøkkeltall beregnes i metrics.rs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running { cadence_spm: f64 },      // steg/min
    Cycling { elevation_gain_m: f64 }, // meter
}

impl WorkoutKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running { .. } => "running",
            WorkoutKind::Cycling { .. } => "cycling",
        }
    }
}

/// En logget økt. Feltene settes ved konstruksjon og endres ikke siden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub date: DateTime<Utc>,
    pub coords: Coords,
    pub distance_km: f64,  // km
    pub duration_min: f64, // min
    #[serde(flatten)]
    pub kind: WorkoutKind,
}

impl Workout {
    /// Ny økt stemplet med nå-tidspunkt. Id avledes av tidsstempelet.
    pub fn new(coords: Coords, distance_km: f64, duration_min: f64, kind: WorkoutKind) -> Self {
        Self::with_date(Utc::now(), coords, distance_km, duration_min, kind)
    }

    /// Deterministisk variant – brukes av tester og ved innlasting fra arkiv.
    pub fn with_date(
        date: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        kind: WorkoutKind,
    ) -> Self {
        Self {
            id: id_from_date(&date),
            date,
            coords,
            distance_km,
            duration_min,
            kind,
        }
    }
}

/// Id = de siste 10 sifrene av ms-tidsstempelet, null-utfylt.
/// Unik per instans i en sesjon, ikke globalt (tidsavledet, ikke tilfeldig).
pub fn id_from_date(date: &DateTime<Utc>) -> String {
    let ms = date.timestamp_millis();
    format!("{:010}", ms.rem_euclid(10_000_000_000))
}
