// core/src/storage.rs
use std::error::Error;
use std::path::Path;

use crate::models::Workout;

/// Leser arkiverte økter fra disk (JSON).
/// Finnes ikke filen, returneres en tom liste.
pub fn load_workouts(path: &str) -> Result<Vec<Workout>, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        // serde_path_to_error slik at et ødelagt arkiv peker på feltet som røk
        let deserializer = &mut serde_json::Deserializer::from_str(&contents);
        let workouts: Vec<Workout> = serde_path_to_error::deserialize(deserializer)?;
        println!("📂 {} økter lastet fra {}", workouts.len(), path);
        Ok(workouts)
    } else {
        println!("⚠️ Fant ikke arkiv på {}, starter tomt", path);
        Ok(Vec::new())
    }
}

/// Lagrer øktene til disk som JSON (pretty-print).
/// Avledede nøkkeltall lagres ikke – de beregnes på nytt ved innlasting.
pub fn save_workouts(workouts: &[Workout], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(workouts)?;
    std::fs::write(path, json)?;
    println!("✅ {} økter lagret til {}", workouts.len(), path);
    Ok(())
}

/// Pluggbart arkiv. Kontrolleren kjører uten (None) som standard –
/// det tilsvarer sesjonsbasert drift uten varig lagring.
pub trait WorkoutArchive {
    fn load(&self) -> Result<Vec<Workout>, Box<dyn Error>>;
    fn save(&mut self, workouts: &[Workout]) -> Result<(), Box<dyn Error>>;
}

/// JSON-fil på disk, hele lageret skrives per lagring.
pub struct JsonFileArchive {
    path: String,
}

impl JsonFileArchive {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl WorkoutArchive for JsonFileArchive {
    fn load(&self) -> Result<Vec<Workout>, Box<dyn Error>> {
        load_workouts(&self.path)
    }

    fn save(&mut self, workouts: &[Workout]) -> Result<(), Box<dyn Error>> {
        save_workouts(workouts, &self.path)
    }
}
