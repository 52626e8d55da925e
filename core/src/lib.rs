pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod location;
pub mod metrics;
pub mod models;
pub mod presenter;
pub mod render;
pub mod storage;
pub mod store;

pub use config::{load_config, AppConfig};
pub use controller::{App, EntryState};
pub use error::AppError;
pub use location::{FixedLocation, LocationProvider};
pub use models::{Coords, Workout, WorkoutKind};
pub use presenter::{FormFields, Presenter, PresenterLog, RecordingPresenter};
pub use storage::{load_workouts, save_workouts, JsonFileArchive, WorkoutArchive};
pub use store::WorkoutStore;
