// core/src/controller.rs
use log::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::location::LocationProvider;
use crate::metrics::{
    global_metrics, input_rejected_total, store_lookup_miss_total, workouts_logged_total, Metrics,
};
use crate::models::{Coords, Workout, WorkoutKind};
use crate::presenter::{FormFields, Presenter};
use crate::storage::WorkoutArchive;
use crate::store::WorkoutStore;

/// Tilstand for påbegynt innlegging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryState {
    /// Ingen ventende posisjon; skjemaet er skjult.
    Idle,
    /// Kartklikk har valgt en posisjon; skjemaet står åpent til
    /// innsendingen går gjennom.
    AwaitingInput { pending: Coords },
}

/// Kontrolleren: én metode per ytre hendelse, alt på én logisk tråd.
/// All rendering delegeres til presenteren; lageret muteres bare her.
pub struct App<'m> {
    presenter: Box<dyn Presenter>,
    location: Box<dyn LocationProvider>,
    archive: Option<Box<dyn WorkoutArchive>>,
    store: WorkoutStore,
    state: EntryState,
    map_ready: bool,
    config: AppConfig,
    metrics: &'m Metrics,
}

impl<'m> App<'m> {
    pub fn new(
        presenter: Box<dyn Presenter>,
        location: Box<dyn LocationProvider>,
        config: AppConfig,
    ) -> App<'static> {
        App::with_metrics(presenter, location, config, global_metrics())
    }

    /// Egen tellerinstans – for tester som vil telle isolert.
    pub fn with_metrics(
        presenter: Box<dyn Presenter>,
        location: Box<dyn LocationProvider>,
        config: AppConfig,
        metrics: &'m Metrics,
    ) -> App<'m> {
        App {
            presenter,
            location,
            archive: None,
            store: WorkoutStore::new(),
            state: EntryState::Idle,
            map_ready: false,
            config,
            metrics,
        }
    }

    /// Kobler på et arkiv. Uten dette kallet kjører kjernen rent i minnet.
    pub fn with_archive(mut self, archive: Box<dyn WorkoutArchive>) -> Self {
        self.archive = Some(archive);
        self
    }

    /// Oppstart: hent eventuelt arkiv, be om posisjon, vis kartet.
    /// Uten posisjon forblir kartet deaktivert – ingen automatisk retry.
    pub fn bootstrap(&mut self) -> Result<(), AppError> {
        if let Some(archive) = &self.archive {
            match archive.load() {
                Ok(saved) => {
                    for workout in saved {
                        let stored = self.store.push(workout);
                        self.presenter.render_list_entry(stored);
                    }
                }
                Err(e) => warn!("kunne ikke laste arkivet: {e}"),
            }
        }

        match self.location.current_position() {
            Some(coords) => {
                self.presenter.show_map(coords, self.config.default_zoom);
                self.map_ready = true;
                // Markører for innlastede økter kan først tegnes nå.
                for workout in self.store.all() {
                    self.presenter.render_marker(workout);
                }
                info!(
                    "kart oppe på ({:.4}, {:.4}), {} økter fra arkiv",
                    coords.lat,
                    coords.lng,
                    self.store.len()
                );
                Ok(())
            }
            None => {
                warn!("posisjon utilgjengelig, kartet forblir av");
                self.presenter.alert("location can not be accessed!");
                Err(AppError::LocationUnavailable)
            }
        }
    }

    /// Kartklikk: hold posisjonen og åpne skjemaet.
    pub fn map_clicked(&mut self, coords: Coords) {
        if !self.map_ready {
            return;
        }
        debug!("kartklikk ({:.4}, {:.4})", coords.lat, coords.lng);
        self.state = EntryState::AwaitingInput { pending: coords };
        self.presenter.show_form();
    }

    /// Skjemainnsending: les råfelt, valider, bygg økt, lagre og render.
    /// Avvist innsending lar skjemaet stå åpent med posisjonen i behold.
    pub fn form_submitted(&mut self) -> Result<(), AppError> {
        let pending = match self.state {
            EntryState::AwaitingInput { pending } => pending,
            // Innsending uten kartklikk har ingen posisjon å knytte økten til.
            EntryState::Idle => {
                debug!("innsending uten ventende posisjon ignorert");
                return Ok(());
            }
        };

        let fields = self.presenter.read_form_fields();
        let workout = match build_workout(pending, &fields) {
            Some(w) => w,
            None => {
                input_rejected_total(self.metrics).inc();
                warn!("avvist innlegging: {fields:?}");
                self.presenter.alert("data should be positive number");
                return Err(AppError::InvalidInput);
            }
        };

        workouts_logged_total(self.metrics, &workout.kind).inc();
        info!("ny økt {} ({})", workout.id, workout.kind.type_name());

        let stored = self.store.push(workout);
        self.presenter.hide_form();
        self.presenter.render_marker(stored);
        self.presenter.render_list_entry(stored);
        self.state = EntryState::Idle;

        if let Some(archive) = &mut self.archive {
            if let Err(e) = archive.save(self.store.all()) {
                warn!("kunne ikke lagre arkivet: {e}");
            }
        }
        Ok(())
    }

    /// Klikk i listen: finn økten og re-sentrer kartet på den.
    /// Ukjent id er et stille no-op mot brukeren.
    pub fn list_entry_clicked(&mut self, id: &str) -> Result<(), AppError> {
        match self.store.find_by_id(id) {
            Some(workout) => {
                self.presenter.recenter(workout.coords, self.config.focus_zoom);
                Ok(())
            }
            None => {
                store_lookup_miss_total(self.metrics).inc();
                warn!("listeklikk mot ukjent økt-id {id}");
                Err(AppError::LookupMiss(id.to_string()))
            }
        }
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn state(&self) -> EntryState {
        self.state
    }
}

/// Tolk et råfelt: alt som ikke er et tall blir NaN og feiler
/// valideringen under.
pub fn parse_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Valideringsregelen, nøyaktig: d > 0 OG u > 0 OG typeverdi > 0.
/// NaN feiler alle tre – ingen egen "ikke et tall"-sti.
pub fn is_valid_entry(distance: f64, duration: f64, type_value: f64) -> bool {
    distance > 0.0 && duration > 0.0 && type_value > 0.0
}

fn build_workout(coords: Coords, fields: &FormFields) -> Option<Workout> {
    let distance = parse_field(&fields.distance);
    let duration = parse_field(&fields.duration);

    let kind = match fields.kind.as_str() {
        "running" => {
            let cadence = parse_field(&fields.cadence);
            if !is_valid_entry(distance, duration, cadence) {
                return None;
            }
            WorkoutKind::Running { cadence_spm: cadence }
        }
        "cycling" => {
            let elevation = parse_field(&fields.elevation_gain);
            if !is_valid_entry(distance, duration, elevation) {
                return None;
            }
            WorkoutKind::Cycling {
                elevation_gain_m: elevation,
            }
        }
        // Skjemaet har bare to typer; alt annet avvises som ugyldig input.
        _ => return None,
    };

    Some(Workout::new(coords, distance, duration, kind))
}
