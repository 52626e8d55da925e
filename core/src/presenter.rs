use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Coords, Workout};

/// Rå feltverdier slik de står i skjemaet. Tolkning til tall skjer i
/// kontrolleren – alt som ikke er et tall skal feile valideringen der,
/// ikke her.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub kind: String, // "running" | "cycling"
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation_gain: String,
}

/// Presentasjonssamarbeidspartneren: kartwidget, skjema og liste.
/// Kjernen kaller bare disse – ingen DOM/kart-tilgang i kontrolleren.
pub trait Presenter {
    fn show_map(&mut self, center: Coords, zoom: f64);
    fn show_form(&mut self);
    /// Skjuler skjemaet og nullstiller feltene.
    fn hide_form(&mut self);
    fn read_form_fields(&self) -> FormFields;
    fn render_marker(&mut self, workout: &Workout);
    fn render_list_entry(&mut self, workout: &Workout);
    fn recenter(&mut self, center: Coords, zoom: f64);
    /// Blokkerende melding til brukeren.
    fn alert(&mut self, message: &str);
}

/// Alt en RecordingPresenter har sett, i kallrekkefølge der det betyr noe.
#[derive(Debug, Clone, Default)]
pub struct PresenterLog {
    pub map_shown: Option<(Coords, f64)>,
    pub form_open: bool,
    pub form_resets: u32,
    pub markers: Vec<String>,      // økt-id
    pub list_entries: Vec<String>, // økt-id
    pub recenters: Vec<(Coords, f64)>,
    pub alerts: Vec<String>,
}

/// Registrerende presenter for tester og headless kjøring. Delte handles
/// (Rc) gjør at testen kan fylle skjemafelt og lese loggen etter at
/// kontrolleren har tatt eierskap.
#[derive(Default)]
pub struct RecordingPresenter {
    fields: Rc<RefCell<FormFields>>,
    log: Rc<RefCell<PresenterLog>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handles(&self) -> (Rc<RefCell<FormFields>>, Rc<RefCell<PresenterLog>>) {
        (Rc::clone(&self.fields), Rc::clone(&self.log))
    }
}

impl Presenter for RecordingPresenter {
    fn show_map(&mut self, center: Coords, zoom: f64) {
        self.log.borrow_mut().map_shown = Some((center, zoom));
    }

    fn show_form(&mut self) {
        self.log.borrow_mut().form_open = true;
    }

    fn hide_form(&mut self) {
        let mut log = self.log.borrow_mut();
        log.form_open = false;
        log.form_resets += 1;
        *self.fields.borrow_mut() = FormFields::default();
    }

    fn read_form_fields(&self) -> FormFields {
        self.fields.borrow().clone()
    }

    fn render_marker(&mut self, workout: &Workout) {
        self.log.borrow_mut().markers.push(workout.id.clone());
    }

    fn render_list_entry(&mut self, workout: &Workout) {
        self.log.borrow_mut().list_entries.push(workout.id.clone());
    }

    fn recenter(&mut self, center: Coords, zoom: f64) {
        self.log.borrow_mut().recenters.push((center, zoom));
    }

    fn alert(&mut self, message: &str) {
        self.log.borrow_mut().alerts.push(message.to_string());
    }
}
