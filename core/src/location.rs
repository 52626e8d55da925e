use crate::models::Coords;

/// Engangsforespørsel etter posisjon. Løses nøyaktig én gang:
/// Some ved suksess, None når posisjon ikke kan skaffes. Ingen retry,
/// ingen timeout, ingen abonnering.
pub trait LocationProvider {
    fn current_position(&self) -> Option<Coords>;
}

/// Fast posisjon – for tester og miljøer uten stedtjeneste.
pub struct FixedLocation {
    position: Option<Coords>,
}

impl FixedLocation {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            position: Some(Coords::new(lat, lng)),
        }
    }

    /// Simulerer avslått/utilgjengelig stedtjeneste.
    pub fn unavailable() -> Self {
        Self { position: None }
    }
}

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> Option<Coords> {
        self.position
    }
}
