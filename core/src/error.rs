use thiserror::Error;

/// Feilene kontrolleren kan melde. Ingen av dem er fatale – kontrolleren
/// håndterer brukervarsling selv og går tilbake til hendelsesløkken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Stedtjenesten svarte med feil; kartet forblir deaktivert.
    #[error("location can not be accessed!")]
    LocationUnavailable,

    /// Skjemaverdier som ikke er positive tall.
    #[error("data should be positive number")]
    InvalidInput,

    /// Listeklikk mot en id som ikke finnes i lageret. Stilt overfor
    /// brukeren er dette et no-op; den som embedder kjernen får den her.
    #[error("no workout with id {0}")]
    LookupMiss(String),
}
