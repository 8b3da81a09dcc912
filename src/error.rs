use thiserror::Error;

use crate::patterns::prototype::AircraftType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Singleton has not been initialized")]
    NotInitialized,

    #[error("No prototype registered for aircraft type: {0}")]
    UnknownPrototype(AircraftType),
}

pub type Result<T> = std::result::Result<T, Error>;
