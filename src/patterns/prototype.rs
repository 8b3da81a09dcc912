//! Prototype: new aircraft are cloned from registered prototypes instead of
//! being built from their concrete types.
//!
//! # Examples
//!
//! ```
//! use aircraft_patterns::patterns::prototype::{AircraftFactory, AircraftType};
//!
//! let factory = AircraftFactory::new();
//! let cargo = factory.create_aircraft(AircraftType::Cargo).unwrap();
//! assert_eq!(cargo.fly(350.0), "Boeing 777F flying at speed: 350 knots.");
//! ```

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftType {
    Commercial,
    Cargo,
    Helicopter,
    Drone,
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AircraftType::Commercial => "commercial",
            AircraftType::Cargo => "cargo",
            AircraftType::Helicopter => "helicopter",
            AircraftType::Drone => "drone",
        };
        f.write_str(name)
    }
}

/// An aircraft that can produce a copy of itself behind the trait.
pub trait Aircraft: Send + Sync {
    fn clone_box(&self) -> Box<dyn Aircraft>;
    fn model(&self) -> &str;
    /// Maximum speed in knots.
    fn max_speed(&self) -> f32;

    fn fly(&self, speed: f32) -> String {
        format!("{} flying at speed: {} knots.", self.model(), speed)
    }
}

impl Clone for Box<dyn Aircraft> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl fmt::Debug for dyn Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aircraft")
            .field("model", &self.model())
            .field("max_speed", &self.max_speed())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommercialAircraft {
    model: String,
    max_speed: f32,
}

impl CommercialAircraft {
    pub fn new(model: impl Into<String>, max_speed: f32) -> Self {
        Self {
            model: model.into(),
            max_speed,
        }
    }
}

impl Aircraft for CommercialAircraft {
    fn clone_box(&self) -> Box<dyn Aircraft> {
        Box::new(self.clone())
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_speed(&self) -> f32 {
        self.max_speed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CargoAircraft {
    model: String,
    max_speed: f32,
}

impl CargoAircraft {
    pub fn new(model: impl Into<String>, max_speed: f32) -> Self {
        Self {
            model: model.into(),
            max_speed,
        }
    }
}

impl Aircraft for CargoAircraft {
    fn clone_box(&self) -> Box<dyn Aircraft> {
        Box::new(self.clone())
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_speed(&self) -> f32 {
        self.max_speed
    }
}

/// Holds one prototype per aircraft type and hands out clones of it.
#[derive(Debug)]
pub struct AircraftFactory {
    prototypes: HashMap<AircraftType, Box<dyn Aircraft>>,
}

impl AircraftFactory {
    /// Seeded with a commercial and a cargo prototype.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register_prototype(
            AircraftType::Commercial,
            Box::new(CommercialAircraft::new("Boeing 747", 570.0)),
        );
        factory.register_prototype(
            AircraftType::Cargo,
            Box::new(CargoAircraft::new("Boeing 777F", 560.0)),
        );
        factory
    }

    pub fn empty() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Register (or replace) the prototype for `kind`.
    pub fn register_prototype(&mut self, kind: AircraftType, prototype: Box<dyn Aircraft>) {
        debug!(%kind, model = prototype.model(), "registering prototype");
        self.prototypes.insert(kind, prototype);
    }

    /// Clone the prototype registered for `kind`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPrototype`] if nothing is registered for `kind`.
    pub fn create_aircraft(&self, kind: AircraftType) -> Result<Box<dyn Aircraft>> {
        self.prototypes
            .get(&kind)
            .map(|prototype| prototype.clone_box())
            .ok_or(Error::UnknownPrototype(kind))
    }
}

impl Default for AircraftFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn client_code(factory: &AircraftFactory) -> Result<Vec<String>> {
    let mut lines = vec!["Creating commercial aircraft".to_string()];
    lines.push(factory.create_aircraft(AircraftType::Commercial)?.fly(500.0));

    lines.push("Creating cargo aircraft".to_string());
    lines.push(factory.create_aircraft(AircraftType::Cargo)?.fly(350.0));

    Ok(lines)
}
