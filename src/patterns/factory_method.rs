//! Factory Method: a creator defers the choice of concrete entity to its implementors.
//!
//! # Examples
//!
//! ```
//! use aircraft_patterns::patterns::factory_method::{client_code, HelicopterCreator};
//!
//! let transcript = client_code(&HelicopterCreator);
//! assert_eq!(transcript[0], "Initialize Helicopter parameters.");
//! ```

/// Kinematic state shared by every entity. All fields start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightState {
    pub air_speed: i32,
    pub ground_speed: i32,
    pub altitude: i32,
    pub heading: i32,
    pub ground_track: i32,
}

/// Operations every concrete entity provides.
pub trait Entity {
    fn operation(&self) -> String;
    fn init_entity(&self) -> String;
    fn update_entity(&self) -> String;
    fn flight_state(&self) -> FlightState;
}

#[derive(Debug, Default)]
pub struct AirplaneEntity {
    state: FlightState,
}

impl Entity for AirplaneEntity {
    fn operation(&self) -> String {
        "{Airplane Entity has been created.}".to_string()
    }

    fn init_entity(&self) -> String {
        "Initialize Airplane parameters.".to_string()
    }

    fn update_entity(&self) -> String {
        "Logic for updating Airplane parameters.".to_string()
    }

    fn flight_state(&self) -> FlightState {
        self.state
    }
}

#[derive(Debug, Default)]
pub struct HelicopterEntity {
    state: FlightState,
}

impl Entity for HelicopterEntity {
    fn operation(&self) -> String {
        "{Helicopter Entity has been created.}".to_string()
    }

    fn init_entity(&self) -> String {
        "Initialize Helicopter parameters.".to_string()
    }

    fn update_entity(&self) -> String {
        "Logic for updating Helicopter parameters.".to_string()
    }

    fn flight_state(&self) -> FlightState {
        self.state
    }
}

/// Declares the factory method.
///
/// The creator's own logic (`some_operation`) only sees `dyn Entity`, so
/// implementors change its behaviour by returning a different entity.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Entity>;

    fn some_operation(&self) -> String {
        let entity = self.factory_method();
        format!(
            "Creator: the same creator's code has just worked with {}",
            entity.operation()
        )
    }
}

pub struct AirplaneCreator;

impl Creator for AirplaneCreator {
    fn factory_method(&self) -> Box<dyn Entity> {
        Box::new(AirplaneEntity::default())
    }
}

pub struct HelicopterCreator;

impl Creator for HelicopterCreator {
    fn factory_method(&self) -> Box<dyn Entity> {
        Box::new(HelicopterEntity::default())
    }
}

/// Works with any creator through the trait: build an entity, then initialize and update it.
pub fn client_code(creator: &dyn Creator) -> Vec<String> {
    let entity = creator.factory_method();
    vec![entity.init_entity(), entity.update_entity()]
}
