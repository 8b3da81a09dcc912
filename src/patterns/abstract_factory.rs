//! Abstract Factory: each factory produces a matching airplane/helicopter pair.
//!
//! Entities of one variant (heavy, medium, light) are meant to work together;
//! the client only ever sees the traits, so any factory can be swapped in.

pub trait Airplane {
    fn useful_function(&self) -> String;
}

pub trait Helicopter {
    fn useful_function(&self) -> String;

    /// Collaborate with an airplane. Correct only with the same variant, but
    /// any airplane is accepted.
    fn another_useful_function(&self, collaborator: &dyn Airplane) -> String {
        collaborator.useful_function()
    }
}

/// Declares one constructor per entity in the family.
pub trait AbstractFactory {
    fn create_airplane(&self) -> Box<dyn Airplane>;
    fn create_helicopter(&self) -> Box<dyn Helicopter>;
}

macro_rules! variant {
    ($airplane:ident, $helicopter:ident, $factory:ident, $label:literal) => {
        pub struct $airplane;

        impl Airplane for $airplane {
            fn useful_function(&self) -> String {
                concat!("The result of the entity ", $label, " Airplane.").to_string()
            }
        }

        pub struct $helicopter;

        impl Helicopter for $helicopter {
            fn useful_function(&self) -> String {
                concat!("The result of the entity ", $label, " Helicopter.").to_string()
            }
        }

        pub struct $factory;

        impl AbstractFactory for $factory {
            fn create_airplane(&self) -> Box<dyn Airplane> {
                Box::new($airplane)
            }

            fn create_helicopter(&self) -> Box<dyn Helicopter> {
                Box::new($helicopter)
            }
        }
    };
}

variant!(HeavyAirplane, HeavyHelicopter, HeavyEntityFactory, "Heavy");
variant!(MediumAirplane, MediumHelicopter, MediumEntityFactory, "Medium");
variant!(LightAirplane, LightHelicopter, LightEntityFactory, "Light");

/// Build one of each entity and let the helicopter work with the airplane.
pub fn client_code(factory: &dyn AbstractFactory) -> Vec<String> {
    let airplane = factory.create_airplane();
    let helicopter = factory.create_helicopter();

    vec![
        helicopter.useful_function(),
        helicopter.another_useful_function(airplane.as_ref()),
    ]
}
