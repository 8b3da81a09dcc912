//! Creational patterns tour for aircraft-patterns.
//!
//! Demonstrates:
//! - Factory Method with airplane and helicopter creators
//! - Abstract Factory families (heavy, medium, light)
//! - Prototype cloning, including a prototype registered at runtime
//! - Builder with and without a director
//!
//! Run with: `cargo run --example creational_tour`

use aircraft_patterns::patterns::abstract_factory::{
    self, AbstractFactory, HeavyEntityFactory, LightEntityFactory, MediumEntityFactory,
};
use aircraft_patterns::patterns::builder;
use aircraft_patterns::patterns::factory_method::{self, AirplaneCreator, HelicopterCreator};
use aircraft_patterns::patterns::prototype::{
    self, AircraftFactory, AircraftType, CommercialAircraft,
};

fn print_section(title: &str, lines: &[String]) {
    println!("{title}");
    for line in lines {
        println!("   {line}");
    }
    println!();
}

fn main() -> Result<(), aircraft_patterns::Error> {
    println!("=== aircraft-patterns: Creational Tour ===\n");

    // -------------------------------------------------------------------------
    // 1. Factory Method
    // -------------------------------------------------------------------------
    print_section(
        "1. Factory Method (airplane creator):",
        &factory_method::client_code(&AirplaneCreator),
    );
    print_section(
        "   Factory Method (helicopter creator):",
        &factory_method::client_code(&HelicopterCreator),
    );

    // -------------------------------------------------------------------------
    // 2. Abstract Factory
    // -------------------------------------------------------------------------
    let factories: [&dyn AbstractFactory; 3] =
        [&HeavyEntityFactory, &MediumEntityFactory, &LightEntityFactory];
    for factory in factories {
        print_section("2. Abstract Factory family:", &abstract_factory::client_code(factory));
    }

    // -------------------------------------------------------------------------
    // 3. Prototype
    // -------------------------------------------------------------------------
    let mut aircraft_factory = AircraftFactory::new();
    print_section("3. Prototype:", &prototype::client_code(&aircraft_factory)?);

    if let Err(err) = aircraft_factory.create_aircraft(AircraftType::Drone) {
        println!("   Expected error: {err}\n");
    }

    aircraft_factory.register_prototype(
        AircraftType::Drone,
        Box::new(CommercialAircraft::new("MQ-9", 240.0)),
    );
    let drone = aircraft_factory.create_aircraft(AircraftType::Drone)?;
    println!("   {}\n", drone.fly(180.0));

    // -------------------------------------------------------------------------
    // 4. Builder
    // -------------------------------------------------------------------------
    print_section("4. Builder:", &builder::client_code());

    Ok(())
}
