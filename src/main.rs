use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aircraft_patterns::patterns::{abstract_factory, builder, factory_method, prototype};
use aircraft_patterns::{race, single_winner, LazySingletonRegistry};

#[derive(Parser)]
#[command(
    name = "aircraft-patterns",
    version,
    about = "Creational design patterns over a toy aircraft domain"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Race threads into a lazy singleton and show which candidate won
    Singleton {
        /// Candidate value, one thread per occurrence
        #[arg(long = "candidate", default_values = ["FOO", "BAR"])]
        candidates: Vec<String>,

        /// Delay before each thread acquires, in microseconds
        #[arg(long, default_value_t = 1000)]
        delay_us: u64,
    },
    /// Factory Method with airplane and helicopter creators
    FactoryMethod,
    /// Abstract Factory with heavy, medium and light families
    AbstractFactory,
    /// Prototype cloning of commercial and cargo aircraft
    Prototype,
    /// Builder with a director
    Builder,
    /// Run every demonstration
    All,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aircraft_patterns=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Singleton {
            candidates,
            delay_us,
        } => run_singleton(&candidates, Duration::from_micros(delay_us)),
        Commands::FactoryMethod => run_factory_method(),
        Commands::AbstractFactory => run_abstract_factory(),
        Commands::Prototype => run_prototype()?,
        Commands::Builder => print_lines(builder::client_code()),
        Commands::All => {
            run_singleton(&["FOO", "BAR"], Duration::from_millis(1));
            println!();
            run_factory_method();
            println!();
            run_abstract_factory();
            println!();
            run_prototype()?;
            println!();
            print_lines(builder::client_code());
        }
    }

    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn run_singleton<S: AsRef<str>>(candidates: &[S], delay: Duration) {
    println!("If you see the same value, then singleton was reused (yay!)");
    println!("If you see different values, then 2 singletons were created (booo!!)");
    println!();
    println!("RESULT:");

    let registry = LazySingletonRegistry::new();
    registry.set_trace_callback(|event| info!(%event, "registry"));

    let outcomes = race(&registry, candidates, delay);
    for outcome in &outcomes {
        println!("{}", outcome.observed);
    }

    match single_winner(&outcomes) {
        Some(winner) => info!(winner, racers = outcomes.len(), "singleton reused"),
        None if outcomes.is_empty() => info!("no candidates supplied"),
        None => tracing::error!("racers observed different instances"),
    }
}

fn run_factory_method() {
    println!("App: Launched with the AirplaneCreator.");
    print_lines(factory_method::client_code(&factory_method::AirplaneCreator));
    println!();
    println!("App: Launched with the HelicopterCreator.");
    print_lines(factory_method::client_code(&factory_method::HelicopterCreator));
}

fn run_abstract_factory() {
    let factories: [(&str, &dyn abstract_factory::AbstractFactory); 3] = [
        ("heavy", &abstract_factory::HeavyEntityFactory),
        ("medium", &abstract_factory::MediumEntityFactory),
        ("light", &abstract_factory::LightEntityFactory),
    ];

    for (i, (name, factory)) in factories.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Client: Testing client code with the {name} factory type:");
        print_lines(abstract_factory::client_code(factory));
    }
}

fn run_prototype() -> anyhow::Result<()> {
    let factory = prototype::AircraftFactory::new();
    print_lines(prototype::client_code(&factory)?);
    Ok(())
}
