use std::env;
use std::error::Error;

use fuzzymf::configuration::Configuration;
use fuzzymf::manager::manager::IManager;
use fuzzymf::membership::membershipfunction::MembershipFunction;
use fuzzymf::membership::membershipfunctionkind::MembershipFunctionKind;
use fuzzymf::membership::trapezoid::Trapezoid;
use fuzzymf::membership::triangle::Triangle;

const USAGE: &str = "usage: fuzzymf <config.json> <name> <x>...";

fn print_degrees(name: &str, membership_function: &MembershipFunctionKind, xs: &[f64]) -> Result<(), Box<dyn Error>> {
    println!("{} = {}", name, membership_function);
    for (x, degree) in xs.iter().zip(membership_function.evaluate_all(xs)?) {
        println!("  μ({}) = {}", x, degree);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            let xs = [-1.0, 0.0, 2.5, 5.0, 7.5, 10.0, 12.0];
            print_degrees("triangle", &Triangle::new(0.0, 5.0, 10.0)?.into(), &xs)?;
            print_degrees("trapezoid", &Trapezoid::new(0.0, 4.0, 6.0, 10.0)?.into(), &xs)?;
            print_degrees("cold", &Triangle::new(0.0, 0.0, 10.0)?.into(), &xs)?;
            Ok(())
        }
        [config_path, name, xs @ ..] if !xs.is_empty() => {
            let config = Configuration::from_reader(config_path)?;
            let membership_function = config.membership_function_manager().get(name)?;
            let xs = xs
                .iter()
                .map(|x| x.parse::<f64>())
                .collect::<Result<Vec<f64>, _>>()?;
            print_degrees(name, &membership_function, &xs)
        }
        _ => Err(USAGE.into()),
    }
}
