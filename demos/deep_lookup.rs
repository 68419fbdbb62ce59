//! Reading nested configuration with deep paths.
//!
//! Run with: cargo run --example deep_lookup

use parameter_bag::{params, ParameterBag, PathMode, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = ParameterBag::try_from(params!({
        "server": {
            "host": "edge-01.local",
            "port": "8080/tcp",
            "replicas": ["10.0.0.1", "10.0.0.2"]
        },
        "workers": 4
    }))?;

    println!("Config: {}\n", Value::Object(config.all().clone()));

    // Shallow mode treats brackets as part of the key
    let shallow = config.lookup("server[host]", PathMode::Shallow)?;
    println!("Shallow 'server[host]': {:?}", shallow);

    let host = config.lookup("server[host]", PathMode::Deep)?;
    println!("Deep 'server[host]': {:?}", host);

    let port = config.get_int("server[port]", 80, PathMode::Deep)?;
    println!("Port as integer: {}", port);

    let replica = config.lookup("server[replicas][1]", PathMode::Deep)?;
    println!("Second replica: {:?}", replica);

    let fallback = Value::from("none");
    let missing = config.lookup_or("server[tls][cert]", &fallback, PathMode::Deep)?;
    println!("Missing path falls back to: {}\n", missing);

    match config.lookup("server[host", PathMode::Deep) {
        Ok(value) => println!("Unexpected value: {:?}", value),
        Err(err) => println!("Malformed path rejected: {}", err),
    }

    Ok(())
}
