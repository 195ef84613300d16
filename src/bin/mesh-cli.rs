//! Probe CLI for a running mesh.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mesh-cli")]
#[command(about = "Probe CLI for the hello mesh services", long_about = None)]
struct Cli {
    /// Base URL of service A.
    #[arg(long, default_value = "http://127.0.0.1:8081")]
    service_a: String,

    /// Base URL of service B.
    #[arg(long, default_value = "http://127.0.0.1:8082")]
    service_b: String,

    /// Base URL of service C.
    #[arg(long, default_value = "http://127.0.0.1:8083")]
    service_c: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call every greeting endpoint
    Check,
    /// Call a relay endpoint ("b" or "c")
    Relay { service: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Check => {
            for (name, url) in [
                ("service A", format!("{}/api/serviceA/hello", cli.service_a)),
                ("service B", format!("{}/api/serviceB/hello", cli.service_b)),
                ("service C", format!("{}/api/serviceC/hello", cli.service_c)),
            ] {
                let res = client.get(&url).send().await?;
                print_response(name, res).await?;
            }
        }
        Commands::Relay { service } => {
            let url = match service.to_lowercase().as_str() {
                "b" => format!("{}/api/serviceB/call-serviceA", cli.service_b),
                "c" => format!("{}/api/serviceC/call-serviceA", cli.service_c),
                other => {
                    eprintln!("Unknown relay service '{}', expected 'b' or 'c'", other);
                    std::process::exit(2);
                }
            };
            let res = client.get(&url).send().await?;
            print_response(&format!("service {} relay", service), res).await?;
        }
    }

    Ok(())
}

async fn print_response(
    name: &str,
    res: reqwest::Response,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        println!("{}: {}", name, body);
    } else {
        eprintln!("Error: {} returned status {}", name, status);
        eprintln!("Response: {}", body);
    }
    Ok(())
}
