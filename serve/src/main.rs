use anyhow::Result;
use clap::Arg;
use clap::ArgAction;
use clap::Command;

mod server;

use server::ServeConfig;
use server::build_server;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        eprintln!("❌ {}", err);

        // Print all errors in the chain
        for (i, cause) in err.chain().enumerate().skip(1) {
            eprintln!("  {}: {}", i, cause);
        }

        std::process::exit(1);
    } else {
        Ok(())
    }
}

async fn run() -> Result<()> {
    let matches = cli().get_matches();
    let config = ServeConfig::from_parts(
        matches
            .get_one::<String>("port")
            .cloned()
            .or_else(|| std::env::var("PORT").ok()),
        matches
            .get_one::<String>("dist")
            .cloned()
            .or_else(|| std::env::var("DIST_DIR").ok()),
    )?;

    let app = build_server(&config.dist);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    log::info!(
        "serving {} on port {}",
        config.dist.display(),
        config.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn cli() -> Command {
    Command::new("diagnostix-serve")
        .version("0.1.0")
        .about("Serve the DiagnostiX web bundle")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("port")
                .action(ArgAction::Set)
                .help("Port to listen on, defaults to $PORT or 8080"),
        )
        .arg(
            Arg::new("dist")
                .short('d')
                .long("dist")
                .value_name("path")
                .action(ArgAction::Set)
                .help("Directory holding the built bundle, defaults to $DIST_DIR or ./dist"),
        )
}
