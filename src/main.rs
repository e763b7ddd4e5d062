use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "graphql-resource")]
#[command(version = "0.1.0")]
#[command(about = "Serve CRUD GraphQL fields generated from resources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo GraphQL server backed by an in-memory book resource
    Serve {
        /// Config file path
        #[arg(long, default_value = "graphql-resource.toml")]
        config: String,

        /// Server port (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the SDL of the demo schema
    Sdl {
        /// Config file path
        #[arg(long, default_value = "graphql-resource.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port } => {
            cli::serve::run(config, port).await?;
        }
        Commands::Sdl { config } => {
            cli::sdl::run(config)?;
        }
    }

    Ok(())
}
