//! Command-line client for a running cep-proxy server
//!
//! The terminal counterpart of the lookup web page: look up a CEP, or
//! print the table of everything the server has cached, sorted locally
//! by whichever single field the user picked.

use anyhow::Result;
use clap::{Parser, Subcommand};

use cep_proxy::cep::Cep;
use cep_proxy::client::{self, ApiClient};
use cep_proxy::models::{SortDirection, SortField};

#[derive(Parser)]
#[command(name = "cep-cli")]
#[command(version)]
#[command(about = "Consulta de CEP against a cep-proxy server")]
struct Cli {
    /// Base URL of the cep-proxy server
    #[arg(short, long, default_value = "http://localhost:5000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the address for a CEP
    Lookup {
        /// The CEP to resolve, with or without the hyphen
        cep: String,
    },
    /// List every CEP the server has cached
    List {
        /// Field to sort by
        #[arg(long, value_enum, default_value = "localidade")]
        sort: SortField,

        /// Sort direction
        #[arg(long, value_enum, default_value = "asc")]
        order: SortDirection,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.server);

    match cli.command {
        Commands::Lookup { cep } => {
            // Validate locally before bothering the server, like the web
            // form did.
            if Cep::parse(&cep).is_err() {
                eprintln!("Por favor, insira um CEP válido com 8 dígitos.");
                std::process::exit(1);
            }

            match api.lookup(&cep).await {
                Ok(record) => {
                    println!("Endereço Encontrado:");
                    println!("CEP:        {}", record.cep);
                    println!("Logradouro: {}", record.street);
                    println!("Bairro:     {}", record.neighborhood);
                    println!("Cidade:     {}", record.city);
                    println!("Estado:     {}", record.state);
                }
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        Commands::List { sort, order } => {
            let mut records = api.list().await?;
            client::sort_records(&mut records, sort, order);
            print!("{}", client::render_table(&records));
        }
    }

    Ok(())
}
