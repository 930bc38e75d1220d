use anyhow::Result;
use clap::{Arg, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use lattice_cli::job::{load_job, run_job, JobConfig};
use lattice_matrix::IdentityMatrix;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LATTICE_LOG", "error,lattice=info"))
        .init();

    let matches = Command::new("lattice")
        .version(clap::crate_version!())
        .about("Matrix algebra on a linked lattice of nodes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("eval")
                .about("Evaluate a JSON job file and print the resulting matrix")
                .arg(
                    Arg::new("job")
                        .help("Path to the job file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("identity")
                .about("Print an identity matrix of the given size")
                .arg(
                    Arg::new("size")
                        .help("Number of rows and columns")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(Command::new("template").about("Print a sample job file"))
        .get_matches();

    match matches.subcommand() {
        Some(("eval", sub)) => {
            let path = sub
                .get_one::<PathBuf>("job")
                .ok_or_else(|| anyhow::anyhow!("missing job path"))?;
            let job = load_job(path)?;
            let result = run_job(&job)?;
            println!("{}", result);
        }
        Some(("identity", sub)) => {
            let size = *sub
                .get_one::<usize>("size")
                .ok_or_else(|| anyhow::anyhow!("missing size"))?;
            let identity: IdentityMatrix<f64> = IdentityMatrix::new(size);
            println!("{}", identity);
        }
        Some(("template", _)) => {
            println!("{}", serde_json::to_string_pretty(&JobConfig::template())?);
        }
        _ => unreachable!("subcommand_required is set"),
    }
    Ok(())
}
