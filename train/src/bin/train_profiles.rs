use ::std::path::PathBuf;
use clap::Parser;
use langdet::ProfilesStorageError;
use langdet_train::{train_dir, write_storage, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory of `<language>.txt` training files
    #[arg(short = 'i', required = true)]
    inp: PathBuf,

    /// Output profiles file
    #[arg(short = 'o', required = true)]
    out: PathBuf,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> Result<(), ProfilesStorageError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let storage = train_dir(&args.inp)?;
    if storage.is_empty() {
        tracing::warn!("No training files found in {:?}", args.inp);
    }

    write_storage(&storage, &args.out, args.format)?;
    tracing::info!("{} profiles written to {:?}", storage.len(), args.out);

    Ok(())
}
