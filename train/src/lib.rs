use ::std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::Path,
};
use langdet::{Profile, ProfilesStorage, ProfilesStorageError};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Training files extension, the file stem is the language name
pub const TEXT_EXTENSION: &str = "txt";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of profiles
    Json,
    /// Brotli compressed EnCom
    Encom,
}

/// Analyzes every `<name>.txt` file of the directory into a profile named `<name>`.
///
/// Profiles are sorted by name.
pub fn train_dir(inp_path: &Path) -> Result<ProfilesStorage, ProfilesStorageError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(inp_path)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == TEXT_EXTENSION) {
            files.push(path);
        }
    }
    files.sort_unstable();

    let profiles = files
        .into_par_iter()
        .map(|path| -> Result<Profile, ProfilesStorageError> {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid file name"))?
                .to_owned();
            let text = fs::read_to_string(&path)?;
            tracing::info!("*{name}* Analyzing {} bytes", text.len());

            Ok(Profile::analyze(&text, name))
        })
        .collect::<Result<Vec<_>, ProfilesStorageError>>()?;

    Ok(ProfilesStorage::from_profiles(profiles))
}

pub fn write_storage(
    storage: &ProfilesStorage,
    out_path: &Path,
    format: OutputFormat,
) -> Result<(), ProfilesStorageError> {
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    match format {
        OutputFormat::Json => storage.to_json_writer(BufWriter::new(File::create(out_path)?)),
        OutputFormat::Encom => storage.write_compressed(out_path),
    }
}
