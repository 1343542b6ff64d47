use crate::profile::Profile;
use ::std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
    sync::Arc,
};
use brotli::{CompressorWriter, Decompressor};
use compact_str::CompactString;
use thiserror::Error;

/// Training samples of the bundled languages
const BUNDLED_CORPUS: &[(&str, &str)] = &[
    ("arabic", include_str!("../corpus/arabic.txt")),
    ("english", include_str!("../corpus/english.txt")),
    ("french", include_str!("../corpus/french.txt")),
    ("german", include_str!("../corpus/german.txt")),
    ("hebrew", include_str!("../corpus/hebrew.txt")),
    ("italian", include_str!("../corpus/italian.txt")),
    ("russian", include_str!("../corpus/russian.txt")),
    ("spanish", include_str!("../corpus/spanish.txt")),
    ("turkish", include_str!("../corpus/turkish.txt")),
];

/// EnCom map keys are written unquoted, n-grams containing these can't be read back
const ENCOM_RESERVED: &[char] = &[':', '{', '}'];

/// A set of language profiles, used to seed detectors.
///
/// Profiles are reference counted, detectors built from the storage share them.
#[derive(Clone, Debug, Default)]
pub struct ProfilesStorage {
    profiles: Vec<Arc<Profile>>,
}

impl ProfilesStorage {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes the bundled training samples:
    /// arabic, english, french, german, hebrew, italian, russian, spanish, turkish.
    pub fn bundled() -> Self {
        #[cfg(not(target_family = "wasm"))]
        let profiles = {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            BUNDLED_CORPUS
                .par_iter()
                .map(|(name, text)| Arc::new(Profile::analyze(text, *name)))
                .collect()
        };
        #[cfg(target_family = "wasm")]
        let profiles = BUNDLED_CORPUS
            .iter()
            .map(|(name, text)| Arc::new(Profile::analyze(text, *name)))
            .collect();

        Self { profiles }
    }

    pub fn from_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(Arc::new).collect(),
        }
    }

    #[inline]
    pub fn push(&mut self, profile: Profile) {
        self.profiles.push(Arc::new(profile));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Profile>> {
        self.profiles.iter()
    }

    /// First profile with the name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Arc<Profile>> {
        self.profiles.iter().find(|p| p.name() == name)
    }

    fn to_serializable(&self) -> Vec<&Profile> {
        self.profiles.iter().map(|profile| &**profile).collect()
    }

    /// Reads a JSON array of profiles
    pub fn from_json_reader(reader: impl Read) -> Result<Self, ProfilesStorageError> {
        let profiles: Vec<Profile> = serde_json::from_reader(reader)?;
        tracing::debug!("Loaded {} profiles from json", profiles.len());
        Ok(Self::from_profiles(profiles))
    }

    pub fn to_json_writer(&self, writer: impl Write) -> Result<(), ProfilesStorageError> {
        serde_json::to_writer(writer, &self.to_serializable())?;
        Ok(())
    }

    pub fn from_encom(s: &str) -> Result<Self, ProfilesStorageError> {
        let profiles: Vec<Profile> = serde_encom::from_str(s)?;
        Ok(Self::from_profiles(profiles))
    }

    /// Fails if an n-gram contains `:`, `{` or `}`
    pub fn to_encom(&self) -> Result<String, ProfilesStorageError> {
        for profile in &self.profiles {
            if let Some((ngram, _)) = profile
                .ranks()
                .iter()
                .find(|(ngram, _)| ngram.contains(ENCOM_RESERVED))
            {
                return Err(ProfilesStorageError::EncomNgram {
                    profile: profile.name().into(),
                    ngram: ngram.into(),
                });
            }
        }

        Ok(serde_encom::to_string(&self.to_serializable())?)
    }

    /// Reads a brotli compressed EnCom file
    pub fn read_compressed(file_path: &Path) -> Result<Self, ProfilesStorageError> {
        let file = File::open(file_path)?;
        let mut uncompressed_file = Decompressor::new(BufReader::new(file), 4096);
        let mut uncompressed_file_content = String::new();
        uncompressed_file.read_to_string(&mut uncompressed_file_content)?;

        let storage = Self::from_encom(&uncompressed_file_content)?;
        tracing::debug!("Loaded {} profiles from {file_path:?}", storage.len());
        Ok(storage)
    }

    /// Writes a brotli compressed EnCom file
    pub fn write_compressed(&self, file_path: &Path) -> Result<(), ProfilesStorageError> {
        let ser = self.to_encom()?;
        let file = File::create(file_path)?;
        let mut compressed_file = CompressorWriter::new(file, 4096, 11, 22);
        compressed_file.write_all(ser.as_bytes())?;
        compressed_file.flush()?;
        Ok(())
    }
}

impl FromIterator<Profile> for ProfilesStorage {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Profile>>(iter: I) -> Self {
        Self::from_profiles(iter)
    }
}

#[derive(Error, Debug)]
pub enum ProfilesStorageError {
    #[error("Profiles file io error")]
    Io(#[from] io::Error),
    #[error("Profiles json error")]
    Json(#[from] serde_json::Error),
    #[error("Profiles encom error")]
    Encom(#[from] serde_encom::Error),
    #[error("Ngram {ngram:?} of profile {profile} can't be written as encom")]
    EncomNgram {
        profile: CompactString,
        ngram: CompactString,
    },
}
