use crate::file_reader::FileReaderError;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("error loading settings: `{0}`")]
    Load(#[from] FileReaderError),

    #[error("invalid settings file: `{0}`")]
    InvalidYaml(#[from] serde_yaml::Error),
}
