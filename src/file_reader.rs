use std::fs::read_to_string;
use std::io::Error as ioError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileReaderError {
    #[error("error reading contents of `{path}`: `{source}`")]
    Read { path: String, source: ioError },
}

pub trait FileReader {
    fn read(&self, path: &Path) -> Result<String, FileReaderError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FSFileReader;

impl FileReader for FSFileReader {
    fn read(&self, path: &Path) -> Result<String, FileReaderError> {
        read_to_string(path).map_err(|source| FileReaderError::Read {
            path: path.display().to_string(),
            source,
        })
    }
}
