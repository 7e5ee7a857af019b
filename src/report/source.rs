use std::{fs, path::PathBuf};

use tracing::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// The sample program analysed when no file is given.
pub const SAMPLE: &str = "int main() {\r\n    int x, a = 2, b = 3, c = 5;\r\n    x = a + b * c;\r\n    printf(\"The value of x is %d\", x);\r\n    return 0;\r\n}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

/// Supplier of the text handed to the tokenizer.
///
/// Failures surface here, before any scanning takes place.
pub trait SourceProvider {
    fn provide(&self) -> Result<Source, Error>;
}

pub struct SampleSource;

impl SourceProvider for SampleSource {
    fn provide(&self) -> Result<Source, Error> {
        Ok(Source {
            name: String::from("<sample>"),
            text: String::from(SAMPLE),
        })
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl SourceProvider for FileSource {
    fn provide(&self) -> Result<Source, Error> {
        let bytes = fs::read(&self.path).map_err(|err| {
            Error::new(
                ErrorImpl::FileRead {
                    path: self.path.display().to_string(),
                    message: err.to_string(),
                },
                Position::null(),
            )
        })?;

        // Bytes that are not UTF-8 (Latin-1 comments, say) become U+FFFD so
        // the rest of the file still gets scanned.
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %self.path.display(), "source is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        debug!(path = %self.path.display(), bytes = text.len(), "read source file");

        Ok(Source {
            name: self.path.display().to_string(),
            text,
        })
    }
}

/// Picks the provider for a run: an explicit file wins, then the built-in
/// sample. Asking for neither is an error.
pub fn select_source(file: Option<PathBuf>, sample: bool) -> Result<Box<dyn SourceProvider>, Error> {
    match (file, sample) {
        (Some(path), _) => Ok(Box::new(FileSource::new(path))),
        (None, true) => Ok(Box::new(SampleSource)),
        (None, false) => Err(Error::new(ErrorImpl::NoInputSelected, Position::null())),
    }
}
