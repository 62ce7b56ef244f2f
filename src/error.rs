use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Debug)]
pub struct UsageError {
    msg: String,
}

impl UsageError {
    pub fn new(msg: &str) -> Self {
        UsageError {
            msg: String::from(msg),
        }
    }
}

impl Error for UsageError {
    fn cause(&self) -> Option<&dyn Error> {
        None
    }

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.msg)
    }
}

#[derive(Debug)]
pub struct InputParseError {
    path: PathBuf,
    msg: String,
}

impl InputParseError {
    pub fn for_file(path: &PathBuf, msg: &str) -> Self {
        InputParseError {
            path: PathBuf::from(path),
            msg: String::from(msg),
        }
    }
}

impl Error for InputParseError {
    fn cause(&self) -> Option<&dyn Error> {
        None
    }

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl Display for InputParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error parsing {:?}: {}", &self.path, &self.msg)
    }
}

#[derive(Debug)]
pub struct EncoderError {
    path: PathBuf,
    msg: String,
}

impl EncoderError {
    pub fn for_file(path: &PathBuf, msg: &str) -> Self {
        EncoderError {
            path: PathBuf::from(path),
            msg: String::from(msg),
        }
    }
}

impl Error for EncoderError {
    fn cause(&self) -> Option<&dyn Error> {
        None
    }

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl Display for EncoderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error encoding {:?}: {}", &self.path, &self.msg)
    }
}
