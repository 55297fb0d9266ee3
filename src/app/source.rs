use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use crate::error::InputError;

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Stdin,
}

impl TextSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => TextSource::File(path),
            _ => TextSource::Stdin,
        }
    }

    pub fn name(&self) -> String {
        match self {
            TextSource::File(path) => path.display().to_string(),
            TextSource::Stdin => "<stdin>".to_owned(),
        }
    }

    pub fn load(&self) -> Result<String, InputError> {
        let mut contents = String::new();
        let read = match self {
            TextSource::File(path) => File::open(path).and_then(|mut f| f.read_to_string(&mut contents)),
            TextSource::Stdin => io::stdin().lock().read_to_string(&mut contents),
        };
        read.map_err(|cause| InputError::Unreadable {
            source_name: self.name(),
            cause,
        })?;

        if contents.trim().is_empty() {
            return Err(InputError::Empty);
        }
        log::debug!("[Input] Read #{} byte(s) from {}", contents.len(), self.name());
        Ok(contents)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn dash_means_stdin() {
        assert_eq!(TextSource::from_arg(None), TextSource::Stdin);
        assert_eq!(TextSource::from_arg(Some("-".into())), TextSource::Stdin);
        assert_eq!(
            TextSource::from_arg(Some("book.txt".into())),
            TextSource::File("book.txt".into())
        );
    }

    #[test]
    fn load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "the cat the dog the").unwrap();
        let source = TextSource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), "the cat the dog the");
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = TextSource::File(dir.path().join("missing.txt"));
        assert!(matches!(missing.load(), Err(InputError::Unreadable { .. })));

        let blank = dir.path().join("blank.txt");
        std::fs::write(&blank, " \n\n ").unwrap();
        assert!(matches!(TextSource::File(blank).load(), Err(InputError::Empty)));
    }
}
