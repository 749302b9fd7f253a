use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where formula lines are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            Source::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Source::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Sources in command-line order. No files, or `-`, stand for standard input.
pub fn sources(files: &[PathBuf]) -> Vec<Source> {
    if files.is_empty() {
        return vec![Source::Stdin];
    }
    files
        .iter()
        .map(|path| {
            if path == Path::new("-") {
                Source::Stdin
            } else {
                Source::File(path.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_no_files_means_stdin() {
        assert_eq!(sources(&[]), vec![Source::Stdin]);
    }

    #[test]
    fn test_dash_means_stdin() {
        let files = [PathBuf::from("a.txt"), PathBuf::from("-"), PathBuf::from("b.txt")];
        assert_eq!(
            sources(&files),
            vec![
                Source::File(PathBuf::from("a.txt")),
                Source::Stdin,
                Source::File(PathBuf::from("b.txt")),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
        assert_eq!(Source::File(PathBuf::from("dir/f.txt")).to_string(), "dir/f.txt");
    }

    #[test]
    fn test_missing_file() {
        assert!(Source::File(PathBuf::from("/nonexistent/formulas.txt")).open().is_err());
    }
}
