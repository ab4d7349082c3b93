//! Input operation - reading model descriptions.

use std::{
    io::{self, Read},
    path::Path,
};

use eyre::{Context, Result};

/// A model description and the name it is reported under.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub content: String,
}

/// Read `path`, or standard input when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(path) if path != Path::new("-") => {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read '{}'", path.display()))?;
            Ok(Input {
                name: path.display().to_string(),
                content,
            })
        }
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .wrap_err("Failed to read model from stdin")?;
            Ok(Input {
                name: "<stdin>".to_string(),
                content,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pet.txt");
        std::fs::write(&path, "Pet { id(integer) }").unwrap();

        let input = read_input(Some(&path)).unwrap();

        assert_eq!(input.content, "Pet { id(integer) }");
        assert_eq!(input.name, path.display().to_string());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_input(Some(&dir.path().join("missing.txt"))).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
