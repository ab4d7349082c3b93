use std::path::{Path, PathBuf};

use rosetta_core::{FileRules, GeneratedFile};

use crate::file_name;

/// The `<ClassName>.swift` file holding a generated model
pub struct ModelSwift {
    pub class_name: String,
    pub content: String,
}

impl ModelSwift {
    pub fn new(class_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            content: content.into(),
        }
    }
}

impl GeneratedFile for ModelSwift {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(file_name(&self.class_name))
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use rosetta_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_path() {
        let file = ModelSwift::new("Pet", "");
        assert_eq!(file.path(Path::new("out")), PathBuf::from("out/Pet.swift"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Pet.swift"), "old").unwrap();

        let result = ModelSwift::new("Pet", "new").write(dir.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("Pet.swift")).unwrap(),
            "new"
        );
    }
}
