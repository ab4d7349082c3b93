//! File header comment.

use rosetta_codegen::{CodeFragment, Renderable};

/// The comment block identifying a generated file.
///
/// ```text
/// //
/// //  Pet.swift
/// //  Petstore
/// //
/// //  Created by Jane on 25/08/2016
/// //  Copyright © 2016 Acme. All rights reserved.
/// //
/// ```
///
/// Empty project, author and company values leave their part out.
#[derive(Debug, Clone)]
pub struct FileHeader {
    file_name: String,
    date: String,
    project: Option<String>,
    author: Option<String>,
    copyright: Option<(i32, String)>,
}

impl FileHeader {
    pub fn new(file_name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            date: date.into(),
            project: None,
            author: None,
            copyright: None,
        }
    }

    pub fn project(mut self, project: &str) -> Self {
        self.project = non_empty(project);
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = non_empty(author);
        self
    }

    pub fn copyright(mut self, year: i32, company: &str) -> Self {
        self.copyright = non_empty(company).map(|company| (year, company));
        self
    }

    fn created_line(&self) -> String {
        match &self.author {
            Some(author) => format!("//  Created by {} on {}", author, self.date),
            None => format!("//  Created on {}", self.date),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl Renderable for FileHeader {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::line("//"),
            CodeFragment::line(format!("//  {}", self.file_name)),
        ];

        if let Some(project) = &self.project {
            fragments.push(CodeFragment::line(format!("//  {}", project)));
        }

        fragments.push(CodeFragment::line("//"));
        fragments.push(CodeFragment::line(self.created_line()));

        if let Some((year, company)) = &self.copyright {
            fragments.push(CodeFragment::line(format!(
                "//  Copyright © {} {}. All rights reserved.",
                year, company
            )));
        }

        fragments.push(CodeFragment::line("//"));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use rosetta_codegen::CodeBuilder;

    use super::*;

    fn render(header: &FileHeader) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(header);
        builder.build()
    }

    #[test]
    fn test_minimal_header() {
        let header = FileHeader::new("Pet.swift", "25/08/2016");
        assert_eq!(
            render(&header),
            "//\n//  Pet.swift\n//\n//  Created on 25/08/2016\n//\n"
        );
    }

    #[test]
    fn test_full_header() {
        let header = FileHeader::new("Pet.swift", "25/08/2016")
            .project("Petstore")
            .author("Jane Doe")
            .copyright(2016, "Acme");

        assert_eq!(
            render(&header),
            "//\n\
             //  Pet.swift\n\
             //  Petstore\n\
             //\n\
             //  Created by Jane Doe on 25/08/2016\n\
             //  Copyright © 2016 Acme. All rights reserved.\n\
             //\n"
        );
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let header = FileHeader::new("Pet.swift", "25/08/2016")
            .project("")
            .author("")
            .copyright(2016, "");
        assert_eq!(render(&header), render(&FileHeader::new("Pet.swift", "25/08/2016")));
    }
}
