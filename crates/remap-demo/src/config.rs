use crate::catalog::Book;

/// Options for one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub author: String,
    pub chapters: Vec<String>,
    pub price: f64,
    pub stock: i32,
    /// Print the compiled plans before mapping
    pub explain: bool,
    /// Print the mapped DTO as JSON instead of plain lines
    pub json: bool,
    pub debug: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            chapters: [
                "Clean Code",
                "Meaningful Names",
                "Functions",
                "Comments",
                "Formatting",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            price: 42.99,
            stock: 15,
            explain: false,
            json: false,
            debug: false,
        }
    }
}

impl DemoConfig {
    /// The source record described by these options.
    pub fn book(&self) -> Book {
        Book {
            title: self.title.clone(),
            author: self.author.clone(),
            chapters: self.chapters.clone(),
            price: self.price,
            stock: self.stock,
        }
    }

    /// Default tracing directive for this run.
    pub fn tracing_directive(&self) -> &'static str {
        if self.debug {
            "remap_core=debug"
        } else {
            "remap_core=info"
        }
    }
}

/// Splits a comma separated chapter list, dropping blank entries.
pub fn parse_chapters(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|chapter| !chapter.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_chapters() {
        assert_eq!(
            parse_chapters("Intro, Body ,,Outro "),
            vec!["Intro".to_string(), "Body".to_string(), "Outro".to_string()]
        );
        assert!(parse_chapters("").is_empty());
    }

    #[test]
    fn test_default_book() {
        let book = DemoConfig::default().book();
        assert_eq!(book.chapters.len(), 5);
        assert_eq!(book.stock, 15);
    }
}
