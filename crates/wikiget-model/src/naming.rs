use crate::{ModelError, PageReference};

/// Output file naming: `page_{index}_{name}.html`, with either the index
/// prefix or the name suffix optionally left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingScheme {
    strip_prefix: bool,
    strip_suffix: bool,
}

impl NamingScheme {
    /// Both flags together would leave only the extension.
    pub fn new(strip_prefix: bool, strip_suffix: bool) -> Result<Self, ModelError> {
        if strip_prefix && strip_suffix {
            return Err(ModelError::ConflictingStripFlags);
        }
        Ok(Self {
            strip_prefix,
            strip_suffix,
        })
    }

    /// File name for the page at zero-based `index` in the list.
    pub fn file_name(&self, index: usize, page: &PageReference) -> String {
        let mut name = String::new();
        if !self.strip_prefix {
            name.push_str(&format!("page_{index}"));
        }
        if !self.strip_suffix {
            if !self.strip_prefix {
                name.push('_');
            }
            name.push_str(&page.name.to_lowercase());
        }
        name.push_str(".html");
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roma() -> PageReference {
        PageReference::new("Roma", "it")
    }

    #[test]
    fn test_default_name() {
        let scheme = NamingScheme::default();
        assert_eq!(scheme.file_name(0, &roma()), "page_0_roma.html");
        assert_eq!(scheme.file_name(12, &roma()), "page_12_roma.html");
    }

    #[test]
    fn test_strip_prefix() {
        let scheme = NamingScheme::new(true, false).unwrap();
        assert_eq!(scheme.file_name(3, &roma()), "roma.html");
    }

    #[test]
    fn test_strip_suffix() {
        let scheme = NamingScheme::new(false, true).unwrap();
        assert_eq!(scheme.file_name(3, &roma()), "page_3.html");
    }

    #[test]
    fn test_conflicting_flags() {
        assert_eq!(
            NamingScheme::new(true, true),
            Err(ModelError::ConflictingStripFlags)
        );
    }

    #[test]
    fn test_name_is_lowercased_as_written() {
        let page = PageReference::new("Cargo_(Software)", "en");
        assert_eq!(
            NamingScheme::default().file_name(1, &page),
            "page_1_cargo_(software).html"
        );
    }
}
