use crate::{Language, ModelError};
use percent_encoding::percent_decode_str;

/// One article to fetch, parsed from a line of the list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReference {
    /// Last `/` segment of the line, as written (may be percent-encoded).
    pub name: String,
    /// Wiki subdomain the page is fetched from (e.g., "en").
    pub lang: String,
}

impl PageReference {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }

    /// The page title as the API expects it, with `%XX` escapes decoded.
    pub fn title(&self) -> String {
        percent_decode_str(&self.name).decode_utf8_lossy().into_owned()
    }
}

/// Parse a single list line such as `https://it.wikipedia.org/wiki/Roma`.
///
/// The name is the last `/` segment; the language is the host's first label
/// (third segment up to the first `.`), unless `lang_override` is set.
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(
    line: &str,
    line_no: usize,
    lang_override: Option<Language>,
) -> Result<PageReference, ModelError> {
    let malformed = || ModelError::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };

    let segments: Vec<&str> = line.split('/').collect();
    // scheme:, "", host, ..., name
    if segments.len() < 4 {
        return Err(malformed());
    }

    let name = segments[segments.len() - 1].trim();
    let host_lang = segments[2].split('.').next().unwrap_or_default().trim();
    if name.is_empty() || host_lang.is_empty() {
        return Err(malformed());
    }

    let lang = match lang_override {
        Some(lang) => lang.code().to_string(),
        None => host_lang.to_string(),
    };

    Ok(PageReference::new(name, lang))
}

/// Parse the whole list file contents, preserving line order.
///
/// Blank lines are skipped; any other line that is not URL-shaped is an error.
pub fn parse_page_list(
    contents: &str,
    lang_override: Option<Language>,
) -> Result<Vec<PageReference>, ModelError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line.trim(), i + 1, lang_override))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_host_language() {
        let page = parse_line("https://it.wikipedia.org/wiki/Roma", 1, None).unwrap();
        assert_eq!(page, PageReference::new("Roma", "it"));

        // Languages outside the override set still come through from the URL
        let page = parse_line("https://de.wikipedia.org/wiki/Berlin", 1, None).unwrap();
        assert_eq!(page.lang, "de");
    }

    #[test]
    fn test_parse_line_override() {
        let page = parse_line("https://it.wikipedia.org/wiki/Roma", 1, Some(Language::En)).unwrap();
        assert_eq!(page, PageReference::new("Roma", "en"));
    }

    #[test]
    fn test_parse_line_malformed() {
        assert_eq!(
            parse_line("Rust", 3, None),
            Err(ModelError::MalformedLine {
                line: 3,
                content: "Rust".into()
            })
        );
        assert!(parse_line("https://en.wikipedia.org/wiki/", 1, None).is_err());
        assert!(parse_line("en.wikipedia.org/Rust", 1, None).is_err());
    }

    #[test]
    fn test_parse_page_list_order_and_blanks() {
        let contents = "https://en.wikipedia.org/wiki/Rust\r\n\
                        \n\
                        https://it.wikipedia.org/wiki/Roma\n\
                        https://en.wikipedia.org/wiki/Cargo_(software)\n";
        let pages = parse_page_list(contents, None).unwrap();
        assert_eq!(
            pages,
            vec![
                PageReference::new("Rust", "en"),
                PageReference::new("Roma", "it"),
                PageReference::new("Cargo_(software)", "en"),
            ]
        );
    }

    #[test]
    fn test_parse_page_list_override_forces_every_page() {
        let contents = "https://it.wikipedia.org/wiki/Roma\nhttps://it.wikipedia.org/wiki/Milano\n";
        let pages = parse_page_list(contents, Some(Language::En)).unwrap();
        assert!(pages.iter().all(|p| p.lang == "en"));
    }

    #[test]
    fn test_parse_page_list_reports_line_number() {
        let contents = "https://en.wikipedia.org/wiki/Rust\n\nnot a url\n";
        let err = parse_page_list(contents, None).unwrap_err();
        assert_eq!(
            err,
            ModelError::MalformedLine {
                line: 3,
                content: "not a url".into()
            }
        );
    }

    #[test]
    fn test_parse_page_list_empty() {
        assert!(parse_page_list("", None).unwrap().is_empty());
    }

    #[test]
    fn test_title_decodes_escapes() {
        let page = PageReference::new("Caf%C3%A9", "fr");
        assert_eq!(page.title(), "Café");
        assert_eq!(PageReference::new("Rust", "en").title(), "Rust");
    }
}
