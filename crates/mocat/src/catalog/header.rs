//! Catalog metadata header.
//!
//! The translation of the empty message is a block of `Name: value` lines
//! (`Content-Type`, `Language`, `Plural-Forms`, ...).

/// Marker preceding the plural expression inside the header.
const PLURAL_MARKER: &[u8] = b"plural=";

/// Parsed metadata fields, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: Vec<(String, String)>,
}

impl Header {
    /// Parse `Name: value` lines. Lines without a colon are skipped.
    pub fn parse(blob: &[u8]) -> Self {
        let text = String::from_utf8_lossy(blob);
        let fields = text
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .filter(|(name, _)| !name.is_empty())
            .collect();
        Self { fields }
    }

    /// Look up a field by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over all fields in file order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The raw `Plural-Forms` field.
    pub fn plural_forms(&self) -> Option<&str> {
        self.get("Plural-Forms")
    }

    /// The declared number of plural forms, from `nplurals=N`.
    pub fn nplurals(&self) -> Option<usize> {
        let forms = self.plural_forms()?;
        let start = forms.find("nplurals=")? + "nplurals=".len();
        let rest = &forms[start..];
        let end = rest.find(';').unwrap_or(rest.len());
        rest[..end].trim().parse().ok()
    }
}

/// Find the plural expression in a raw header blob.
///
/// Spaces after `plural=` are skipped; the expression runs to the next `;`,
/// or to the end of the line when no `;` follows.
pub(crate) fn plural_expression(blob: &[u8]) -> Option<&[u8]> {
    let start = blob
        .windows(PLURAL_MARKER.len())
        .position(|window| window == PLURAL_MARKER)?
        + PLURAL_MARKER.len();
    let rest = &blob[start..];
    let skipped = rest.iter().take_while(|&&b| b == b' ').count();
    let rest = &rest[skipped..];
    let end = rest
        .iter()
        .position(|&b| b == b';' || b == b'\n')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[u8] = b"Project-Id-Version: demo 1.0\n\
        Content-Type: text/plain; charset=UTF-8\n\
        Plural-Forms: nplurals=3; plural=n==1 ? 0 : 1;\n";

    #[test]
    fn test_plural_expression_stops_at_semicolon() {
        assert_eq!(plural_expression(HEADER), Some(&b"n==1 ? 0 : 1"[..]));
    }

    #[test]
    fn test_plural_expression_skips_spaces_after_marker() {
        assert_eq!(
            plural_expression(b"nplurals=2; plural= (n != 1);"),
            Some(&b"(n != 1)"[..])
        );
    }

    #[test]
    fn test_plural_expression_ignores_nplurals() {
        assert_eq!(plural_expression(b"nplurals=2;"), None);
    }

    #[test]
    fn test_plural_expression_without_semicolon_ends_at_line() {
        assert_eq!(
            plural_expression(b"plural=n != 1\nLanguage: de"),
            Some(&b"n != 1"[..])
        );
    }

    #[test]
    fn test_header_fields_case_insensitive() {
        let header = Header::parse(HEADER);
        assert_eq!(header.len(), 3);
        assert_eq!(
            header.get("content-type"),
            Some("text/plain; charset=UTF-8")
        );
        assert_eq!(header.nplurals(), Some(3));
    }

    #[test]
    fn test_header_skips_lines_without_colon() {
        let header = Header::parse(b"garbage\nLanguage: de\n\n");
        assert_eq!(header.fields().collect::<Vec<_>>(), vec![("Language", "de")]);
    }
}
