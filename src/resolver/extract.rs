// Tue Jan 13 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

// Attribute and tag names are case-insensitive in HTML, the value is not.
static SPECIES_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<(?i:a)\b[^>]*?\s(?i:title)\s*=\s*(?:"species"[^>]*|'species'[^>]*|species(?:\s[^>]*)?)>(.*?)</(?i:a)\s*>"#,
    )
    .expect("species anchor pattern")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"));

/// Text of the first `<a title="species">` element, tags stripped and
/// entities decoded. `None` when the document has no such anchor.
pub fn find_species_entry(html: &str) -> Option<String> {
    let captures = SPECIES_ANCHOR.captures(html)?;
    let inner = captures.get(1)?.as_str();
    let text = decode_entities(&TAG.replace_all(inner, ""));
    Some(text)
}

// Only the named entities the taxonomy browser emits in names, plus numeric
// references. Anything else is kept verbatim.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let decoded = tail.find(';').filter(|end| *end <= 10).and_then(|end| {
            decode_entity(&tail[1..end]).map(|c| (c, end + 1))
        });

        match decoded {
            Some((c, consumed)) => {
                out.push(c);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                entity.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_ncbi_style_anchor() {
        let html = r#"<table><tr><td>Rank: <a ALT="species" TITLE="species" href="/Taxonomy/Browser/wwwtax.cgi?id=562"><STRONG>Escherichia coli</STRONG></a></td></tr></table>"#;
        assert_eq!(find_species_entry(html).as_deref(), Some("Escherichia coli"));
    }

    #[test]
    fn test_ignores_other_ranks() {
        let html = r#"<a title="genus" href="x">Escherichia</a> <a title="species" href="y">Escherichia coli</a>"#;
        assert_eq!(find_species_entry(html).as_deref(), Some("Escherichia coli"));
    }

    #[test]
    fn test_single_quoted_and_multiline() {
        let html = "<a href='z'\n   title='species'>\n[Clostridium] difficile\n</a>";
        assert_eq!(find_species_entry(html).as_deref(), Some("\n[Clostridium] difficile\n"));
    }

    #[test]
    fn test_value_is_case_sensitive() {
        let html = r#"<a title="Species">Not it</a>"#;
        assert!(find_species_entry(html).is_none());
    }

    #[test]
    fn test_missing_anchor() {
        assert!(find_species_entry("<html><body>No result found</body></html>").is_none());
        assert!(find_species_entry("").is_none());
    }

    #[test]
    fn test_entities_decoded() {
        let html = r#"<a title="species">Candidatus&nbsp;Liberibacter &amp; co &#91;x&#x5D;</a>"#;
        assert_eq!(find_species_entry(html).as_deref(), Some("Candidatus Liberibacter & co [x]"));
    }

    #[test]
    fn test_stray_ampersand_kept() {
        assert_eq!(decode_entities("A & B"), "A & B");
        assert_eq!(decode_entities("A &unknown; B"), "A &unknown; B");
    }
}
