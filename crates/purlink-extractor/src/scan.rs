// Low-level HTML string scanning.
// Deliberately naive but tailored to profile markup: tag and attribute
// names match case-insensitively on ASCII, class names match as
// substrings of the class attribute, and nesting of an element inside
// another element with the same tag name is not tracked. This is not a
// DOM; it is the smallest scanner that survives the markup we see.

/// One opening tag and the markup it encloses.
pub(crate) struct Element<'a> {
    /// Attribute source text of the opening tag, trimmed.
    pub attrs: &'a str,
    /// Markup between the opening and closing tags. Empty for void
    /// tags; runs to end of input when the closing tag is missing.
    pub inner: &'a str,
}

/// Tags that never enclose content.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// ASCII-only lowercasing; preserves byte offsets for slicing.
pub(crate) fn fold(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// All elements with the given tag name, in document order.
pub(crate) fn elements<'a>(html: &'a str, tag: &str) -> Vec<Element<'a>> {
    let lower = fold(html);
    let tag = tag.to_ascii_lowercase();
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}");
    let is_void = VOID_TAGS.contains(&tag.as_str());

    let mut out = Vec::new();
    let mut from = 0;
    while let Some(rel) = lower[from..].find(&open_pat) {
        let start = from + rel;
        let name_end = start + open_pat.len();
        // Require a delimiter so "<b" does not match "<body".
        match lower.as_bytes().get(name_end) {
            Some(b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/') | None => {}
            _ => {
                from = name_end;
                continue;
            }
        }
        let Some(gt_rel) = html[name_end..].find('>') else {
            break;
        };
        let open_end = name_end + gt_rel + 1;
        let attrs = html[name_end..open_end - 1].trim_end_matches('/').trim();

        let self_closing = html[name_end..open_end - 1].trim_end().ends_with('/');
        let inner = if is_void || self_closing {
            ""
        } else if let Some(close_rel) = lower[open_end..].find(&close_pat) {
            &html[open_end..open_end + close_rel]
        } else {
            &html[open_end..]
        };

        out.push(Element { attrs, inner });
        from = open_end;
    }
    out
}

/// Value of an attribute in an opening tag's attribute text.
/// Handles double-quoted, single-quoted, and bare values.
pub(crate) fn attr<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let lower = fold(attrs);
    let name = name.to_ascii_lowercase();
    let bytes = attrs.as_bytes();

    let mut from = 0;
    while let Some(rel) = lower[from..].find(&name) {
        let at = from + rel;
        from = at + name.len();

        let word_start =
            at == 0 || matches!(bytes[at - 1], b' ' | b'\t' | b'\n' | b'\r' | b'"' | b'\'');
        if !word_start {
            continue;
        }

        let mut i = at + name.len();
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }

        return match bytes[i] {
            b'"' => attrs[i + 1..].find('"').map(|end| &attrs[i + 1..i + 1 + end]),
            b'\'' => attrs[i + 1..].find('\'').map(|end| &attrs[i + 1..i + 1 + end]),
            _ => {
                let end = attrs[i..]
                    .find(|c: char| c.is_ascii_whitespace())
                    .map_or(attrs.len(), |e| i + e);
                Some(&attrs[i..end])
            }
        };
    }
    None
}

/// Whether the element's class attribute carries every fragment.
pub(crate) fn has_classes(attrs: &str, fragments: &[&str]) -> bool {
    match attr(attrs, "class") {
        Some(class) => fragments.iter().all(|f| class.contains(f)),
        None => fragments.is_empty(),
    }
}

/// Visible text of a markup fragment: tags stripped, minimal entities
/// decoded, whitespace collapsed and trimmed.
pub(crate) fn text(fragment: &str) -> String {
    let mut flat = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => flat.push(ch),
            _ => {}
        }
    }
    collapse_ws(&decode_entities(&flat))
}

/// Minimal entity decoding: the ones profile markup actually uses.
fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Collapse whitespace runs into single spaces and trim.
fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_by_tag() {
        let html = r#"<div><h1 class="big">One</h1><h2>skip</h2><h1>Two</h1></div>"#;
        let found = elements(html, "h1");
        assert_eq!(found.len(), 2);
        assert_eq!(text(found[0].inner), "One");
        assert_eq!(text(found[1].inner), "Two");
    }

    #[test]
    fn test_tag_name_needs_delimiter() {
        let html = "<body><b>bold</b></body>";
        let found = elements(html, "b");
        assert_eq!(found.len(), 1);
        assert_eq!(text(found[0].inner), "bold");
    }

    #[test]
    fn test_missing_close_runs_to_end() {
        let html = "<section><p>half loaded";
        let found = elements(html, "section");
        assert_eq!(found.len(), 1);
        assert_eq!(text(found[0].inner), "half loaded");
    }

    #[test]
    fn test_attr_quoting_styles() {
        assert_eq!(attr(r#"class="a b" id="x""#, "id"), Some("x"));
        assert_eq!(attr("class='a b'", "class"), Some("a b"));
        assert_eq!(attr("width=100 height=80", "height"), Some("80"));
        assert_eq!(attr(r#"data-subclass="y""#, "class"), None);
        assert_eq!(attr("disabled", "disabled"), None);
    }

    #[test]
    fn test_has_classes() {
        let attrs = r#"class="text-body-medium break-words t-black""#;
        assert!(has_classes(attrs, &["text-body-medium"]));
        assert!(has_classes(attrs, &["text-body-medium", "break-words"]));
        assert!(!has_classes(attrs, &["text-body-large"]));
        assert!(!has_classes("id=\"x\"", &["anything"]));
    }

    #[test]
    fn test_text_strips_and_collapses() {
        let fragment = "  <span>Ada</span>\n   <span>Lovelace&nbsp;&amp; co</span> ";
        assert_eq!(text(fragment), "Ada Lovelace & co");
    }

    #[test]
    fn test_self_closing_img() {
        let html = r#"<img src="a.png" width="120" height="120"/><p>after</p>"#;
        let imgs = elements(html, "img");
        assert_eq!(imgs.len(), 1);
        assert_eq!(attr(imgs[0].attrs, "src"), Some("a.png"));
        assert_eq!(imgs[0].inner, "");
    }
}
