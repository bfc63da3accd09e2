//! Page snapshot - one immutable capture of a profile page

use crate::scan;

/// An image found on the page, with whatever size the markup reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageImage {
    /// Image source URL
    pub src: String,
    /// Reported width, 0 when the markup does not say
    pub width: u32,
    /// Reported height, 0 when the markup does not say
    pub height: u32,
}

/// One immutable snapshot of a profile page: its URL and raw markup
///
/// Every matcher chain runs against a single snapshot, so an extraction
/// pass sees one consistent document even while the live page keeps
/// mutating underneath the host. The snapshot is read-only; nothing
/// here writes back to the page.
///
/// The scanning helpers are tolerant by construction: a missing
/// section, a renamed class, or a truncated half-loaded document all
/// surface as "no match", never as an error.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    url: String,
    html: String,
}

impl ProfilePage {
    /// Snapshot a page from its URL and markup
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }

    /// The canonical source-page URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Visible text of the whole page
    pub fn full_text(&self) -> String {
        scan::text(&self.html)
    }

    /// Non-empty texts of every element matching `tag` (or any tag)
    /// whose class attribute carries every fragment in `classes`
    pub(crate) fn class_texts(&self, tag: Option<&str>, classes: &[&str]) -> Vec<String> {
        Self::matching_texts(&self.html, tag, classes)
    }

    /// Like [`Self::class_texts`], but scoped to containers whose class
    /// carries the `within` fragment
    pub(crate) fn nested_texts(
        &self,
        within: &str,
        tag: Option<&str>,
        classes: &[&str],
    ) -> Vec<String> {
        let mut out = Vec::new();
        for container in Self::container_blocks(&self.html, within) {
            out.extend(Self::matching_texts(container, tag, classes));
        }
        out
    }

    /// Aggregated visible text of the `<section>` enclosing the element
    /// with the given id, or None when the anchor or section is absent
    pub(crate) fn section_text(&self, anchor_id: &str) -> Option<String> {
        let block = self.section_block(anchor_id)?;
        let text = scan::text(block);
        (!text.is_empty()).then_some(text)
    }

    /// First non-empty `span[aria-hidden="true"]` text inside the
    /// section enclosing the given id anchor
    pub(crate) fn hidden_span_in_section(&self, anchor_id: &str) -> Option<String> {
        let block = self.section_block(anchor_id)?;
        scan::elements(block, "span")
            .iter()
            .filter(|el| scan::attr(el.attrs, "aria-hidden") == Some("true"))
            .map(|el| scan::text(el.inner))
            .find(|t| !t.is_empty())
    }

    /// src of the first image whose class carries the fragment
    pub(crate) fn image_src_by_class(&self, class: &str) -> Option<String> {
        scan::elements(&self.html, "img")
            .iter()
            .filter(|el| scan::has_classes(el.attrs, &[class]))
            .find_map(|el| scan::attr(el.attrs, "src"))
            .filter(|src| !src.is_empty())
            .map(str::to_string)
    }

    /// src of the first image inside a container whose class carries
    /// the fragment
    pub(crate) fn image_src_within(&self, container_class: &str) -> Option<String> {
        Self::container_blocks(&self.html, container_class)
            .into_iter()
            .find_map(Self::first_image_src)
    }

    /// src of the first image inside a button whose aria-label contains
    /// the fragment
    pub(crate) fn image_src_in_labeled_button(&self, label: &str) -> Option<String> {
        scan::elements(&self.html, "button")
            .iter()
            .filter(|el| {
                scan::attr(el.attrs, "aria-label").is_some_and(|v| v.contains(label))
            })
            .find_map(|el| Self::first_image_src(el.inner))
    }

    /// Every image on the page, with reported dimensions
    pub(crate) fn images(&self) -> Vec<PageImage> {
        scan::elements(&self.html, "img")
            .iter()
            .filter_map(|el| {
                let src = scan::attr(el.attrs, "src")?;
                (!src.is_empty()).then(|| PageImage {
                    src: src.to_string(),
                    width: Self::dimension(el.attrs, "width"),
                    height: Self::dimension(el.attrs, "height"),
                })
            })
            .collect()
    }

    fn first_image_src(block: &str) -> Option<String> {
        scan::elements(block, "img")
            .iter()
            .find_map(|el| scan::attr(el.attrs, "src"))
            .filter(|src| !src.is_empty())
            .map(str::to_string)
    }

    fn dimension(attrs: &str, name: &str) -> u32 {
        scan::attr(attrs, name)
            .and_then(|v| v.trim().trim_end_matches("px").parse().ok())
            .unwrap_or(0)
    }

    fn matching_texts(block: &str, tag: Option<&str>, classes: &[&str]) -> Vec<String> {
        // Any-tag match: classes alone decide, so scan the handful of
        // tags profile text actually lives in.
        let tags: &[&str] = match tag {
            Some(ref t) => std::slice::from_ref(t),
            None => ANY_TEXT_TAGS,
        };
        let mut out = Vec::new();
        for tag in tags {
            for el in scan::elements(block, tag) {
                if scan::has_classes(el.attrs, classes) {
                    let text = scan::text(el.inner);
                    if !text.is_empty() {
                        out.push(text);
                    }
                }
            }
        }
        out
    }

    /// Inner markup of every container (any block tag) whose class
    /// carries the fragment
    fn container_blocks<'a>(html: &'a str, class: &str) -> Vec<&'a str> {
        CONTAINER_TAGS
            .iter()
            .flat_map(|tag| scan::elements(html, tag))
            .filter(|el| scan::has_classes(el.attrs, &[class]))
            .map(|el| el.inner)
            .collect()
    }

    /// The `<section>` block enclosing the element carrying the id
    fn section_block(&self, anchor_id: &str) -> Option<&str> {
        let lower = scan::fold(&self.html);
        let anchor = Self::find_id_anchor(&lower, anchor_id)?;
        let start = lower[..anchor].rfind("<section")?;
        let open_end = start + self.html[start..].find('>')? + 1;
        let end = lower[open_end..]
            .find("</section")
            .map_or(self.html.len(), |rel| open_end + rel);
        Some(&self.html[open_end..end])
    }

    fn find_id_anchor(lower: &str, anchor_id: &str) -> Option<usize> {
        let id = anchor_id.to_ascii_lowercase();
        for pat in [
            format!("id=\"{id}\""),
            format!("id='{id}'"),
            format!("id={id}"),
        ] {
            if let Some(at) = lower.find(&pat) {
                return Some(at);
            }
        }
        None
    }
}

/// Tags scanned for class-only ("any element") matches.
const ANY_TEXT_TAGS: &[&str] = &["span", "div", "p", "h1", "h2", "h3", "a", "li"];

/// Tags that act as containers in descendant matches.
const CONTAINER_TAGS: &[&str] = &["div", "section", "main", "aside", "ul"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_texts_in_order() {
        let page = ProfilePage::new(
            "u",
            r#"<h1 class="a">First</h1><h1 class="a b">Second</h1>"#,
        );
        assert_eq!(page.class_texts(Some("h1"), &["a"]), ["First", "Second"]);
        assert_eq!(page.class_texts(Some("h1"), &["a", "b"]), ["Second"]);
        assert!(page.class_texts(Some("h1"), &["c"]).is_empty());
    }

    #[test]
    fn test_nested_texts_scopes_to_container() {
        let page = ProfilePage::new(
            "u",
            r#"<h1>outside</h1>
               <div class="pv-text-details__left-panel"><h1>inside</h1></div>"#,
        );
        let texts = page.nested_texts("pv-text-details__left-panel", Some("h1"), &[]);
        assert_eq!(texts, ["inside"]);
    }

    #[test]
    fn test_section_text_takes_enclosing_section() {
        let page = ProfilePage::new(
            "u",
            r#"<section><div id="education"></div>
               <span>Purdue University</span><span>2015 - 2019</span></section>
               <section><span>elsewhere</span></section>"#,
        );
        let text = page.section_text("education").unwrap();
        assert!(text.contains("Purdue University"));
        assert!(text.contains("2015"));
        assert!(!text.contains("elsewhere"));
    }

    #[test]
    fn test_section_text_absent_anchor() {
        let page = ProfilePage::new("u", "<section><span>no anchors here</span></section>");
        assert_eq!(page.section_text("education"), None);
    }

    #[test]
    fn test_hidden_span_in_section() {
        let page = ProfilePage::new(
            "u",
            r#"<section><div id="experience"></div>
               <span aria-hidden="false">skip</span>
               <span aria-hidden="true">Acme Corp</span></section>"#,
        );
        assert_eq!(
            page.hidden_span_in_section("experience").as_deref(),
            Some("Acme Corp")
        );
    }

    #[test]
    fn test_images_report_dimensions() {
        let page = ProfilePage::new(
            "u",
            r#"<img src="a.png" width="120" height="110">
               <img src="b.png">"#,
        );
        let images = page.images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].width, 120);
        assert_eq!(images[1].width, 0);
    }

    #[test]
    fn test_image_src_in_labeled_button() {
        let page = ProfilePage::new(
            "u",
            r#"<button aria-label="View Ada's profile photo"><img src="pic.png"></button>"#,
        );
        assert_eq!(
            page.image_src_in_labeled_button("View").as_deref(),
            Some("pic.png")
        );
    }
}
