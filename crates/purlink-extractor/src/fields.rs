//! Per-field extraction on top of the matcher chains
//!
//! The odd fields live here: the ones with a derivation fallback
//! (company from the title), a gating condition (graduation year only
//! when the education section mentions Purdue), or a whole-page text
//! scan (connection degree, avatar image).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::ProfilePage;
use crate::probes::{
    self, DEGREE_CHAIN, IMAGE_CHAIN, LOCATION_CHAIN, NAME_CHAIN, TITLE_CHAIN,
};

/// 4-digit year with a 19xx/20xx century prefix
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Connection-degree token, case-sensitive
static DEGREE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(1st|2nd|3rd)\b").unwrap());

/// Minimum reported width and height for the avatar fallback scan
const MIN_AVATAR_DIMENSION: u32 = 100;

pub(crate) fn name(page: &ProfilePage) -> String {
    probes::first_hit(page, NAME_CHAIN).unwrap_or_default()
}

pub(crate) fn title(page: &ProfilePage) -> String {
    probes::first_hit(page, TITLE_CHAIN).unwrap_or_default()
}

/// First experience entry, else derived from the title's " at " suffix
pub(crate) fn company(page: &ProfilePage, title: &str) -> String {
    if let Some(company) = page.hidden_span_in_section("experience") {
        return company;
    }
    match title.find(" at ") {
        Some(at) => title[at + 4..].trim().to_string(),
        None => String::new(),
    }
}

/// First candidate that reads like a place: contains a comma or "Area"
pub(crate) fn location(page: &ProfilePage) -> String {
    probes::first_hit_where(page, LOCATION_CHAIN, |t| {
        t.contains(',') || t.contains("Area")
    })
    .unwrap_or_default()
}

/// True iff the education section mentions "purdue", any case
pub(crate) fn is_purdue_grad(education_text: Option<&str>) -> bool {
    education_text.is_some_and(|t| t.to_lowercase().contains("purdue"))
}

/// First 4-digit year in the education section, searched only when the
/// section mentions Purdue. The first year anywhere in the section wins
/// even when several schools are listed; that imprecision is inherited
/// from the source heuristic on purpose.
pub(crate) fn graduation_year(education_text: Option<&str>) -> String {
    match education_text {
        Some(text) if text.to_lowercase().contains("purdue") => YEAR_RE
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Badge element text, else the first degree token anywhere on the page
/// with " Level" appended
pub(crate) fn connection_degree(page: &ProfilePage) -> String {
    if let Some(badge) = probes::first_hit(page, DEGREE_CHAIN) {
        return badge;
    }
    DEGREE_RE
        .find(&page.full_text())
        .map(|m| format!("{} Level", m.as_str()))
        .unwrap_or_default()
}

/// Known avatar locations, else the first plausibly-avatar-sized image
///
/// The fallback accepts an image only when its URL mentions "profile"
/// or "media" and the markup reports both dimensions at 100 or more.
pub(crate) fn profile_image(page: &ProfilePage) -> String {
    for probe in IMAGE_CHAIN {
        if let Some(src) = probe.find(page) {
            return src;
        }
    }
    page.images()
        .into_iter()
        .find(|img| {
            (img.src.contains("profile") || img.src.contains("media"))
                && img.width >= MIN_AVATAR_DIMENSION
                && img.height >= MIN_AVATAR_DIMENSION
        })
        .map(|img| img.src)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_prefers_experience_section() {
        let page = ProfilePage::new(
            "u",
            r#"<section><div id="experience"></div>
               <span aria-hidden="true">Acme Corp</span></section>"#,
        );
        assert_eq!(company(&page, "Engineer at Other Co"), "Acme Corp");
    }

    #[test]
    fn test_company_derived_from_title() {
        let page = ProfilePage::new("u", "<p>no experience section</p>");
        assert_eq!(company(&page, "Engineer at Acme Corp"), "Acme Corp");
        assert_eq!(company(&page, "Freelance Engineer"), "");
    }

    #[test]
    fn test_purdue_flag_case_insensitive() {
        assert!(is_purdue_grad(Some("PURDUE University 2015")));
        assert!(is_purdue_grad(Some("purdue")));
        assert!(!is_purdue_grad(Some("Indiana University")));
        assert!(!is_purdue_grad(None));
    }

    #[test]
    fn test_graduation_year_gated_on_purdue() {
        assert_eq!(graduation_year(Some("Purdue University 2015 - 2019")), "2015");
        assert_eq!(graduation_year(Some("Indiana University 2015")), "");
        assert_eq!(graduation_year(Some("Purdue University")), "");
        assert_eq!(graduation_year(None), "");
    }

    #[test]
    fn test_graduation_year_takes_first_match() {
        // Several schools: the first year in the section wins, even if
        // it belongs to another school.
        let text = "Indiana University 1998 - 2002. Purdue University 2004 - 2006.";
        assert_eq!(graduation_year(Some(text)), "1998");
    }

    #[test]
    fn test_year_century_prefix() {
        assert_eq!(graduation_year(Some("Purdue, class of 2150 err 1985")), "1985");
        assert_eq!(graduation_year(Some("Purdue est. 1869, grad 2019")), "2019");
    }

    #[test]
    fn test_degree_badge_preferred() {
        let page = ProfilePage::new(
            "u",
            r#"<span class="dist-value">2nd</span><p>texts mention 1st here</p>"#,
        );
        assert_eq!(connection_degree(&page), "2nd");
    }

    #[test]
    fn test_degree_from_page_text() {
        let page = ProfilePage::new("u", "<p>You and Ada are 3rd degree connections</p>");
        assert_eq!(connection_degree(&page), "3rd Level");
    }

    #[test]
    fn test_degree_is_case_sensitive() {
        let page = ProfilePage::new("u", "<p>1ST and 2ND are not tokens we accept</p>");
        assert_eq!(connection_degree(&page), "");
    }

    #[test]
    fn test_profile_image_fallback_requires_size_and_url_hint() {
        let page = ProfilePage::new(
            "u",
            r#"<img src="https://cdn.example.com/banner.png" width="1200" height="300">
               <img src="https://media.example.com/tiny.png" width="32" height="32">
               <img src="https://media.example.com/avatar.png" width="200" height="200">"#,
        );
        assert_eq!(profile_image(&page), "https://media.example.com/avatar.png");
    }

    #[test]
    fn test_profile_image_unsized_fallback_rejected() {
        let page = ProfilePage::new("u", r#"<img src="https://media.example.com/x.png">"#);
        assert_eq!(profile_image(&page), "");
    }
}
