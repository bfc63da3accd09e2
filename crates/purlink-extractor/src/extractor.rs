//! Draft assembly - one pass over a snapshot, every chain in turn

use purlink_domain::DraftRecord;
use tracing::debug;

use crate::fields;
use crate::page::ProfilePage;

/// Extract a draft record from a page snapshot
///
/// Pure function of the snapshot: runs each field's matcher chain
/// against the same capture and assembles the result. Cannot fail -
/// every field defaults to its empty value when its chain exhausts, so
/// the worst outcome of a hostile or half-loaded page is a blank draft
/// carrying only the URL.
pub fn extract(page: &ProfilePage) -> DraftRecord {
    let title = fields::title(page);
    let company = fields::company(page, &title);
    let education = page.section_text("education");

    let draft = DraftRecord {
        name: fields::name(page),
        company,
        location: fields::location(page),
        is_purdue_grad: fields::is_purdue_grad(education.as_deref()),
        graduation_year: fields::graduation_year(education.as_deref()),
        linkedin_url: page.url().to_string(),
        connection_degree: fields::connection_degree(page),
        profile_image_url: fields::profile_image(page),
        title,
    };

    debug!(
        "Extracted draft from '{}': name {:?}, purdue grad {}",
        draft.linkedin_url, draft.name, draft.is_purdue_grad
    );

    draft
}
