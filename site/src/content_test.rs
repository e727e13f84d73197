use super::*;

// =============================================================
// Team / advisors
// =============================================================

#[test]
fn every_team_member_has_name_and_link() {
    assert!(!TEAM.is_empty());
    for member in TEAM {
        assert!(!member.name.trim().is_empty());
        assert!(!member.profile_url.trim().is_empty());
        assert!(member.profile_url.starts_with("https://"));
    }
}

#[test]
fn team_has_one_featured_card() {
    let featured = TEAM.iter().filter(|m| m.layout == CardLayout::Featured).count();
    assert_eq!(featured, 1);
}

#[test]
fn advisors_have_names_and_images() {
    assert_eq!(ADVISORS.len(), 4);
    for advisor in ADVISORS {
        assert!(!advisor.name.is_empty());
        assert!(!advisor.credentials.is_empty());
        assert!(advisor.image.starts_with("https://"));
    }
}

#[test]
fn bios_have_no_line_continuation_gaps() {
    for member in TEAM {
        assert!(!member.bio.contains("  "), "double space in bio of {}", member.name);
    }
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_links_follow_page_order() {
    let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
    assert_eq!(
        anchors,
        [section::IDEA, section::TEAM, section::ADVISORS, section::DECK, section::PITCHES, section::CONTACTS]
    );
    assert_eq!(NAV_CTA.anchor, section::CONTACTS);
}

#[test]
fn nav_link_href_is_fragment() {
    assert_eq!(NAV_LINKS[0].href(), "#idea");
    assert_eq!(NAV_CTA.href(), "#contacts");
}

// =============================================================
// Contacts
// =============================================================

#[test]
fn tel_href_strips_spacing() {
    assert_eq!(tel_href("+39 346 973 1543"), "tel:+393469731543");
    assert_eq!(tel_href(" 0461-123 456 "), "tel:0461123456");
}

#[test]
fn mailto_href_trims_address() {
    assert_eq!(mailto_href(" info@fraido.it "), "mailto:info@fraido.it");
}

#[test]
fn contact_channels_build_protocol_links() {
    let hrefs: Vec<_> = CONTACTS.iter().map(ContactChannel::href).collect();
    assert_eq!(hrefs, vec!["mailto:info@fraido.it", "tel:+393469731543"]);
}

// =============================================================
// Pitches
// =============================================================

#[test]
fn youtube_source_derives_thumbnail_and_embed() {
    let source = VideoSource::YouTube("abc123");
    assert_eq!(
        source.thumbnail_url().as_deref(),
        Some("https://img.youtube.com/vi/abc123/hqdefault.jpg")
    );
    assert_eq!(
        source.embed_url().as_deref(),
        Some("https://www.youtube.com/embed/abc123?autoplay=1")
    );
}

#[test]
fn file_source_has_no_embed() {
    let source = VideoSource::File("https://example.com/a.mp4");
    assert_eq!(source.thumbnail_url(), None);
    assert_eq!(source.embed_url(), None);
}

#[test]
fn pitches_carry_title_category_and_date() {
    for pitch in PITCHES {
        assert!(!pitch.title.is_empty());
        assert!(!pitch.category.is_empty());
        assert!(!pitch.date.is_empty());
    }
}

#[test]
fn deck_links_are_absolute() {
    assert!(DECK.flipbook_url.starts_with("https://"));
    assert!(DECK.pdf_url.ends_with(".pdf"));
}
