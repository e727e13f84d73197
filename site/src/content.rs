//! Static page content.
//!
//! DESIGN
//! ======
//! Every record is authored at compile time and borrowed as `&'static` by the
//! section components. Derived values (hrefs, thumbnail and embed URLs) are
//! computed from the records rather than stored twice.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Anchor ids of the page sections, shared by the sections and the nav links.
pub mod section {
    pub const IDEA: &str = "idea";
    pub const TEAM: &str = "team";
    pub const ADVISORS: &str = "advisors";
    pub const DECK: &str = "deck";
    pub const PITCHES: &str = "pitches";
    pub const CONTACTS: &str = "contacts";
}

// =============================================================
// Records
// =============================================================

/// How a team card is laid out in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    /// Wide card with the portrait beside the text.
    Featured,
    /// Narrow card with a round portrait above the text.
    Compact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub profile_url: &'static str,
    pub layout: CardLayout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advisor {
    pub name: &'static str,
    pub credentials: &'static str,
    pub image: &'static str,
}

/// Where a pitch recording is played from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoSource {
    /// Hosted embed, identified by its YouTube video id.
    YouTube(&'static str),
    /// Direct media file played by a native `<video>` element.
    File(&'static str),
}

impl VideoSource {
    /// Preview image for hosted embeds.
    pub fn thumbnail_url(&self) -> Option<String> {
        match self {
            Self::YouTube(id) => Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")),
            Self::File(_) => None,
        }
    }

    /// Player URL for hosted embeds; autoplays since it is only mounted on activation.
    pub fn embed_url(&self) -> Option<String> {
        match self {
            Self::YouTube(id) => Some(format!("https://www.youtube.com/embed/{id}?autoplay=1")),
            Self::File(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PitchResource {
    pub title: &'static str,
    pub category: &'static str,
    pub video: VideoSource,
    pub date: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub flipbook_url: &'static str,
    pub pdf_url: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub label: &'static str,
    /// Human-readable value, also the source of the href.
    pub value: &'static str,
}

impl ContactChannel {
    pub fn href(&self) -> String {
        match self.kind {
            ContactKind::Email => mailto_href(self.value),
            ContactKind::Phone => tel_href(self.value),
        }
    }
}

/// `mailto:` link for an address.
pub fn mailto_href(address: &str) -> String {
    format!("mailto:{}", address.trim())
}

/// `tel:` link for a display number: keeps digits and a leading `+`.
pub fn tel_href(display: &str) -> String {
    let trimmed = display.trim();
    let mut out = String::from("tel:");
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    out
}

// =============================================================
// Content
// =============================================================

pub const BRAND: &str = "Fraido";
pub const TAGLINE: &str = "Faster access. Fewer tools.";
pub const CLAIM: &str = "Minimal diameter.";
pub const MOTTO: &str = "Life in control";
pub const COPYRIGHT: &str = "© 2025 Fraido S.r.l.";

pub const IDEA_IMAGE: &str = "https://fraido.it/assets/home/fraido_idea.png";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Idea", anchor: section::IDEA },
    NavLink { label: "Team", anchor: section::TEAM },
    NavLink { label: "Advisors", anchor: section::ADVISORS },
    NavLink { label: "Deck", anchor: section::DECK },
    NavLink { label: "Pitches", anchor: section::PITCHES },
    NavLink { label: "Contacts", anchor: section::CONTACTS },
];

/// Call-to-action on the right of the nav bar.
pub const NAV_CTA: NavLink = NavLink { label: "Contact", anchor: section::CONTACTS };

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Antonio Maria Vizioli",
        role: "CEO",
        bio: "Worked as a Nurse in England and throughout Italy. 5 years of experience in \
              Emergency Departments. He could strike up a conversation with a door knob, \
              and he will definitely end up pitching to it.",
        image: "https://fraido.it/assets/home/vizioli.png",
        profile_url: "https://www.linkedin.com/in/antonio-maria-vizioli-1a00a1200/",
        layout: CardLayout::Featured,
    },
    TeamMember {
        name: "Elia Fregonese",
        role: "CTO",
        bio: "Master Degree in Materials Engineering and Nanotechnology from Politecnico di \
              Milan. 4 years of experience as Thermo-Mechanical System Engineer. \
              Painstakingly attached to details and precision.",
        image: "https://fraido.it/assets/home/fregonese.png",
        profile_url: "https://it.linkedin.com/in/elia-fregonese-78a051108",
        layout: CardLayout::Compact,
    },
];

pub const ADVISORS: &[Advisor] = &[
    Advisor {
        name: "Giacomo Bellani",
        credentials: "Anesthetist - Head of ICU - Trento Hospital",
        image: "https://fraido.it/assets/home/bellani.png",
    },
    Advisor {
        name: "Marco Garroni",
        credentials: "Anesthetists - Airway Management Instructor",
        image: "https://fraido.it/assets/home/garroni.png",
    },
    Advisor {
        name: "Roberto Righetti",
        credentials: "Anesthetists - Airway Management Instructor",
        image: "https://fraido.it/assets/home/righetti.png",
    },
    Advisor {
        name: "Stefano Bonvini",
        credentials: "Vascular Surgeon - Head of Surgery - Trento Hospital",
        image: "https://fraido.it/assets/home/bonvini.png",
    },
];

pub const DECK: Deck = Deck {
    flipbook_url: "https://heyzine.com/flip-book/b21697f353.html",
    pdf_url: "https://fraido.it/assets/deck/Fraido_Deck.pdf",
};

pub const PITCHES: &[PitchResource] = &[
    PitchResource {
        title: "International Pitch",
        category: "Startupbreeze",
        video: VideoSource::YouTube("j_8j_8_8_8"),
        date: "October 2025",
    },
    PitchResource {
        title: "Official Presentation",
        category: "Italian",
        video: VideoSource::File("https://fraido.it/assets/pitches/Fraido_Italian_Presentation.mp4"),
        date: "September 2025",
    },
];

pub const CONTACTS: &[ContactChannel] = &[
    ContactChannel { kind: ContactKind::Email, label: "Email", value: "info@fraido.it" },
    ContactChannel { kind: ContactKind::Phone, label: "Phone", value: "+39 346 973 1543" },
];
