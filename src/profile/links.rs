//! Outbound link targets derived from profile data.

use super::record::Contact;

/// Which contact channel a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLinkKind {
    Email,
    ProfessionalNetwork,
    SourceHosting,
}

impl ContactLinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactLinkKind::Email => "Email",
            ContactLinkKind::ProfessionalNetwork => "LinkedIn",
            ContactLinkKind::SourceHosting => "GitHub",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ContactLinkKind::Email => "✉",
            ContactLinkKind::ProfessionalNetwork => "in",
            ContactLinkKind::SourceHosting => "⌥",
        }
    }
}

/// One entry of the Contact panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink<'a> {
    pub kind: ContactLinkKind,
    /// The address exactly as the profile supplies it.
    pub address: &'a str,
}

impl<'a> ContactLink<'a> {
    /// The three links the Contact panel shows, in display order.
    pub fn all(contact: &'a Contact) -> [ContactLink<'a>; 3] {
        [
            ContactLink {
                kind: ContactLinkKind::Email,
                address: &contact.email,
            },
            ContactLink {
                kind: ContactLinkKind::ProfessionalNetwork,
                address: &contact.linkedin_url,
            },
            ContactLink {
                kind: ContactLinkKind::SourceHosting,
                address: &contact.github_url,
            },
        ]
    }

    /// Text shown for the link: the address for email, the label otherwise.
    pub fn display_text(&self) -> &str {
        match self.kind {
            ContactLinkKind::Email => self.address,
            _ => self.kind.label(),
        }
    }

    /// The target handed to the OS opener.
    pub fn target(&self) -> String {
        match self.kind {
            ContactLinkKind::Email => mailto(self.address),
            _ => href_for(self.address),
        }
    }
}

/// `mailto:` target for an email address.
pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Open target for a web address, prepending `https://` if it has no scheme.
pub fn href_for(address: &str) -> String {
    let address = address.trim();
    if has_scheme(address) {
        address.to_string()
    } else {
        format!("https://{}", address)
    }
}

fn has_scheme(address: &str) -> bool {
    match address.find("://") {
        Some(pos) => {
            pos > 0
                && address[..pos]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => address.starts_with("mailto:"),
    }
}
