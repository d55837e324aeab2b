/// One of the four mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Label shown on the navigation trigger.
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Heading shown at the top of the panel.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact Me",
        }
    }

    /// Position in navigation order.
    pub fn index(&self) -> usize {
        match self {
            Section::About => 0,
            Section::Skills => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping from Contact to About.
    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping from About to Contact.
    pub fn prev(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
