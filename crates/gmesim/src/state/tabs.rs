/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    Breakdown,
    Waterfall,
    Sensitivity,
    Comparison,
}

impl TabId {
    pub const ALL: [TabId; 5] = [
        TabId::Overview,
        TabId::Breakdown,
        TabId::Waterfall,
        TabId::Sensitivity,
        TabId::Comparison,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Breakdown => "Breakdown",
            TabId::Waterfall => "Waterfall",
            TabId::Sensitivity => "Sensitivity",
            TabId::Comparison => "Comparison",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::Breakdown => 1,
            TabId::Waterfall => 2,
            TabId::Sensitivity => 3,
            TabId::Comparison => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Overview),
            1 => Some(TabId::Breakdown),
            2 => Some(TabId::Waterfall),
            3 => Some(TabId::Sensitivity),
            4 => Some(TabId::Comparison),
            _ => None,
        }
    }
}
