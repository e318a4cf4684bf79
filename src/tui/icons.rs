//! Icon keys → terminal glyphs.
//!
//! The core passes icon keys through untouched; this table is the only
//! place they get meaning. It is a `const` table, so nothing is rebuilt per
//! frame.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
    pub color: Color,
}

const ICONS: &[(&str, Icon)] = &[
    ("brain", Icon { glyph: "✺", color: Color::Blue }),
    ("branch", Icon { glyph: "⑂", color: Color::Green }),
    ("trend", Icon { glyph: "↗", color: Color::Magenta }),
];

const FALLBACK: Icon = Icon {
    glyph: "•",
    color: Color::Gray,
};

/// Unknown keys get a neutral bullet rather than an error.
pub fn lookup(key: &str) -> Icon {
    ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK)
}
