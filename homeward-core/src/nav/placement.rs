//! Where the home button goes.
//!
//! Strategies are tried in order against what the page offers; the floating
//! corner always applies, so resolution never fails.

/// Header-like containers, most specific first.
pub const HEADER_SELECTORS: [&str; 3] = ["header", ".glass.hero", ".glass"];

/// Branding containers looked up inside the header.
pub const BRANDING_SELECTORS: [&str; 2] = [".logo-container", ".logo"];

/// What the host found on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub has_header: bool,
    /// A branding element with a parent, inside the header.
    pub has_branding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    AfterBranding,
    AppendToHeader,
    FloatCorner,
}

impl Placement {
    pub const CHAIN: [Self; 3] = [Self::AfterBranding, Self::AppendToHeader, Self::FloatCorner];

    #[must_use]
    pub const fn applies(self, layout: &PageLayout) -> bool {
        match self {
            Self::AfterBranding => layout.has_header && layout.has_branding,
            Self::AppendToHeader => layout.has_header,
            Self::FloatCorner => true,
        }
    }

    #[must_use]
    pub fn resolve(layout: &PageLayout) -> Self {
        Self::CHAIN
            .into_iter()
            .find(|strategy| strategy.applies(layout))
            .unwrap_or(Self::FloatCorner)
    }

    /// Inline style added on top of the button's base look.
    #[must_use]
    pub const fn extra_style(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::AfterBranding => &[("margin-left", "12px")],
            Self::AppendToHeader => &[],
            Self::FloatCorner => &[
                ("position", "fixed"),
                ("left", "18px"),
                ("bottom", "18px"),
                ("box-shadow", "0 8px 24px rgba(0,0,0,0.45)"),
                ("z-index", "99999"),
            ],
        }
    }
}
