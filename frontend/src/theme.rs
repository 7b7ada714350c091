//! Severity-tinted presentation.
//!
//! Each severity maps to exactly one entry of a fixed table. Colours are CSS
//! custom properties declared in `index.html`.

use common::model::analysis::Severity;

#[derive(Debug, PartialEq)]
pub struct Theme {
    pub background: &'static str,
    pub header_background: &'static str,
    pub card_background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub glow: &'static str,
    /// Material icon name.
    pub icon: &'static str,
}

static HEALTHY: Theme = Theme {
    background: "hsl(var(--healthy-bg))",
    header_background: "hsl(var(--healthy-bg-light))",
    card_background: "hsl(var(--healthy-bg-light))",
    accent: "hsl(var(--healthy-accent))",
    text: "hsl(var(--healthy-text))",
    glow: "var(--shadow-glow-healthy)",
    icon: "check_circle",
};

static MILD: Theme = Theme {
    background: "hsl(var(--mild-bg))",
    header_background: "hsl(var(--mild-bg-light))",
    card_background: "hsl(var(--mild-bg-light))",
    accent: "hsl(var(--mild-accent))",
    text: "hsl(var(--mild-text))",
    glow: "var(--shadow-glow-mild)",
    icon: "warning",
};

static SEVERE: Theme = Theme {
    background: "hsl(var(--severe-bg))",
    header_background: "hsl(var(--severe-bg-light))",
    card_background: "hsl(var(--severe-bg-light))",
    accent: "hsl(var(--severe-accent))",
    text: "hsl(var(--severe-text))",
    glow: "var(--shadow-glow-severe)",
    icon: "error",
};

pub fn theme_for(severity: Severity) -> &'static Theme {
    match severity {
        Severity::Healthy => &HEALTHY,
        Severity::Mild => &MILD,
        Severity::Severe => &SEVERE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_severity_has_its_own_theme() {
        assert_eq!(theme_for(Severity::Healthy).icon, "check_circle");
        assert_eq!(theme_for(Severity::Mild).icon, "warning");
        assert_eq!(theme_for(Severity::Severe).icon, "error");

        for (i, a) in Severity::ALL.iter().enumerate() {
            for b in &Severity::ALL[i + 1..] {
                assert_ne!(theme_for(*a), theme_for(*b));
            }
        }
    }

    #[test]
    fn mild_theme_uses_mild_palette() {
        let theme = theme_for(Severity::Mild);
        assert!(theme.background.contains("--mild-bg"));
        assert!(theme.accent.contains("--mild-accent"));
    }
}
