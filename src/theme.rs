//! Visual theme: palette values exposed to CSS as custom properties.
//!
//! DESIGN
//! ======
//! Components style themselves with `var(--color-*)`, so switching palette
//! only touches the root element's `style` attribute.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

/// The app ships a single light scheme.
pub const COLOR_SCHEME: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette { primary: "#1976d2", secondary: "#dc004e" },
        }
    }
}

impl Theme {
    /// Inline `style` value declaring the palette as CSS custom properties.
    pub fn css_variables(&self) -> String {
        let Palette { primary, secondary } = self.palette;
        format!("color-scheme: {COLOR_SCHEME}; --color-primary: {primary}; --color-secondary: {secondary};")
    }
}

/// Root wrapper applying `theme` to everything rendered inside it.
#[component]
pub fn ThemeProvider(#[prop(optional)] theme: Theme, children: Children) -> impl IntoView {
    let style = theme.css_variables();
    provide_context(theme);

    view! {
        <div class="app-root" data-theme=COLOR_SCHEME style=style>
            {children()}
        </div>
    }
}
