//! Capabilities consumed by the loader: applying and registering themes.
//!
//! Both are implemented for `FnMut(&str)` closures so callers can wire
//! existing UI code without a wrapper type.

/// Switches the active visual theme.
pub trait ThemeApplier {
    fn apply_theme(&mut self, id: &str);
}

impl<F> ThemeApplier for F
where
    F: FnMut(&str),
{
    fn apply_theme(&mut self, id: &str) {
        self(id)
    }
}

/// Tells the selection UI that a theme is available.
pub trait ThemeRegistrar {
    fn register_theme(&mut self, id: &str);
}

impl<F> ThemeRegistrar for F
where
    F: FnMut(&str),
{
    fn register_theme(&mut self, id: &str) {
        self(id)
    }
}

/// Ordered list of selectable theme cards.
#[derive(Debug, Clone, Default)]
pub struct ThemeCards {
    names: Vec<String>,
}

impl ThemeCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.iter().any(|name| name == id)
    }

    /// Numbered picker labels with an active-theme marker.
    pub fn picker_lines(&self, active: &str) -> Vec<String> {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let marker = if name == active { "*" } else { " " };
                format!("{}.{} {}", idx + 1, marker, name)
            })
            .collect()
    }
}

impl ThemeRegistrar for ThemeCards {
    fn register_theme(&mut self, id: &str) {
        self.names.push(id.to_string());
    }
}
