//! Type definitions for the application shell.

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum View {
    #[default]
    Home,
    Learn,
    Chat,
    Simulation,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 4] = [View::Home, View::Learn, View::Chat, View::Simulation];

    /// Label used in the sidebar and tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Inicio",
            View::Learn => "Aprender",
            View::Chat => "Asistente IA",
            View::Simulation => "Simulador",
        }
    }

    /// Position in [`View::ALL`].
    pub fn index(&self) -> usize {
        match self {
            View::Home => 0,
            View::Learn => 1,
            View::Chat => 2,
            View::Simulation => 3,
        }
    }

    /// Following view in navigation order, wrapping around.
    pub fn next(&self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(&self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(View::Home.next(), View::Learn);
        assert_eq!(View::Simulation.next(), View::Home);
        assert_eq!(View::Home.prev(), View::Simulation);
        for view in View::ALL {
            assert_eq!(view.next().prev(), view);
        }
    }
}
