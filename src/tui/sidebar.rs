/// Sidebar navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Cids,
    Procedimentos,
}

impl View {
    pub fn all() -> [View; 2] {
        [View::Cids, View::Procedimentos]
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Cids => "CIDs",
            View::Procedimentos => "Procedimentos",
        }
    }

    pub fn key_hint(&self) -> &'static str {
        match self {
            View::Cids => "F2",
            View::Procedimentos => "F3",
        }
    }
}
