use std::fmt;

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    RoleSelect,
    /// Department grid; employee path only.
    DeptGrid,
    Login,
    Chat,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::RoleSelect => "role-select",
            View::DeptGrid => "dept-grid",
            View::Login => "login",
            View::Chat => "chat",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
