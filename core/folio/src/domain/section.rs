//! ページのセクション（固定順）

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// 描画順
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// アンカー id
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// ナビゲーションの表示名
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// セクション見出し（Home は見出しを持たない）
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Section::Home => None,
            Section::About => Some("About Me"),
            Section::Skills => Some("Skills"),
            Section::Projects => Some("My Projects"),
            Section::Contact => Some("Get In Touch"),
        }
    }

    /// "01." 形式の番号
    pub fn number(&self) -> String {
        let index = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        format!("{:02}.", index + 1)
    }
}
