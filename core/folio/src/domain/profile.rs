//! プロフィール（ページと応答の両方が参照する静的データ）
//!
//! 起動時に一度だけ組み立て（組み込み or profile.json）、以後は変更しない。
//! リンク類は不透明な文字列として扱い、検証しない。

use serde::{Deserialize, Serialize};

/// 連絡先。各フィールドは任意で、無いものは描画・応答から省く。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub resume: Option<String>,
}

impl Contact {
    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|e| format!("mailto:{}", e))
    }

    pub fn tel(&self) -> Option<String> {
        self.phone.as_ref().map(|p| format!("tel:{}", p))
    }
}

/// Skills セクションに並べる 1 項目（アイコンは任意）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// プロジェクト 1 件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// 応答用の短い説明。無ければ description を使う。
    pub summary: Option<String>,
    pub live_link: Option<String>,
    pub source_link: Option<String>,
    pub category: Option<String>,
    pub role: Option<String>,
    pub year: Option<String>,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
}

impl Project {
    pub fn short_description(&self) -> &str {
        self.summary.as_deref().unwrap_or(&self.description)
    }
}

/// プロフィール全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    /// ヒーローの見出し（例: "I build things for the web and mobile."）
    pub tagline: Option<String>,
    pub intro: Option<String>,
    pub about: Vec<String>,
    pub contact: Contact,
    /// 応答と About の技術リストに使うラベル
    pub skills: Vec<String>,
    /// Skills セクション用。空なら skills をそのまま並べる。
    pub showcase: Vec<Skill>,
    pub projects: Vec<Project>,
    /// 応答で紹介するプロジェクト名（この順）。空なら projects をすべて。
    pub chat_projects: Vec<String>,
    /// Contact セクションの導入文
    pub contact_blurb: Option<String>,
}

impl Profile {
    /// 表示名の先頭語（"Rithik Verma" → "Rithik"）
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// 応答ウィジェットの初期メッセージ
    pub fn greeting(&self) -> String {
        format!(
            "Hi! I'm {}'s assistant. How can I help you today?",
            self.first_name()
        )
    }

    /// 応答で紹介するプロジェクト。chat_projects にあって projects に無い名前は飛ばす。
    pub fn chat_project_list(&self) -> Vec<&Project> {
        if self.chat_projects.is_empty() {
            return self.projects.iter().collect();
        }
        self.chat_projects
            .iter()
            .filter_map(|name| self.projects.iter().find(|p| &p.name == name))
            .collect()
    }

    /// Skills セクションに並べる項目（showcase が空なら skills から作る）
    pub fn showcase_skills(&self) -> Vec<Skill> {
        if !self.showcase.is_empty() {
            return self.showcase.clone();
        }
        self.skills
            .iter()
            .map(|s| Skill {
                name: s.clone(),
                icon: None,
            })
            .collect()
    }
}
