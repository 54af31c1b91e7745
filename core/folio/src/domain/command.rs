//! folio コマンドの enum（Command Pattern）
//!
//! CLI の解析結果をこの enum に落とし、main の Runner が match でディスパッチする。

use std::path::PathBuf;

/// ページの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    #[default]
    Html,
    Text,
}

impl PageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageFormat::Html => "html",
            PageFormat::Text => "text",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Some(PageFormat::Html),
            "text" | "txt" => Some(PageFormat::Text),
            _ => None,
        }
    }
}

/// folio の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum FolioCommand {
    /// ヘルプ表示
    Help,
    /// ページを描画して stdout またはファイルへ
    Render {
        format: PageFormat,
        out: Option<PathBuf>,
    },
    /// 1 回だけ応答を表示（遅延なし）
    Ask { message: String, explain: bool },
    /// 対話モード
    Chat {
        delay_ms: Option<u64>,
        suppress_on_close: bool,
    },
    /// 有効なルール表を優先順に表示
    Rules,
}
