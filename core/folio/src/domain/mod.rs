//! folio 固有のドメイン型（型と不変条件）

pub mod command;
pub mod keyword_rule;
pub mod profile;
pub mod reply_queue;
pub mod section;
pub mod settings;
pub mod template;
pub mod transcript;
pub mod widget;

pub use command::{FolioCommand, PageFormat};
pub use keyword_rule::{KeywordRule, Reply, Responder, RuleTable, Topic, Trigger};
pub use profile::{Contact, Profile, Project, Skill};
pub use reply_queue::{PendingReply, ReplyHandle, ReplyQueue};
pub use section::Section;
pub use settings::{ClosePolicy, Settings};
pub use transcript::{Message, Origin, Transcript};
pub use widget::{ChatWidget, Visibility};
