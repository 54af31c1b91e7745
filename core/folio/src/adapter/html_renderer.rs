//! HTML でページを描画する PageRenderer
//!
//! 装飾は持たず、セクション構造とリンクだけを出す。差し込む文字列はすべてエスケープする。
//! 値の無いリンクは要素ごと省く（空の href は出さない）。

use crate::domain::{PageFormat, Profile, Project, Section};
use crate::ports::outbound::PageRenderer;

const EXTERNAL: &str = r#" target="_blank" rel="noopener noreferrer""#;

/// HTML 特殊文字のエスケープ
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn link(href: &str, text: &str, external: bool) -> String {
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        escape(href),
        if external { EXTERNAL } else { "" },
        escape(text)
    )
}

/// 行単位で組み立てるバッファ
struct Page {
    out: String,
}

impl Page {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn tag(&mut self, tag: &str, text: &str) {
        self.line(&format!("<{tag}>{}</{tag}>", escape(text), tag = tag));
    }

    fn list<'a>(&mut self, class: Option<&str>, items: impl IntoIterator<Item = &'a str>) {
        let items: Vec<&str> = items.into_iter().collect();
        if items.is_empty() {
            return;
        }
        match class {
            Some(c) => self.line(&format!(r#"<ul class="{}">"#, c)),
            None => self.line("<ul>"),
        }
        for item in items {
            self.tag("li", item);
        }
        self.line("</ul>");
    }

    fn open_section(&mut self, section: Section) {
        self.line(&format!(r#"<section id="{}">"#, section.id()));
        if let Some(h) = section.heading() {
            self.tag("h2", h);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn nav(page: &mut Page) {
        page.line("<nav>");
        page.line("<ul>");
        for s in Section::ALL {
            page.line(&format!(
                r##"<li><a href="#{}">{} {}</a></li>"##,
                s.id(),
                s.number(),
                s.title()
            ));
        }
        page.line("</ul>");
        page.line("</nav>");
    }

    fn home(page: &mut Page, profile: &Profile) {
        page.open_section(Section::Home);
        page.tag("p", "Hi, my name is");
        page.tag("h1", &format!("{}.", profile.name));
        if let Some(tagline) = &profile.tagline {
            page.tag("h2", tagline);
        }
        if let Some(intro) = &profile.intro {
            page.tag("p", intro);
        }
        let mut actions = vec![link("#projects", "Check out my work", false)];
        if let Some(resume) = &profile.contact.resume {
            actions.push(link(resume, "Resume", true));
        }
        page.line(&format!("<p>{}</p>", actions.join(" ")));
        page.line("</section>");
    }

    fn about(page: &mut Page, profile: &Profile) {
        page.open_section(Section::About);
        for para in &profile.about {
            page.tag("p", para);
        }
        if !profile.skills.is_empty() {
            page.tag("p", "Technologies I've been working with:");
            page.list(None, profile.skills.iter().map(String::as_str));
        }
        page.line("</section>");
    }

    fn skills(page: &mut Page, profile: &Profile) {
        page.open_section(Section::Skills);
        let skills = profile.showcase_skills();
        if skills.is_empty() {
            page.line("</section>");
            return;
        }
        page.line(r#"<ul class="skills">"#);
        for skill in skills {
            match &skill.icon {
                Some(icon) => page.line(&format!(
                    r#"<li><img src="{}" alt="{}"> {}</li>"#,
                    escape(icon),
                    escape(&skill.name),
                    escape(&skill.name)
                )),
                None => page.tag("li", &skill.name),
            }
        }
        page.line("</ul>");
        page.line("</section>");
    }

    fn project(page: &mut Page, project: &Project) {
        page.line("<article>");
        if let Some(category) = &project.category {
            page.line(&format!(r#"<p class="category">{}</p>"#, escape(category)));
        }
        page.tag("h3", &project.name);
        page.tag("p", &project.description);
        page.list(
            Some("highlights"),
            project.highlights.iter().map(String::as_str),
        );
        page.list(Some("tech"), project.tech.iter().map(String::as_str));
        let meta: Vec<&str> = [project.role.as_deref(), project.year.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !meta.is_empty() {
            page.line(&format!(r#"<p class="meta">{}</p>"#, escape(&meta.join(" · "))));
        }
        let mut links = Vec::new();
        if let Some(live) = &project.live_link {
            links.push(link(live, "Live", true));
        }
        if let Some(source) = &project.source_link {
            links.push(link(source, "Source", true));
        }
        if !links.is_empty() {
            page.line(&format!(r#"<p class="links">{}</p>"#, links.join(" ")));
        }
        page.line("</article>");
    }

    fn projects(page: &mut Page, profile: &Profile) {
        page.open_section(Section::Projects);
        for project in &profile.projects {
            Self::project(page, project);
        }
        if let Some(github) = &profile.contact.github {
            page.line(&format!("<p>{}</p>", link(github, "More Projects on GitHub", true)));
        }
        page.line("</section>");
    }

    fn contact(page: &mut Page, profile: &Profile) {
        page.open_section(Section::Contact);
        if let Some(blurb) = &profile.contact_blurb {
            page.tag("p", blurb);
        }
        let c = &profile.contact;
        let entries = [
            (c.mailto(), "Email", false),
            (c.tel(), "Phone", false),
            (c.linkedin.clone(), "LinkedIn", true),
            (c.github.clone(), "GitHub", true),
        ];
        let items: Vec<String> = entries
            .iter()
            .filter_map(|(href, text, external)| {
                href.as_ref().map(|h| format!("<li>{}</li>", link(h, text, *external)))
            })
            .collect();
        if !items.is_empty() {
            page.line(r#"<ul class="contact">"#);
            for item in items {
                page.line(&item);
            }
            page.line("</ul>");
        }
        page.line("</section>");
    }
}

impl PageRenderer for HtmlRenderer {
    fn format(&self) -> PageFormat {
        PageFormat::Html
    }

    fn render(&self, profile: &Profile) -> String {
        let mut page = Page::new();
        page.line("<!DOCTYPE html>");
        page.line(r#"<html lang="en">"#);
        page.line("<head>");
        page.line(r#"<meta charset="utf-8">"#);
        page.line(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
        page.tag("title", &format!("{} | {}", profile.name, profile.role));
        page.line("</head>");
        page.line("<body>");
        Self::nav(&mut page);
        page.line("<main>");
        Self::home(&mut page, profile);
        Self::about(&mut page, profile);
        Self::skills(&mut page, profile);
        Self::projects(&mut page, profile);
        Self::contact(&mut page, profile);
        page.line("</main>");
        page.line("<footer>");
        page.tag("p", &format!("Designed & Built by {}", profile.name));
        page.line("</footer>");
        page.line("</body>");
        page.line("</html>");
        page.out
    }
}
