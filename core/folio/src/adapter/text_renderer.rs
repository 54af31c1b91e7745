//! プレーンテキストでページを描画する PageRenderer（端末での確認用）

use crate::domain::{PageFormat, Profile, Section};
use crate::ports::outbound::PageRenderer;

#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

fn rule(out: &mut String, section: Section) {
    let title = section.heading().unwrap_or(section.title());
    out.push_str(&format!("{} {}\n", section.number(), title));
    out.push_str(&"=".repeat(title.chars().count() + 4));
    out.push('\n');
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
}

impl PageRenderer for TextRenderer {
    fn format(&self) -> PageFormat {
        PageFormat::Text
    }

    fn render(&self, profile: &Profile) -> String {
        let mut out = String::new();

        rule(&mut out, Section::Home);
        out.push_str("Hi, my name is\n");
        out.push_str(&format!("{}.\n", profile.name));
        if let Some(tagline) = &profile.tagline {
            out.push_str(&format!("{}\n", tagline));
        }
        if let Some(intro) = &profile.intro {
            out.push_str(&format!("\n{}\n", intro));
        }
        if let Some(resume) = &profile.contact.resume {
            out.push_str(&format!("Resume: {}\n", resume));
        }
        out.push('\n');

        rule(&mut out, Section::About);
        for para in &profile.about {
            out.push_str(&format!("{}\n\n", para));
        }
        if !profile.skills.is_empty() {
            out.push_str("Technologies I've been working with:\n");
            bullets(&mut out, &profile.skills);
            out.push('\n');
        }

        rule(&mut out, Section::Skills);
        let names: Vec<String> = profile
            .showcase_skills()
            .into_iter()
            .map(|s| s.name)
            .collect();
        bullets(&mut out, &names);
        out.push('\n');

        rule(&mut out, Section::Projects);
        for project in &profile.projects {
            match &project.category {
                Some(c) => out.push_str(&format!("* {} [{}]\n", project.name, c)),
                None => out.push_str(&format!("* {}\n", project.name)),
            }
            out.push_str(&format!("  {}\n", project.description));
            if !project.tech.is_empty() {
                out.push_str(&format!("  Tech: {}\n", project.tech.join(", ")));
            }
            if let Some(live) = &project.live_link {
                out.push_str(&format!("  Live: {}\n", live));
            }
            if let Some(source) = &project.source_link {
                out.push_str(&format!("  Source: {}\n", source));
            }
            out.push('\n');
        }
        if let Some(github) = &profile.contact.github {
            out.push_str(&format!("More Projects on GitHub: {}\n\n", github));
        }

        rule(&mut out, Section::Contact);
        if let Some(blurb) = &profile.contact_blurb {
            out.push_str(&format!("{}\n", blurb));
        }
        let c = &profile.contact;
        for (label, value) in [
            ("Email", &c.email),
            ("Phone", &c.phone),
            ("LinkedIn", &c.linkedin),
            ("GitHub", &c.github),
        ] {
            if let Some(v) = value {
                out.push_str(&format!("{}: {}\n", label, v));
            }
        }
        out.push('\n');
        out.push_str(&format!("Designed & Built by {}\n", profile.name));
        out
    }
}
