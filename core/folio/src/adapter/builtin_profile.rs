//! 組み込みプロフィール（profile.json が無いときに使う）

use crate::domain::{Contact, Profile, Project, Skill};

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn icon(name: &str, path: &str) -> Skill {
    Skill {
        name: name.to_string(),
        icon: Some(format!("{}/{}", DEVICON, path)),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            name: "FundingPe".to_string(),
            description: "A comprehensive mobile financial management application built with React Native and TypeScript. Features include modern UI components, cross-platform compatibility, SafeAreaView implementation, and robust navigation system. The app showcases professional purple-themed interface with optimized user experience and scalable architecture.".to_string(),
            summary: Some("Mobile financial management app built with React Native and TypeScript".to_string()),
            live_link: None,
            source_link: Some("https://github.com/RithikVerma/FundingPe".to_string()),
            category: Some("Featured Project".to_string()),
            role: Some("Mobile App Developer".to_string()),
            year: Some("2024".to_string()),
            tech: strings(&["React Native", "JavaScript", "Postman", "Firebase", "React Library"]),
            highlights: strings(&[
                "Modern Mobile Architecture with React Native and TypeScript",
                "Professional UI Theme with purple (#7B2AC2) interface",
                "Centralized Navigation System with AppNavigator",
                "Scalable Project Structure with modular components",
                "TypeScript Integration for enhanced code reliability",
            ]),
        },
        Project {
            name: "The Kick Store".to_string(),
            description: "A dynamic and interactive web application built using React, JavaScript, CSS, and HTML. Designed and developed with a focus on seamless user experience and clean, responsive UI. This project showcases front-end development expertise and the ability to create user-friendly, efficient web applications.".to_string(),
            summary: Some("Dynamic e-commerce web application with clean UI".to_string()),
            live_link: None,
            source_link: Some("https://github.com/RithikVerma/KickStore".to_string()),
            category: Some("Personal Project".to_string()),
            role: Some("Full Stack Developer".to_string()),
            year: Some("2024".to_string()),
            tech: strings(&["React", "JavaScript", "CSS", "HTML", "Tailwind CSS"]),
            highlights: Vec::new(),
        },
        Project {
            name: "Portfolio Website".to_string(),
            description: "Crafted a modern portfolio website using React and Tailwind CSS. Features include smooth page transitions, responsive design, interactive UI elements, and optimized performance. Implemented SEO best practices and accessibility standards.".to_string(),
            summary: Some("Modern portfolio with smooth transitions and responsive design".to_string()),
            live_link: Some("https://rithik-portfoli0.vercel.app/".to_string()),
            source_link: Some("https://github.com/RithikVerma/Portfolio".to_string()),
            category: Some("Personal Project".to_string()),
            role: Some("Designer & Developer".to_string()),
            year: Some("2024".to_string()),
            tech: strings(&["React", "Tailwind CSS", "Framer Motion", "Vite"]),
            highlights: Vec::new(),
        },
        Project {
            name: "UpSys Company Website".to_string(),
            description: "Designed and developed a modern company website for UpSys Technologies. Implemented responsive layouts, smooth animations, and optimized performance. The site features dynamic content management, interactive UI elements, and cross-browser compatibility.".to_string(),
            summary: Some("Modern company website with responsive layouts and dynamic content management".to_string()),
            live_link: Some("https://upsys.in".to_string()),
            source_link: None,
            category: Some("Featured Project".to_string()),
            role: Some("Lead Developer".to_string()),
            year: Some("2023".to_string()),
            tech: strings(&["React", "Tailwind CSS", "Framer Motion", "Firebase"]),
            highlights: Vec::new(),
        },
    ]
}

/// 組み込みプロフィール
pub fn builtin_profile() -> Profile {
    Profile {
        name: "Rithik Verma".to_string(),
        role: "Software Developer".to_string(),
        tagline: Some("I build things for the web and mobile.".to_string()),
        intro: Some("I'm a software engineer specializing in building exceptional digital experiences for web and mobile platforms. Currently, I'm focused on building accessible, human-centered products.".to_string()),
        about: strings(&[
            "Hello! I'm Rithik, a passionate software developer with a keen interest in creating exceptional digital experiences. My journey in programming began in 2024, and since then, I've been constantly learning and growing in the field.",
            "Currently, I'm focused on building accessible, user-friendly applications while learning new technologies. I enjoy working with modern frameworks and tools that help create efficient and scalable solutions.",
        ]),
        contact: Contact {
            email: Some("rverma8871@gmail.com".to_string()),
            phone: Some("+918770384600".to_string()),
            github: Some("https://github.com/RithikVerma".to_string()),
            linkedin: Some("https://linkedin.com/in/rithik-verma-508b04216".to_string()),
            portfolio: Some("https://rithik-portfoli0.vercel.app/".to_string()),
            resume: Some("https://drive.google.com/file/d/1LrRtLBXs7K0BDzzC57PYGJVKiUVwato_/view?usp=drivesdk".to_string()),
        },
        skills: strings(&[
            "React.js",
            "JavaScript (ES6+)",
            "Tailwind CSS",
            "Java",
            "C/C++",
            "SQL/MySQL",
            "Firebase",
            "Github",
        ]),
        showcase: vec![
            icon("React", "react/react-original.svg"),
            icon("React Native", "react/react-original.svg"),
            icon("HTML", "html5/html5-original.svg"),
            icon("JavaScript", "javascript/javascript-original.svg"),
            Skill {
                name: "Tailwind CSS".to_string(),
                icon: None,
            },
            icon("Java", "java/java-original.svg"),
            icon("C", "c/c-original.svg"),
            icon("C++", "cplusplus/cplusplus-original.svg"),
            icon("GitHub", "github/github-original.svg"),
            icon("Firebase", "firebase/firebase-plain.svg"),
            Skill {
                name: "Vite.js".to_string(),
                icon: Some("https://vitejs.dev/logo.svg".to_string()),
            },
            icon("MySQL", "mysql/mysql-original.svg"),
        ],
        projects: projects(),
        chat_projects: strings(&["UpSys Company Website", "The Kick Store", "Portfolio Website"]),
        contact_blurb: Some("I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_shape() {
        let p = builtin_profile();
        assert_eq!(p.first_name(), "Rithik");
        assert_eq!(p.projects.len(), 4);
        assert_eq!(p.skills.len(), 8);
        assert!(p.projects.iter().any(|p| p.live_link.is_none()));
        assert!(p.projects.iter().any(|p| p.source_link.is_none()));
    }
}
