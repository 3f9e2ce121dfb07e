//! Static content rendered by the page sections.

pub const ALL_CATEGORIES: &str = "All";

pub struct SiteConfig {
    pub brand: (&'static str, &'static str),
    pub owner: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub twitter: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    brand: ("NG", "Codes"),
    owner: "Akram",
    headline: "Innovative Solutions",
    tagline: "Software Developer, Web Developer, and Network Engineer specializing in creating cutting-edge digital experiences and powerful applications.",
    email: "akram@ngcodes.com",
    phone: "+1 (555) 123-4567",
    phone_href: "tel:+15551234567",
    location: "New York, NY 10001",
    linkedin: "#",
    github: "#",
    twitter: "#",
};

pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Portfolio", href: "#portfolio" },
    NavItem { name: "Blog", href: "#blog" },
    NavItem { name: "Contact", href: "#contact" },
];

pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2016",
        title: "Bachelor's in Computer Science",
        description: "Graduated with honors, specializing in software engineering.",
    },
    TimelineEntry {
        year: "2018",
        title: "Software Developer at TechCorp",
        description: "Led development of enterprise applications using modern frameworks.",
    },
    TimelineEntry {
        year: "2020",
        title: "Senior Web Developer",
        description: "Created cutting-edge web solutions for Fortune 500 clients.",
    },
    TimelineEntry {
        year: "2021",
        title: "Network Engineering Certification",
        description: "Expanded expertise into network infrastructure and security.",
    },
    TimelineEntry {
        year: "2023",
        title: "Launched Freelance Business",
        description: "Founded NG Codes, providing full-stack development solutions.",
    },
];

pub const TRAITS: &[&str] = &[
    "Problem Solver",
    "Creative Thinker",
    "Detail-Oriented",
    "Collaborative",
    "Continuous Learner",
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub description: &'static str,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill { name: "React", level: 95, description: "Building interactive UIs with React and Next.js" },
            Skill { name: "JavaScript", level: 90, description: "ES6+, TypeScript, and modern JS frameworks" },
            Skill { name: "CSS/SCSS", level: 85, description: "Responsive design with TailwindCSS and styled-components" },
            Skill { name: "Vue.js", level: 75, description: "Component-based UIs with Vue.js ecosystem" },
            Skill { name: "UI/UX", level: 80, description: "Designing intuitive user interfaces and experiences" },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 90, description: "RESTful APIs and server-side applications" },
            Skill { name: "Python", level: 85, description: "Web frameworks, data processing, and automation" },
            Skill { name: "Databases", level: 85, description: "SQL, NoSQL, and database optimization" },
            Skill { name: "GraphQL", level: 70, description: "Schema design and efficient data querying" },
            Skill { name: "Java", level: 75, description: "Enterprise applications and Android development" },
        ],
    },
    SkillCategory {
        name: "DevOps & Networking",
        skills: &[
            Skill { name: "Docker", level: 85, description: "Containerization and orchestration" },
            Skill { name: "AWS", level: 80, description: "Cloud infrastructure and serverless architecture" },
            Skill { name: "CI/CD", level: 75, description: "Automated testing and deployment pipelines" },
            Skill { name: "Network Security", level: 80, description: "Implementing secure network protocols" },
            Skill { name: "Infrastructure", level: 85, description: "Designing and managing network infrastructure" },
        ],
    },
];

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "Git",
    "Figma",
    "Testing",
    "Redux",
    "MongoDB",
    "Express",
    "Firebase",
    "Laravel",
    "WordPress",
    "SEO",
    "Mobile-First Design",
    "Performance Optimization",
    "Agile",
    "SCRUM",
    "REST API",
];

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: &'static str,
    pub detailed_description: &'static str,
}

impl Project {
    /// Technology chips shown on a card, plus how many were left out.
    pub fn preview_technologies(&self, max: usize) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(max);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        category: "Web Development",
        image: "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?q=80&w=500&auto=format&fit=crop",
        description: "A full-featured e-commerce platform with shopping cart, payment processing, and admin dashboard.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Redux"],
        demo_url: "#",
        github_url: "#",
        detailed_description: "This comprehensive e-commerce solution provides businesses with everything they need to sell products online. The platform includes user authentication, product catalog management, shopping cart functionality, secure payment processing via Stripe, order management, and an intuitive admin dashboard for monitoring sales and inventory.",
    },
    Project {
        id: 2,
        title: "Financial Analytics Dashboard",
        category: "Software Development",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=500&auto=format&fit=crop",
        description: "Interactive dashboard for visualizing and analyzing financial data with real-time updates.",
        technologies: &["React", "D3.js", "Node.js", "PostgreSQL", "WebSockets"],
        demo_url: "#",
        github_url: "#",
        detailed_description: "This financial analytics dashboard provides real-time visualization of complex financial datasets. It features interactive charts and graphs, customizable views, data filtering capabilities, and automated reporting. The application uses WebSockets for real-time updates and implements advanced data processing algorithms for trend analysis and predictive insights.",
    },
    Project {
        id: 3,
        title: "Smart Home Network System",
        category: "Network Engineering",
        image: "https://images.unsplash.com/photo-1558002038-1055952a6c91?q=80&w=500&auto=format&fit=crop",
        description: "Secure and scalable network infrastructure for smart home devices and automation.",
        technologies: &["IoT", "MQTT", "Network Security", "Raspberry Pi", "Python"],
        demo_url: "#",
        github_url: "#",
        detailed_description: "This smart home network system provides a secure and reliable infrastructure for connecting and managing various IoT devices. The solution includes network segmentation for enhanced security, automated device discovery and configuration, centralized management console, and advanced authentication mechanisms to prevent unauthorized access.",
    },
    Project {
        id: 4,
        title: "AI Content Generator",
        category: "Software Development",
        image: "https://images.unsplash.com/photo-1515378791036-0648a3ef77b2?q=80&w=500&auto=format&fit=crop",
        description: "ML-powered application that generates content based on user preferences and industry trends.",
        technologies: &["Python", "TensorFlow", "NLP", "Flask", "React"],
        demo_url: "#",
        github_url: "#",
        detailed_description: "This AI-powered content generation tool leverages advanced machine learning algorithms to create high-quality, contextually relevant content based on user inputs and industry trends. The application includes sentiment analysis, keyword optimization, tone adjustment, and various content formats tailored to different platforms and audiences.",
    },
    Project {
        id: 5,
        title: "Virtual Reality Tour Platform",
        category: "Web Development",
        image: "https://images.unsplash.com/photo-1622979135225-d2ba269cf1ac?q=80&w=500&auto=format&fit=crop",
        description: "Interactive VR platform for virtual property tours and immersive experiences.",
        technologies: &["Three.js", "WebVR", "React", "WebGL", "Node.js"],
        demo_url: "#",
        github_url: "#",
        detailed_description: "This virtual reality platform enables users to create, share, and experience immersive 3D tours. Built with cutting-edge WebVR technologies, the platform supports 360° panoramic views, interactive hotspots, spatial audio, and customizable navigation. It's optimized for various devices including VR headsets, desktop browsers, and mobile devices.",
    },
    Project {
        id: 6,
        title: "Secure Messaging App",
        category: "Network Engineering",
        image: "https://images.unsplash.com/photo-1529156069898-49953e39b3ac?q=80&w=500&auto=format&fit=crop",
        description: "End-to-end encrypted messaging application for secure communications.",
        technologies: &["React Native", "Cryptography", "Firebase", "WebRTC", "Redux"],
        demo_url: "#",
        github_url: "#",
        detailed_description: "This secure messaging application provides end-to-end encrypted communication channels for sensitive conversations. The app implements advanced cryptographic protocols to ensure message privacy, features self-destructing messages, secure file sharing, and verification mechanisms to prevent man-in-the-middle attacks while maintaining a user-friendly interface.",
    },
];

/// Filter buttons: "All" followed by each project category in first-seen order.
pub fn project_categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for project in PROJECTS {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

pub fn filter_projects(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub const QUICK_LINKS: &[&str] = &["Home", "About", "Services", "Portfolio", "Blog", "Contact"];

pub const SERVICES: &[&str] = &[
    "Software Development",
    "Web Development",
    "Network Engineering",
    "UI/UX Design",
    "Cloud Solutions",
    "IT Consulting",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_unique<T: Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> bool {
        let mut seen = HashSet::new();
        items.into_iter().all(|item| seen.insert(item))
    }

    #[test]
    fn test_project_categories() {
        assert_eq!(
            project_categories(),
            vec![
                "All",
                "Web Development",
                "Software Development",
                "Network Engineering"
            ]
        );
    }

    #[test]
    fn test_filter_projects() {
        assert_eq!(filter_projects(ALL_CATEGORIES).len(), PROJECTS.len());

        let network = filter_projects("Network Engineering");
        let ids: Vec<u32> = network.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 6]);

        assert!(filter_projects("Gardening").is_empty());
    }

    #[test]
    fn test_preview_technologies() {
        let project = find_project(1).expect("project 1 should exist");
        let (shown, hidden) = project.preview_technologies(3);
        assert_eq!(shown, &["React", "Node.js", "MongoDB"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = project.preview_technologies(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_static_data_is_consistent() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            assert!(category.skills.iter().all(|s| s.level <= 100));
        }
        assert!(all_unique(PROJECTS.iter().map(|p| p.id)));
        assert!(all_unique(SKILL_CATEGORIES.iter().map(|c| c.name)));
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
        assert!(find_project(99).is_none());
    }

    #[test]
    fn test_uniqueness_check_sees_scattered_duplicates() {
        assert!(all_unique([1, 2, 3]));
        assert!(!all_unique([1, 2, 1]));
        assert!(!all_unique(["Web", "Network", "Web"]));
    }
}
