//! Starter content written by `init` and served by `server --ephemeral`

use super::{
    Certification, Collections, ExperienceEntry, Narrative, Project, ProjectBody,
    TechStackCategory,
};

/// The site's initial document set
pub fn starter_collections() -> Collections {
    Collections {
        projects: starter_projects(),
        experience: vec![
            ExperienceEntry::new("Developer", "Sto. Tomas PDAO (Capstone)", "2025"),
            ExperienceEntry::new("Freelance UI Designer", "THEEA Agency (Australia)", "2025"),
            ExperienceEntry::new("Commissioned Artist", "Freelance (US Clients)", "2024"),
            ExperienceEntry::new("Student", "Batangas State University", "2022"),
            ExperienceEntry::new("Hello World! 👋", "Wrote my first line of code", "2022"),
        ],
        certifications: vec![
            Certification::new(
                "Microsoft Power BI Certification",
                "Microsoft",
                "2025",
                "Validated skills in data visualization, modeling, and analytics.",
            ),
            Certification::new(
                "Introduction to Cybersecurity",
                "Cisco Networking Academy",
                "2024",
                "Foundational knowledge in network security and threat protection.",
            ),
            Certification::new(
                "Tech Start-up Fundamentals",
                "BatStateU & HCMUTE",
                "2025",
                "Workshop on entrepreneurship and tech innovation.",
            ),
        ],
        tech_stack: vec![
            TechStackCategory::new(
                "Frontend",
                &["JavaScript", "HTML5", "CSS3", "Bootstrap", "Tailwind CSS", "Figma"],
            ),
            TechStackCategory::new(
                "Backend",
                &["PHP", "Node.js", "Express.js", "Python", "MySQL"],
            ),
            TechStackCategory::new(
                "Data & Tools",
                &["Power BI", "Git / GitHub", "VS Code", "Adobe Photoshop"],
            ),
        ],
    }
}

fn starter_projects() -> Vec<Project> {
    vec![
        narrative_project(
            "holiday-hunter",
            "Holiday Hunter",
            "Global Holiday Tracking Dashboard",
            &["Next.js", "Tailwind", "API Integration"],
            "https://imgur.com/a/MVjKpjy",
            "https://holiday-hunter.vercel.app",
            "Interactive dashboard analyzing global public holidays to find the 'laziest' countries.",
            Narrative {
                gist: "I wanted to create something fun that students would actually use. Holiday Hunter isn't just a calendar; it's a gamified dashboard that ranks countries by how many 'lazy days' they have.".to_string(),
                goal: "The main goal was to practice working with real-time Data APIs and visualizing that data using Recharts in a way that feels modern and playful.".to_string(),
                approach: "I used Next.js for server-side rendering to ensure the site is fast. For the data, I connected to the Nager.Date API. I spent a lot of time polishing the UI with Tailwind CSS to give it a 'Dark Mode' aesthetic.".to_string(),
                result: "It was a hit with my classmates! We now use it to plan our breaks. Technically, it helped me master API error handling and dynamic routing.".to_string(),
            },
        ),
        narrative_project(
            "cet-tracker",
            "CET Tracker PH",
            "University Entrance Exam Tracker",
            &["Next.js", "Supabase", "TypeScript"],
            "https://i.imgur.com/ba89mgV.png",
            "https://cet-tracker-app.vercel.app",
            "Track College Entrance Test schedules, requirements, and announcements for top PH universities.",
            Narrative {
                gist: "College applications are stressful. I built this to be the 'one-stop-shop' I wish I had when I was applying.".to_string(),
                goal: "To centralize scattered information from Facebook posts and university websites into one clean, searchable dashboard.".to_string(),
                approach: "I chose Supabase for the backend because I needed real-time updates. When a university changes a date, the site updates instantly for all users.".to_string(),
                result: "The project helped over 500 students during the last application season and taught me the importance of mobile-first design.".to_string(),
            },
        ),
        narrative_project(
            "pdao-portal",
            "PDAO Analytics Portal",
            "Government GIS System",
            &["PHP", "MySQL", "LeafletJS"],
            "https://placehold.co/600x400/10b981/FFF?text=PDAO+Analytics",
            "https://pdaohelps.online",
            "Full-stack system with GIS mapping and analytics dashboard for government use.",
            Narrative {
                gist: "A comprehensive system for the Persons with Disability Affairs Office.".to_string(),
                goal: "Automate demographic analysis and reporting.".to_string(),
                approach: "Built with raw PHP for legacy support and Leaflet for mapping.".to_string(),
                result: "Reduced reporting time by 40%.".to_string(),
            },
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn narrative_project(
    id: &str,
    title: &str,
    subtitle: &str,
    tags: &[&str],
    image: &str,
    link: &str,
    description: &str,
    narrative: Narrative,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        image: image.to_string(),
        link: Some(link.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: description.to_string(),
        body: ProjectBody::Narrative {
            narrative,
            gallery: Vec::new(),
        },
    }
}
