//! Built-in profile used when no profile file is configured.

use super::record::{Contact, ProfileRecord, Project, Skill, SkillIcon};

const BIO: &str = "Hi! I'm Anuj Kumar a passionate third-year B.Tech student specializing in \
Computer Science and Engineering at Parul University. I have a keen interest in exploring the \
dynamic world of technology and innovation. Whether it's coding, problem-solving, or building \
creative solutions, I'm always eager to learn and grow. My academic journey has equipped me with \
a strong foundation in programming, data structures, and algorithms, alongside exposure to modern \
tools and technologies. I'm particularly interested in web development, Full Stack Development, \
MERN Stack etc. I strive to combine my technical knowledge with creativity to develop impactful \
projects and solutions.";

fn project(
    title: &str,
    description: &str,
    image_url: &str,
    technologies: &[&str],
    live_url: &str,
    github_url: &str,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        live_url: live_url.to_string(),
        github_url: github_url.to_string(),
    }
}

impl ProfileRecord {
    /// The sample portfolio: 9 skills, 3 projects.
    pub fn sample() -> Self {
        Self {
            name: "Anuj Kumar".to_string(),
            title: "Full Stack Developer".to_string(),
            image_url:
                "https://img.freepik.com/free-vector/programming-concept-illustration_114360-1351.jpg"
                    .to_string(),
            bio: BIO.to_string(),
            skills: vec![
                Skill::new("React", SkillIcon::React),
                Skill::new("JavaScript", SkillIcon::JavaScript),
                Skill::new("Node.js", SkillIcon::NodeJs),
                Skill::new("Core Java", SkillIcon::Java),
                Skill::new("MySQL", SkillIcon::MySql),
                Skill::new("HTML", SkillIcon::Html),
                Skill::new("CSS", SkillIcon::Css),
                Skill::new("Docker", SkillIcon::Docker),
                Skill::new("Git", SkillIcon::Git),
            ],
            projects: vec![
                project(
                    "File comprision using huffman coding",
                    "The File Compressor is a Python-based application with a graphical user \
                     interface (GUI) built using tkinter. It allows users to easily compress files \
                     into zip archives and decompress zip files into specified directories.",
                    "https://img.freepik.com/free-vector/artificial-intelligence-concept-illustration_114360-7135.jpg",
                    &["Python", "GUI"],
                    "https://example.com/code-assistan",
                    "https://github.com/anuj-143/DSA_Project",
                ),
                project(
                    "Distributed Database System",
                    "Implemented a scalable distributed database system with fault tolerance and \
                     data replication. Supports high availability and horizontal scaling.",
                    "https://img.freepik.com/free-vector/server-room-rack-blockchain-technology-token-api-access-data-center_39422-442.jpg",
                    &["Java", "Docker", "Redis", "PostgreSQL"],
                    "https://example.com/distributed-db",
                    "https://github.com/username/distributed-db",
                ),
                project(
                    "Real-time Analytics Platform",
                    "Built a real-time data analytics platform processing millions of events per \
                     second. Features interactive dashboards and customizable alerts.",
                    "https://img.freepik.com/free-vector/gradient-stock-market-concept_23-2149166910.jpg",
                    &["React", "Node.js", "Kafka", "ElasticSearch"],
                    "https://example.com/analytics",
                    "https://github.com/username/analytics",
                ),
            ],
            contact: Contact {
                email: "anujkeshri449@gmail.com".to_string(),
                linkedin_url: "https://www.linkedin.com/in/anuj-keshri-6346442a7/".to_string(),
                github_url: "github.com/anuj-143/".to_string(),
                leetcode_url: "https://leetcode.com/anujkeshri449/".to_string(),
            },
        }
    }
}
