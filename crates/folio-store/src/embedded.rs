//! Built-in portfolio content.

use folio_types::{Experience, ExperienceType, Project, Skill};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill::new(
            "Languages",
            "☕",
            ["Java", "Python", "JavaScript", "TypeScript", "SQL"],
        ),
        Skill::new(
            "Backend & Frameworks",
            "⚙️",
            ["Spring Boot", "Node.js", "Express", "REST APIs", "JUnit"],
        ),
        Skill::new(
            "Cloud & DevOps",
            "☁️",
            ["AWS Lambda", "API Gateway", "DynamoDB", "S3", "Docker", "GitHub Actions"],
        ),
        Skill::new(
            "Databases & Data",
            "🗄️",
            ["MongoDB", "PostgreSQL", "MySQL", "DynamoDB", "Redis"],
        ),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "qr-code-generator".into(),
            title: "QR Code Generator API".into(),
            kind: "Microservice".into(),
            description: "Production-ready Spring Boot REST API for generating customizable QR codes. \
                Features comprehensive input validation, proper HTTP status codes, \
                configurable parameters, and full test coverage."
                .into(),
            technologies: strings(&["Java 17", "Spring Boot", "ZXing", "JUnit", "Maven"]),
            github_url: "https://github.com/mrNiiAmatey/QRCode-Generator".into(),
            demo_url: None,
            icon: "🔲".into(),
            highlights: strings(&[
                "RESTful API design with proper status codes",
                "Comprehensive input validation",
                "Full test coverage with JUnit",
                "Professional JavaDoc documentation",
            ]),
        },
        Project {
            id: "aws-qa-platform".into(),
            title: "AWS Q&A Platform".into(),
            kind: "Full-Stack Serverless".into(),
            description: "Secure serverless application with Angular frontend deployed on AWS infrastructure. \
                Features IAM-secured CRUD APIs, CORS configuration, and S3/CloudFront static hosting."
                .into(),
            technologies: strings(&["AWS Lambda", "API Gateway", "DynamoDB", "Angular", "IAM"]),
            github_url: "https://github.com/mrNiiAmatey/FullStackII_SNHU_AWS_Conpect".into(),
            demo_url: None,
            icon: "☁️".into(),
            highlights: strings(&[
                "Serverless architecture on AWS",
                "IAM security implementation",
                "S3/CloudFront deployment",
                "Full CRUD operations",
            ]),
        },
        Project {
            id: "mean-travel".into(),
            title: "MEAN Travel Platform".into(),
            kind: "Full-Stack Web App".into(),
            description: "Full-stack web application demonstrating MVC architecture with secure admin interface, \
                RESTful API integration, and component-based frontend architecture."
                .into(),
            technologies: strings(&["MongoDB", "Express.js", "Angular", "Node.js"]),
            github_url: "https://github.com/mrNiiAmatey/cs465_FULLSTACK".into(),
            demo_url: None,
            icon: "🌐".into(),
            highlights: strings(&[
                "MVC architecture pattern",
                "Secure admin interface",
                "RESTful API design",
                "Component-based frontend",
            ]),
        },
        Project {
            id: "deep-q-learning".into(),
            title: "Deep Q-Learning Agent".into(),
            kind: "Machine Learning".into(),
            description: "Reinforcement learning agent using Deep Q-Networks to solve pathfinding challenges. \
                Implements experience replay and epsilon-greedy exploration strategies."
                .into(),
            technologies: strings(&["Python", "Keras", "TensorFlow", "NumPy"]),
            github_url: "https://github.com/mrNiiAmatey/CS370Deep_Q-Learning".into(),
            demo_url: None,
            icon: "🤖".into(),
            highlights: strings(&[
                "Deep Q-Network implementation",
                "Experience replay buffer",
                "Epsilon-greedy exploration",
                "Neural network architecture",
            ]),
        },
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience::new(
            "2023 — Expected 2025",
            "B.S. Computer Science",
            "Southern New Hampshire University",
            "Coursework in software engineering, data structures, algorithms, \
             cloud computing, and machine learning. Building production-grade \
             applications as part of capstone projects.",
            ExperienceType::Education,
        ),
        Experience::new(
            "Current",
            "Certified Pharmacy Technician",
            "Walmart",
            "Developed strong attention to detail, accuracy under pressure, \
             and customer service skills while pursuing software engineering career transition.",
            ExperienceType::Work,
        ),
        Experience::new(
            "Ongoing",
            "Continuous Learning",
            "Self-Directed",
            "Active competitive programming practice on HackerRank and LeetCode. \
             Deepening expertise in Java multithreading, system design, and enterprise architecture patterns.",
            ExperienceType::Other,
        ),
    ]
}
