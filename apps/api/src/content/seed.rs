//! Seed dataset for the content store. Pure data, no logic.

use super::models::{
    Certificate, EventItem, EventStat, EventStatus, Experience, Metric, Profile, Project,
    SkillGroup,
};
use super::ContentStore;

fn s(v: &str) -> String {
    v.to_string()
}

fn strings(vs: &[&str]) -> Vec<String> {
    vs.iter().map(|v| v.to_string()).collect()
}

fn metrics(vs: &[(&str, &str)]) -> Vec<Metric> {
    vs.iter()
        .map(|(label, value)| Metric {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn stats(vs: &[(&str, &str)]) -> Vec<EventStat> {
    vs.iter()
        .map(|(label, value)| EventStat {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

pub(super) fn build() -> ContentStore {
    ContentStore {
        profile: profile(),
        contact_email: s("mabautista358@gmail.com"),
        work_experience: work_experience(),
        leadership_experience: leadership_experience(),
        projects: projects(),
        certificates: certificates(),
        events: events(),
        skills: strings(&[
            "C/C++",
            "Python",
            "MATLAB",
            "Embedded Systems",
            "RTOS",
            "Hardware Design",
            "PCB Design",
            "Project Management",
            "Agile/Scrum",
            "React/TypeScript",
            "Vehicle Dynamics",
            "SimScale/FEA",
        ]),
        resume_skills: resume_skills(),
    }
}

fn profile() -> Profile {
    Profile {
        name: s("Marco Antonio Bautista"),
        title: s("Future Formula 1 Engineer & Innovator"),
        tagline: s(
            "Specializing in hardware design, embedded systems, and performance-driven technology.",
        ),
        about: s(
            "Passionate future Formula 1 engineer and innovator, specializing in hardware design, \
             embedded systems, and performance-driven technology. Proven leader in diverse, \
             high-impact teams, driving bold ideas, technical rigor, and collaborative solutions \
             for next-gen motorsport. Eager to help shape Cadillac F1's start-up culture and leave \
             a mark on the team, the car, and the sport.",
        ),
        avatar_url: s("/1111.png"),
        logo_url: s("/M(1).png"),
    }
}

fn work_experience() -> Vec<Experience> {
    vec![
        Experience {
            id: s("work-1"),
            role: s("Technical Project Manager Intern"),
            company: s("BlackRock"),
            period: s("Jun 2025 – Aug 2025"),
            location: s("New York, NY"),
            description: s(
                "Directed a cross-functional team of engineers and analysts automating workflows, \
                 reducing manual workload by 35% and saving 10+ hours weekly. Designed and \
                 deployed scalable cloud data solutions, accelerating data access by 40% for \
                 8,000+ end users. Implemented Agile/Scrum pipelines, decreasing release cycle by \
                 28% and error rates by 17%.",
            ),
            skills: strings(&["Python", "Cloud Architecture", "Agile", "Automation"]),
            metrics: metrics(&[
                ("Manual Workload", "-35%"),
                ("User Reach", "8,000+"),
                ("Release Time", "-28%"),
            ]),
            logo: s("blk"),
            color: s("blue"),
        },
        Experience {
            id: s("work-2"),
            role: s("Peer Mentor"),
            company: s("New Jersey Institute of Technology"),
            period: s("Aug 2025 – Present"),
            location: s("Newark, NJ"),
            description: s(
                "Mentored 40+ underclassmen in embedded systems, digital logic, and project-based \
                 coursework, increasing student success and technical proficiency by 40%. \
                 Organized weekly technical workshops supporting 50+ attendees, with 37% mentee \
                 placement growth.",
            ),
            skills: strings(&["Embedded Systems", "Digital Logic", "Mentorship", "Teaching"]),
            metrics: metrics(&[
                ("Students Mentored", "40+"),
                ("Placement Growth", "+37%"),
                ("Proficiency", "+40%"),
            ]),
            logo: s("njit"),
            color: s("red"),
        },
    ]
}

fn leadership_experience() -> Vec<Experience> {
    vec![
        Experience {
            id: s("lead-1"),
            role: s("Community Outreach Director"),
            company: s("NJIT SHPE"),
            period: s("May 2025 – Present"),
            location: s("Newark, NJ"),
            description: s(
                "Directed strategy and execution for 15+ initiatives with university and industry \
                 partners; expanded the chapter to 150+ members. Led 10+ professional events, \
                 achieving 45% recruitment growth and 90% satisfaction.",
            ),
            skills: strings(&[
                "Strategic Planning",
                "Event Management",
                "Recruitment",
                "Public Relations",
            ]),
            metrics: metrics(&[
                ("Chapter Growth", "150+"),
                ("Recruitment", "+45%"),
                ("Satisfaction", "90%"),
            ]),
            logo: s("shpe"),
            color: s("orange"),
        },
        Experience {
            id: s("lead-2"),
            role: s("Community Service Coordinator"),
            company: s("NJIT Senate"),
            period: s("Aug 2024 – Present"),
            location: s("Newark, NJ"),
            description: s(
                "Forged and managed 10+ strategic partnerships, delivering 350+ service hours with \
                 95% volunteer retention. Led civic campaigns, boosting student voter turnout by \
                 15%. Built a digital tracking platform for volunteer impact.",
            ),
            skills: strings(&[
                "Partnerships",
                "Civic Engagement",
                "Operations",
                "Volunteer Mgmt",
            ]),
            metrics: metrics(&[
                ("Service Hours", "350+"),
                ("Retention", "95%"),
                ("Partnerships", "10+"),
            ]),
            logo: s("senate"),
            color: s("purple"),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: s("1"),
            title: s("Motorsport Vehicle Digital Twin"),
            category: s("Motorsport Engineering"),
            description: s(
                "A high-fidelity simulation of F1 suspension dynamics using Finite Element Analysis.",
            ),
            long_description: s(
                "A comprehensive digital twin of a Formula 1 suspension assembly. FEA and \
                 real-time telemetry integration predict mechanical stress distribution and \
                 damping performance under race-simulated loads, enabling rapid geometry \
                 iteration against the aero-stability/mechanical-grip trade-off.",
            ),
            technologies: strings(&["SimScale", "MATLAB", "Python", "FEA"]),
            image: s("https://picsum.photos/800/600?random=1"),
            link: Some(s("https://github.com/txniii")),
        },
        Project {
            id: s("2"),
            title: s("F1 Strategy Simulation Engine"),
            category: s("F1 Strategy"),
            description: s(
                "A Monte Carlo simulation toolkit for real-time race strategy optimization.",
            ),
            long_description: s(
                "A race strategy engine in Python. Ingests tire degradation curves, fuel burn-off, \
                 and safety car probability distributions to calculate optimal pit windows, \
                 running thousands of Monte Carlo simulations per second.",
            ),
            technologies: strings(&["Python", "Monte Carlo Stats", "Data Analytics", "FIA Regs"]),
            image: s("https://picsum.photos/800/600?random=2"),
            link: None,
        },
        Project {
            id: s("3"),
            title: s("Telemetry & Sensor Fusion Platform"),
            category: s("F1 Engineering"),
            description: s(
                "A hardware-software integration platform for real-time vehicle monitoring.",
            ),
            long_description: s(
                "Bridges embedded hardware and cloud analytics: a sensor array with custom \
                 firmware captures high-frequency vehicle metrics, processed through a \
                 low-latency pipeline to a cloud dashboard.",
            ),
            technologies: strings(&[
                "Embedded C",
                "IoT Sensors",
                "Cloud Architecture",
                "Signal Processing",
            ]),
            image: s("https://picsum.photos/800/600?random=3"),
            link: None,
        },
        Project {
            id: s("4"),
            title: s("Portfolio Pro Architecture"),
            category: s("Web Development"),
            description: s("A high-performance personal brand platform with integrated AI."),
            long_description: s(
                "A bespoke personal branding platform featuring an integrated LLM-based agent for \
                 conversational navigation, 3D interactive elements, and rigorous SEO \
                 optimization.",
            ),
            technologies: strings(&["React", "TypeScript", "Tailwind CSS", "GenAI SDK"]),
            image: s("https://picsum.photos/800/600?random=4"),
            link: Some(s("https://github.com/txniii")),
        },
        Project {
            id: s("5"),
            title: s("Industrial IoT Water Monitor"),
            category: s("Embedded Systems"),
            description: s("Real-time environmental monitoring system with 95% sensor accuracy."),
            long_description: s(
                "An industrial-grade IoT device monitoring water quality parameters in real time, \
                 processing signals on the edge before transmitting encrypted data to a \
                 centralized dashboard for anomaly detection.",
            ),
            technologies: strings(&["Arduino/C++", "MQTT", "Edge Computing", "IoT"]),
            image: s("https://picsum.photos/800/600?random=5"),
            link: None,
        },
        Project {
            id: s("6"),
            title: s("LockIn Scalable Backend"),
            category: s("Software Engineering"),
            description: s("A high-concurrency microservices architecture for real-time messaging."),
            long_description: s(
                "Backend infrastructure for a real-time social platform: microservices with \
                 NestJS and PostgreSQL, optimized search, and a WebSocket delivery system \
                 designed for horizontal scalability.",
            ),
            technologies: strings(&["NestJS", "PostgreSQL", "Redis", "WebSockets"]),
            image: s("https://picsum.photos/800/600?random=6"),
            link: None,
        },
    ]
}

fn certificates() -> Vec<Certificate> {
    let entries = [
        ("1", "Race Engineering & Regulations", "FIA / Motorsport Engineer Academy", "2025"),
        ("2", "F1 Controls & Systems", "Motorsport Engineer Academy", "2024"),
        ("3", "F1 Race Strategy", "Driver61", "2024"),
        ("4", "Motorsport Operations", "Santander", "2024"),
        ("5", "Gen AI", "Google Cloud", "2024"),
        ("6", "Deep Learning w/ GPUs", "IBM", "2024"),
        ("7", "AI Agents", "Hugging Face", "2024"),
        ("8", "Comp Hardware", "Cisco", "2023"),
        ("9", "SHPE NILA Chapter Leader", "SHPE", "2023"),
        ("10", "AT&T Tech Academy", "AT&T", "2023"),
    ];
    entries
        .iter()
        .map(|(id, title, issuer, date)| Certificate {
            id: id.to_string(),
            title: title.to_string(),
            issuer: issuer.to_string(),
            date: date.to_string(),
            credential_url: None,
        })
        .collect()
}

fn events() -> Vec<EventItem> {
    vec![
        EventItem {
            id: s("event-1"),
            title: s("SHPE National Convention 2025"),
            location: s("Philadelphia, PA"),
            date: s("Nov 2025"),
            description: s(
                "Connecting with top engineering talent and industry leaders at the largest \
                 gathering of Hispanics in STEM.",
            ),
            status: EventStatus::Upcoming,
            link: s("https://shpe.org"),
            logo: s("shpe"),
            extended_description: None,
            recommendations: vec![],
            key_takeaways: vec![],
            objectives: strings(&[
                "Secure full-time Embedded Systems role for post-graduation.",
                "Network with Automotive/Motorsport recruiters (GM, Ford, etc.).",
                "Host a workshop on 'Breaking into Tech as a First-Gen Student'.",
                "Recruit 5+ corporate sponsors for NJIT SHPE chapter.",
            ]),
            stats: vec![],
        },
        EventItem {
            id: s("event-2"),
            title: s("ALPFA Convention 2026"),
            location: s("TBA"),
            date: s("Aug 2026"),
            description: s(
                "Expanding leadership and networking within the Latino professional community.",
            ),
            status: EventStatus::Upcoming,
            link: s("https://alpfa.org"),
            logo: s("alpfa"),
            extended_description: None,
            recommendations: vec![],
            key_takeaways: vec![],
            objectives: strings(&[
                "Develop executive leadership skills.",
                "Connect with FinTech leaders regarding low-latency trading infrastructure.",
                "Mentor younger students attending their first convention.",
            ]),
            stats: vec![],
        },
        EventItem {
            id: s("event-3"),
            title: s("SHPE National Convention 2024"),
            location: s("Anaheim, CA"),
            date: s("Oct 30 - Nov 3, 2024"),
            description: s(
                "Represented NJIT as Chapter Leader. Participated in extreme engineering \
                 challenges and networked with F1 recruitment teams.",
            ),
            status: EventStatus::Past,
            link: s("https://shpe.org/2024"),
            logo: s("shpe"),
            extended_description: Some(s(
                "As a Chapter Leader guiding 20+ members among 12,000 attendees, the focus was \
                 the intersection of high-performance computing and motorsport, including \
                 technical conversations with Boeing and GM engineers on real-time embedded \
                 systems and a 24-hour disaster-relief drone prototyping challenge.",
            )),
            recommendations: strings(&[
                "Wear comfortable shoes: the convention center is massive.",
                "Perfect your elevator pitch: 30 seconds, focus on impact.",
                "Hospitality suites are key: the real connections happen after the career fair.",
                "Print 50+ resumes and keep a digital QR code backup ready.",
            ]),
            key_takeaways: strings(&[
                "Soft skills differentiate you when technical skills are equal.",
                "Aerospace and automotive are merging in terms of embedded tech.",
                "Networking is a long game; follow up within 48 hours.",
            ]),
            objectives: vec![],
            stats: stats(&[
                ("Connections", "50+"),
                ("Interviews", "4"),
                ("Steps/Day", "18k"),
                ("Workshops", "6"),
            ]),
        },
        EventItem {
            id: s("event-4"),
            title: s("NJIT Career Fair 2025"),
            location: s("Newark, NJ"),
            date: s("Feb 2025"),
            description: s(
                "Recruiting new talent for research initiatives and connecting with industry \
                 partners for capstone collaborations.",
            ),
            status: EventStatus::Past,
            link: s("#"),
            logo: s("njit"),
            extended_description: Some(s(
                "Assisting with recruitment for the research lab gave a different perspective on \
                 what makes a candidate stand out, and reconnecting with alumni at major defense \
                 contractors secured a potential Baja SAE sponsorship.",
            )),
            recommendations: strings(&[
                "Research the companies beforehand.",
                "Bring a portfolio: physical evidence of projects stops recruiters.",
                "Ask about current engineering challenges, not just openings.",
            ]),
            key_takeaways: strings(&[
                "Confidence comes from preparation.",
                "Local alumni networks are your strongest advocates.",
                "Research experience is highly valued by R&D divisions.",
            ]),
            objectives: vec![],
            stats: stats(&[
                ("Resumes Reviewed", "100+"),
                ("Alumni Met", "12"),
                ("Sponsorships", "1"),
            ]),
        },
    ]
}

fn resume_skills() -> Vec<SkillGroup> {
    let groups = [
        (
            "Programming",
            "C/C++, Python, Java, MATLAB, JavaScript, HTML, CSS, React, RTOS, TypeScript, Bash, Git, NodeJS, AI/ML",
        ),
        (
            "Hardware & Prototyping",
            "Arduino, Raspberry Pi, ARM, PLC, VHDL, PCB Design, Soldering, Multisim, Oscilloscope, Logic/Signal Analyzers, 3D Printing, Laser Cutting",
        ),
        (
            "Firmware/Validation",
            "Device drivers, RTOS scheduling, HW/SW integration, debugging, automation (Python/Bash), simulation, bring-up, Python ML",
        ),
        (
            "Comms/CAD/Tools",
            "Serial, SPI, I2C, LTE/5G, RF protocols, AutoCAD (2D/3D), Visio, LogixPro, PCB layout, Microsoft Office, Overleaf, Notion",
        ),
        (
            "Data/AI/Analytics",
            "TensorFlow, cloud analytics, statistical modeling, dashboarding, advanced Excel analytics, circuit design/analysis, signal processing, hardware simulation",
        ),
        (
            "Motorsport Engineering",
            "Vehicle simulation (SimScale, MATLAB), FEA, Sensor systems, Embedded controls, Telemetry integration",
        ),
        (
            "Team/Process",
            "Agile PM, cross-cultural collaboration, rapid prototyping, startup mindset",
        ),
    ];
    groups
        .iter()
        .map(|(group, items)| SkillGroup {
            group: group.to_string(),
            items: items.to_string(),
        })
        .collect()
}
