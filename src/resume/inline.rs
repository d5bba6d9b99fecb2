use super::{CloudSecurityStep, ContactInfo, JobExperience, ResumeData, Skill};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn job(
    id: &str,
    title: &str,
    company: &str,
    duration: &str,
    description: &[&str],
    skills: &[&str],
) -> JobExperience {
    JobExperience {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        duration: duration.to_string(),
        description: strings(description),
        skills: strings(skills),
        location: None,
        summary: None,
    }
}

fn skill(id: &str, name: &str, category: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        level: None,
    }
}

fn step(id: &str, title: &str, description: &str, skills: &[&str]) -> CloudSecurityStep {
    CloudSecurityStep {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        skills: strings(skills),
        completed: false,
        progress: None,
    }
}

/// Built-in resume used when no embedded document is available.
pub fn inline_resume() -> ResumeData {
    ResumeData {
        name: "Najzon Weaver".to_string(),
        title: "Aspiring Cloud Security Engineer".to_string(),
        location: "Mount Clemens, MI".to_string(),
        summary: "Aspiring Cloud Security Engineer with a strong foundation in operations, logistics, and customer service. Known for real-time problem solving, communication, and leadership. Currently seeking opportunities to grow in cloud security and cybersecurity roles.".to_string(),
        contact: ContactInfo {
            email: "weaverj56@gmail.com".to_string(),
            phone: "+1 313 690 1673".to_string(),
            location: "Mount Clemens, MI".to_string(),
        },
        experience: vec![
            job(
                "postal-carrier",
                "Postal Carrier",
                "United States Postal Service",
                "August 2020 – Present",
                &[
                    "Deliver 500+ packages and mailpieces daily, maintaining delivery accuracy and time efficiency.",
                    "Resolve customer issues and delivery challenges with professionalism and clear communication.",
                    "Plan and adapt delivery routes in real time based on volume, weather, and logistics conditions.",
                ],
                &["Problem Solving", "Customer Service", "Time Management", "Operations Management"],
            ),
            job(
                "shift-lead",
                "Shift Lead",
                "Pokeworks",
                "April 2019 – August 2020",
                &[
                    "Supervised 3–5 team members per shift, ensuring quality service and team accountability.",
                    "Trained new employees on store operations, customer service, and food handling standards.",
                    "Handled daily transactions over $2,000 while maintaining loss prevention and financial accuracy.",
                    "Resolved customer issues quickly to maintain service standards and store reputation.",
                ],
                &["Team Leadership", "Staff Training", "Workflow Coordination", "Conflict Resolution"],
            ),
            job(
                "food-expeditor",
                "Food Expeditor",
                "The Great Greek",
                "July 2019 – December 2019",
                &[
                    "Coordinated communication between kitchen and front-of-house teams to ensure timely, accurate food delivery.",
                    "Verified order quality, presentation, and accuracy before sending dishes to guests.",
                ],
                &["Workflow Coordination", "Communication", "Problem Solving", "Time Management"],
            ),
            job(
                "assistant-manager",
                "Assistant Manager",
                "Family Dollar",
                "November 2015 – August 2016",
                &[
                    "Promoted from Cashier to Assistant Manager based on strong performance and leadership.",
                    "Supervised daily store operations, including opening/closing, staff task assignments, and shift coverage.",
                    "Trained and coached team members on POS systems, store procedures, and customer service standards.",
                    "Handled cash deposits and inventory audits, ensuring financial and stock accuracy.",
                    "Resolved customer issues and complaints with professionalism, maintaining store reputation.",
                ],
                &["Team Leadership", "Operations Management", "Staff Training", "Inventory Management"],
            ),
        ],
        skills: vec![
            skill("customer-service", "Customer Service", "interpersonal"),
            skill("inventory-management", "Inventory Management", "operations"),
            skill("workflow-coordination", "Workflow Coordination", "management"),
            skill("time-management", "Time Management", "productivity"),
            skill("task-delegation", "Task Delegation", "management"),
            skill("problem-solving", "Problem Solving", "analytical"),
            skill("team-leadership", "Team Leadership", "management"),
            skill("staff-training", "Staff Training", "management"),
            skill("conflict-resolution", "Conflict Resolution", "interpersonal"),
            skill("operations-management", "Operations Management", "management"),
        ],
        cloud_roadmap: vec![
            step(
                "aws-fundamentals",
                "AWS Fundamentals",
                "Core AWS services, EC2, S3, VPC, IAM basics",
                &["AWS Console", "Cloud Computing Basics", "Infrastructure as Code"],
            ),
            step(
                "security-fundamentals",
                "Security Fundamentals",
                "Network security, encryption, identity management",
                &["IAM", "Security Groups", "VPC Security", "KMS"],
            ),
            step(
                "devsecops",
                "DevSecOps",
                "Security automation, CI/CD pipelines, infrastructure security",
                &["CloudFormation", "Security Automation", "CI/CD Security"],
            ),
            step(
                "monitoring-compliance",
                "Monitoring & Compliance",
                "CloudTrail, Config, compliance frameworks, incident response",
                &["CloudWatch", "CloudTrail", "AWS Config", "Compliance"],
            ),
        ],
    }
}
