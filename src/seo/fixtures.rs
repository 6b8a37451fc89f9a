//! Canned analysis results served until a real analysis backend exists

use super::models::*;

fn project(
    id: u32,
    name: &str,
    description: &str,
    created_at: &str,
    score: u32,
    coverage: &str,
) -> Project {
    Project {
        id,
        name: name.to_string(),
        url: format!("https://{}", name),
        description: description.to_string(),
        status: "active".to_string(),
        created_at: created_at.to_string(),
        stats: ProjectStats {
            semantic_score: score,
            entity_coverage: coverage.to_string(),
            optimization_score: score,
        },
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "optimizora.com",
            "Welcome to Optimizora",
            "2025-01-15",
            85,
            "High",
        ),
        project(
            2,
            "example.com",
            "Example website project",
            "2025-01-10",
            72,
            "Medium",
        ),
    ]
}

fn activity(
    id: u32,
    action: &str,
    timestamp: &str,
    status: ActivityStatus,
    details: &str,
) -> Activity {
    Activity {
        id,
        action: action.to_string(),
        project: "optimizora.com".to_string(),
        timestamp: timestamp.to_string(),
        status,
        details: details.to_string(),
    }
}

pub fn activities() -> Vec<Activity> {
    vec![
        activity(
            1,
            "Entity analysis completed",
            "2 minutes ago",
            ActivityStatus::Completed,
            "Found 45 semantic entities",
        ),
        activity(
            2,
            "Content brief generated",
            "15 minutes ago",
            ActivityStatus::Ready,
            "2,500 word comprehensive brief",
        ),
        activity(
            3,
            "Keyword cluster analysis",
            "1 hour ago",
            ActivityStatus::Processing,
            "Processing 150 keywords",
        ),
    ]
}

pub fn entities() -> Vec<Entity> {
    vec![
        Entity {
            id: 1,
            title: "Digital Marketing Strategy".to_string(),
            entity_type: "Content".to_string(),
            status: "Active".to_string(),
            description: "Comprehensive guide to digital marketing tactics".to_string(),
            last_modified: "Last modified 2 days ago".to_string(),
            icon: EntityIcon::FileText,
            color: "bg-blue-100 text-blue-600".to_string(),
            search_volume: 12000,
            intent: "Informational".to_string(),
        },
        Entity {
            id: 2,
            title: "SEO Optimization".to_string(),
            entity_type: "Tool".to_string(),
            status: "Active".to_string(),
            description: "Advanced SEO analysis and optimization".to_string(),
            last_modified: "Last modified 1 week ago".to_string(),
            icon: EntityIcon::Search,
            color: "bg-green-100 text-green-600".to_string(),
            search_volume: 8500,
            intent: "Commercial".to_string(),
        },
    ]
}
