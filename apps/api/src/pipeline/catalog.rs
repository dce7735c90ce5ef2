//! Static job catalog used to cross-reference job-matcher output.
//! Loaded once at startup and shared read-only.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct JobCatalog {
    listings: Vec<JobListing>,
}

impl JobCatalog {
    pub fn new(listings: Vec<JobListing>) -> Self {
        Self { listings }
    }

    /// Reads a JSON array of listings.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading job catalog {}", path.display()))?;
        let listings: Vec<JobListing> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing job catalog {}", path.display()))?;
        Ok(Self::new(listings))
    }

    pub fn builtin() -> Self {
        fn listing(
            title: &str,
            company: &str,
            description: &str,
            requirements: &[&str],
            location: &str,
        ) -> JobListing {
            JobListing {
                title: title.to_string(),
                company: company.to_string(),
                description: description.to_string(),
                requirements: requirements.iter().map(|r| r.to_string()).collect(),
                location: location.to_string(),
            }
        }

        Self::new(vec![
            listing(
                "Senior Full Stack Developer",
                "TechCorp",
                "Looking for an experienced developer with React, Node.js, and MongoDB expertise.",
                &["5+ years experience", "React", "Node.js", "MongoDB", "AWS"],
                "Remote",
            ),
            listing(
                "AI/ML Engineer",
                "AI Solutions Inc",
                "Join our team to build cutting-edge machine learning models.",
                &["Python", "TensorFlow", "Deep Learning", "Data Science"],
                "San Francisco",
            ),
            listing(
                "DevOps Engineer",
                "CloudTech",
                "Help us scale our infrastructure and implement CI/CD pipelines.",
                &["Docker", "Kubernetes", "AWS", "CI/CD"],
                "New York",
            ),
            listing(
                "Frontend Developer",
                "WebDesign Co",
                "Create beautiful and responsive user interfaces.",
                &["React", "TypeScript", "CSS", "UI/UX"],
                "Remote",
            ),
            listing(
                "Backend Developer",
                "API Masters",
                "Build robust and scalable backend services.",
                &["Node.js", "Express", "SQL", "REST APIs"],
                "Chicago",
            ),
        ])
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    /// Exact, case-sensitive match on title and company.
    pub fn find(&self, title: &str, company: &str) -> Option<&JobListing> {
        self.listings
            .iter()
            .find(|job| job.title == title && job.company == company)
    }

    /// Pretty JSON rendering embedded in the job-matcher prompt.
    pub fn to_prompt_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.listings).context("serializing job catalog")
    }
}
