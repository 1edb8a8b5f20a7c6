//! Case Study Records
//!
//! Static portfolio content shown in the case-study modal.

use serde::Serialize;

/// Id used when a button references an unknown project
pub const FALLBACK_PROJECT: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "1",
        title: "NextGen Banking Platform",
        description: "Complete digital transformation of legacy banking systems",
        challenge: "The client needed to modernize their 20-year-old banking infrastructure while maintaining 100% uptime.",
        solution: "We implemented a phased migration strategy using microservices architecture on AWS, with zero-downtime deployment.",
        results: &[
            "500K+ active users",
            "99.99% uptime achieved",
            "40% cost reduction",
            "60% faster transaction processing",
        ],
        technologies: &["AWS", "React", "Node.js", "PostgreSQL", "Kubernetes", "Redis"],
    },
    CaseStudy {
        id: "2",
        title: "SmartRetail AI Platform",
        description: "AI-powered e-commerce transformation",
        challenge: "Low conversion rates and poor personalization led to lost revenue opportunities.",
        solution: "Deployed machine learning models for personalized recommendations and dynamic pricing.",
        results: &[
            "35% conversion increase",
            "2M+ monthly orders",
            "$50M+ revenue impact",
            "92% customer satisfaction",
        ],
        technologies: &["Python", "TensorFlow", "Vue.js", "MongoDB", "Apache Kafka", "Docker"],
    },
];

/// Record for `id`, or the fallback project when unknown / missing
pub fn find_case_study(id: Option<&str>) -> &'static CaseStudy {
    id.and_then(|id| CASE_STUDIES.iter().find(|s| s.id == id))
        .or_else(|| CASE_STUDIES.iter().find(|s| s.id == FALLBACK_PROJECT))
        .unwrap_or(&CASE_STUDIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(find_case_study(Some("1")).title, "NextGen Banking Platform");
        assert_eq!(find_case_study(Some("2")).title, "SmartRetail AI Platform");
    }

    #[test]
    fn test_unknown_id_falls_back_to_first_project() {
        assert_eq!(find_case_study(Some("42")), find_case_study(Some("1")));
        assert_eq!(find_case_study(Some("")).id, "1");
        assert_eq!(find_case_study(None).id, "1");
    }

    #[test]
    fn test_records_are_complete() {
        for study in CASE_STUDIES {
            assert!(!study.title.is_empty());
            assert_eq!(study.results.len(), 4);
            assert_eq!(study.technologies.len(), 6);
        }
    }
}
