//! Prompt templates for the career coaching operations.
//!
//! Every operation renders to a fixed system persona plus a user prompt built
//! from the caller's inputs. Inputs are interpolated as-is.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::INTERVIEW_LEVELS;
use crate::utils::CoachError;

pub const CAREER_COACH_PERSONA: &str = "You are an expert career coach with deep knowledge of industry trends, \
skills development, and career progression. Provide actionable insights.";

pub const INTERVIEWER_PERSONA: &str = "You are an experienced recruiter and technical interviewer. \
Generate thoughtful, realistic interview questions.";

pub const LEARNING_SPECIALIST_PERSONA: &str = "You are a learning and development specialist. \
Create structured, achievable learning paths with concrete milestones.";

/// A rendered (system, user) prompt pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: &'static str,
    pub user: String,
}

/// Seniority of the interview being prepared for, as the caller spelled it.
/// Only junior, mid or senior (any case) can be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InterviewLevel(String);

impl InterviewLevel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterviewLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InterviewLevel {
    type Err = CoachError;

    /// Case-insensitive; anything outside junior/mid/senior is a validation error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if INTERVIEW_LEVELS.contains(&s.to_lowercase().as_str()) {
            Ok(InterviewLevel(s.to_string()))
        } else {
            Err(CoachError::ValidationError(format!(
                "Level must be one of: {}",
                INTERVIEW_LEVELS.join(", ")
            )))
        }
    }
}

fn join_skills(skills: &[String], empty: &str) -> String {
    if skills.is_empty() {
        empty.to_string()
    } else {
        skills.join(", ")
    }
}

pub fn career_analysis(skills: &[String], experience_years: u32, goals: &str) -> PromptPair {
    let user = format!(
        "Please analyze this career profile and provide insights:\n\
         \n\
         Skills: {}\n\
         Experience: {} years\n\
         Goals: {}\n\
         \n\
         Provide:\n\
         1. Skill gap analysis\n\
         2. Career path recommendations\n\
         3. Top 3 actionable next steps",
        join_skills(skills, "None provided"),
        experience_years,
        goals
    );

    PromptPair {
        system: CAREER_COACH_PERSONA,
        user,
    }
}

pub fn interview_questions(role: &str, level: &InterviewLevel) -> PromptPair {
    let user = format!(
        "Generate 5 interview questions for a {}-level {} position.\n\
         Include a mix of technical and behavioral questions.\n\
         Format each question clearly.",
        level, role
    );

    PromptPair {
        system: INTERVIEWER_PERSONA,
        user,
    }
}

pub fn learning_path(current_skills: &[String], target_role: &str) -> PromptPair {
    let user = format!(
        "Create a learning path from current skills to target role:\n\
         \n\
         Current Skills: {}\n\
         Target Role: {}\n\
         \n\
         Provide:\n\
         1. Skills gap analysis\n\
         2. Learning milestones (with timeframes)\n\
         3. Recommended resources/courses\n\
         4. Success metrics",
        join_skills(current_skills, "None"),
        target_role
    );

    PromptPair {
        system: LEARNING_SPECIALIST_PERSONA,
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_career_analysis_without_skills() {
        let prompt = career_analysis(&[], 0, "grow");
        assert!(prompt.user.contains("Skills: None provided\n"));
        assert!(prompt.user.contains("Experience: 0 years"));
        assert!(prompt.user.contains("Goals: grow"));
        assert_eq!(prompt.system, CAREER_COACH_PERSONA);
    }

    #[test]
    fn test_career_analysis_full_text() {
        let prompt = career_analysis(&skills(&["Python", "SQL"]), 3, "lead a team");
        assert_eq!(
            prompt.user,
            "Please analyze this career profile and provide insights:\n\
             \n\
             Skills: Python, SQL\n\
             Experience: 3 years\n\
             Goals: lead a team\n\
             \n\
             Provide:\n\
             1. Skill gap analysis\n\
             2. Career path recommendations\n\
             3. Top 3 actionable next steps"
        );
    }

    #[test]
    fn test_interview_prompt_uses_level_and_role() {
        let level: InterviewLevel = "Senior".parse().unwrap();
        let prompt = interview_questions("Backend Engineer", &level);
        assert!(prompt
            .user
            .starts_with("Generate 5 interview questions for a Senior-level Backend Engineer position."));
        assert!(prompt.user.contains("technical and behavioral"));
        assert!(prompt.system.contains("recruiter"));
    }

    #[test]
    fn test_learning_path_empty_skills() {
        let prompt = learning_path(&[], "Data Engineer");
        assert!(prompt.user.contains("Current Skills: None\n"));
        assert!(prompt.user.contains("Target Role: Data Engineer"));
        assert!(prompt.user.contains("2. Learning milestones (with timeframes)"));
        assert!(prompt.system.contains("learning and development specialist"));
    }

    #[test]
    fn test_level_parsing_is_case_insensitive() {
        for raw in ["Senior", "JUNIOR", "mid"] {
            let level: InterviewLevel = raw.parse().unwrap();
            assert_eq!(level.as_str(), raw);
        }
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = "expert".parse::<InterviewLevel>().unwrap_err();
        assert!(matches!(err, CoachError::ValidationError(_)));
        assert_eq!(err.to_string(), "Level must be one of: junior, mid, senior");
    }
}
