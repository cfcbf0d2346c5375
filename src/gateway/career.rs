use super::llm::LlmGateway;
use super::prompts::{self, InterviewLevel, PromptPair};
use super::result::{CompletionResult, GatewayError};

/// Career profile analysis, with the profile echoed back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerAnalysis {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub goals: String,
    pub result: CompletionResult,
}

/// Interview questions for a role and level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewQuestions {
    pub role: String,
    pub level: InterviewLevel,
    pub result: CompletionResult,
}

/// Learning path towards a target role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningPath {
    pub current_skills: Vec<String>,
    pub target_role: String,
    pub result: CompletionResult,
}

impl LlmGateway {
    async fn run(&self, prompt: PromptPair) -> Result<CompletionResult, GatewayError> {
        self.generate(&prompt.user, Some(prompt.system)).await
    }

    /// Skill-gap analysis, path recommendations and next steps for a profile
    pub async fn analyze_career_profile(
        &self,
        skills: &[String],
        experience_years: u32,
        goals: &str,
    ) -> Result<CareerAnalysis, GatewayError> {
        let result = self
            .run(prompts::career_analysis(skills, experience_years, goals))
            .await?;

        Ok(CareerAnalysis {
            skills: skills.to_vec(),
            experience_years,
            goals: goals.to_string(),
            result,
        })
    }

    /// Five mixed technical/behavioral questions. The level is validated by
    /// the caller when it parses an [`InterviewLevel`], and is echoed and
    /// rendered in the caller's spelling.
    pub async fn generate_interview_questions(
        &self,
        role: &str,
        level: InterviewLevel,
    ) -> Result<InterviewQuestions, GatewayError> {
        let result = self.run(prompts::interview_questions(role, &level)).await?;

        Ok(InterviewQuestions {
            role: role.to_string(),
            level,
            result,
        })
    }

    /// Milestones, resources and success metrics from current skills to a role
    pub async fn create_learning_path(
        &self,
        current_skills: &[String],
        target_role: &str,
    ) -> Result<LearningPath, GatewayError> {
        let result = self
            .run(prompts::learning_path(current_skills, target_role))
            .await?;

        Ok(LearningPath {
            current_skills: current_skills.to_vec(),
            target_role: target_role.to_string(),
            result,
        })
    }
}
