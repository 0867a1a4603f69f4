use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::feedback::Feedback;
use crate::test::TestSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub progress: u32,
    pub is_pass: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificationStatus {
    pub is_pass: bool,
    /// The current certification test, if one is configured
    pub certification_test: Option<TestSummary>,
}
