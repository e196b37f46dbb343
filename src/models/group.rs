use serde::Serialize;

/// Group visibility as the server names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Privacy {
    Public,
    Private,
}

/// Body of `POST /groups`.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRequest {
    pub name: String,
    pub description: String,
    pub rules: String,
    pub privacy: Privacy,
}

impl GroupRequest {
    /// The public test community created by each run.
    pub fn test_community(stamp: i64) -> Self {
        Self {
            name: format!("Test Community {stamp}"),
            description: "A test community".to_string(),
            rules: "Be nice".to_string(),
            privacy: Privacy::Public,
        }
    }
}
