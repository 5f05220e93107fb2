use serde::{Deserialize, Serialize};

use crate::content::{Experience, Project, Skill};

/// Fixed personal fields shown in the page header and the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub location: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Nii Amatey Tagoe".into(),
            title: "Software Engineer".into(),
            email: "armahtey@gmail.com".into(),
            github: "https://github.com/mrNiiAmatey".into(),
            linkedin: "https://www.linkedin.com/in/mrarmahtey/".into(),
            location: "Dallas-Fort Worth, TX".into(),
        }
    }
}

/// The combined payload of `/api/v1/portfolio`.
///
/// Profile fields sit at the top level next to the three content lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(flatten)]
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
}
