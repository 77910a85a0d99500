// Content kinds and the capability shared by every resource type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::api::{Challenge, Course, SkillPath, Tutorial};
use crate::error::InvalidKindError;

const ALLOWED_KINDS: &str = "challenge, tutorial, course, skill-path (or empty for all)";

/// Discriminator of a content family. `All` is the "no filter" value and
/// renders as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentKind {
    #[default]
    All,
    Challenge,
    Tutorial,
    Course,
    SkillPath,
}

impl ContentKind {
    /// Label used for the value placeholder in help output.
    pub const TYPE: &'static str = "KIND";

    pub const CONCRETE: [ContentKind; 4] = [
        ContentKind::Challenge,
        ContentKind::Tutorial,
        ContentKind::Course,
        ContentKind::SkillPath,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Challenge => "challenge",
            Self::Tutorial => "tutorial",
            Self::Course => "course",
            Self::SkillPath => "skill-path",
        }
    }

    pub fn is_all(self) -> bool {
        self == Self::All
    }

    /// True when `self` is the unfiltered value or equals `kind`.
    pub fn includes(self, kind: ContentKind) -> bool {
        self.is_all() || self == kind
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = InvalidKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::All),
            "challenge" => Ok(Self::Challenge),
            "tutorial" => Ok(Self::Tutorial),
            "course" => Ok(Self::Course),
            "skill-path" => Ok(Self::SkillPath),
            other => Err(InvalidKindError {
                text: other.to_string(),
                allowed: ALLOWED_KINDS,
            }),
        }
    }
}

/// Accessors every resource type provides, so listing and formatting code
/// never has to know the concrete type.
pub trait Content {
    fn kind(&self) -> ContentKind;
    fn name(&self) -> &str;
    fn page_url(&self) -> &str;
}

/// A resource whose kind is only known at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyContent {
    Challenge(Challenge),
    Tutorial(Tutorial),
    Course(Course),
    SkillPath(SkillPath),
}

impl AnyContent {
    fn inner(&self) -> &dyn Content {
        match self {
            Self::Challenge(c) => c,
            Self::Tutorial(t) => t,
            Self::Course(c) => c,
            Self::SkillPath(p) => p,
        }
    }
}

impl Content for AnyContent {
    fn kind(&self) -> ContentKind {
        self.inner().kind()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn page_url(&self) -> &str {
        self.inner().page_url()
    }
}
