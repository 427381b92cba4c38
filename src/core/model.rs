//! Remote entity snapshots.
//!
//! These are read-only copies of what the API returned in a list call.
//! Nothing here is owned or mutated locally.

use serde::{Deserialize, Serialize};

/// Anything addressable by an opaque `gid` and displayed by name.
pub trait Named {
    fn gid(&self) -> &str;
    fn name(&self) -> &str;
}

macro_rules! named_resource {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $ty {
            pub gid: String,
            #[serde(default)]
            pub name: String,
        }

        impl $ty {
            pub fn new(gid: impl Into<String>, name: impl Into<String>) -> Self {
                Self {
                    gid: gid.into(),
                    name: name.into(),
                }
            }
        }

        impl Named for $ty {
            fn gid(&self) -> &str {
                &self.gid
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.name
            }
        }
    };
}

named_resource!(
    /// Top-level organisational container.
    Workspace
);
named_resource!(
    /// Project inside a workspace.
    Project
);
named_resource!(
    /// Column/heading inside a project.
    Section
);
named_resource!(Task);
named_resource!(User);

/// Comment record returned after posting to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub gid: String,
    #[serde(default)]
    pub text: String,
}

/// Kind of entity a name lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Workspace,
    Project,
    Section,
    Task,
    User,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Workspace => "workspace",
            EntityKind::Project => "project",
            EntityKind::Section => "section",
            EntityKind::Task => "task",
            EntityKind::User => "user",
        }
    }
}
