//! The slice of `package.json` the tool reads.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageMeta {
    pub name: Option<String>,
    pub name_full: Option<String>,
    pub version: Option<String>,
    pub homepage: Option<String>,
    pub author: Option<Author>,
    pub license: Option<String>,
    /// CommonJS entry point.
    pub main: Option<String>,
    /// ES module entry point.
    pub module: Option<String>,
    /// Browser (UMD) bundle served by CDNs.
    pub unpkg: Option<String>,
    /// Global variable name the UMD bundle assigns.
    pub global_var: Option<String>,
}

impl PackageMeta {
    /// Display name: `nameFull` when set, otherwise `name`.
    pub fn display_name(&self) -> &str {
        self.name_full.as_deref().or(self.name.as_deref()).unwrap_or("")
    }
}

/// npm accepts `author` either as a single string or as an object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Line(String),
    Person {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::Line(line) => f.write_str(line),
            Author::Person { name, email, url } => {
                let mut parts = Vec::new();
                if let Some(name) = name {
                    parts.push(name.clone());
                }
                if let Some(email) = email {
                    parts.push(format!("<{email}>"));
                }
                if let Some(url) = url {
                    parts.push(format!("({url})"));
                }
                f.write_str(&parts.join(" "))
            }
        }
    }
}
