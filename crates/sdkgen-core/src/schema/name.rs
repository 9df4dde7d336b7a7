use std::fmt;

/// A model name, exactly as declared by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Name(String);

impl Name {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    /// The raw declared name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character upper-cased. Generated reference
    /// types and import entries use this spelling.
    pub fn upper_camel_case(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

impl From<String> for Name {
    fn from(src: String) -> Self {
        Self(src)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
