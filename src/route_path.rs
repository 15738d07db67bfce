use std::fmt::Display;

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct RoutePath {
    /// Never empty strings.
    segments: Vec<String>,
}

impl RoutePath {
    /// Accepts any string, including `""` and `"//a//b/"`. Only `/` separates
    /// segments, so `?` and `#` stay part of the segment they appear in.
    pub fn new(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_owned())
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter_segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.as_str())
    }

    pub fn to_string_with_leading_slash(&self) -> String {
        format!("/{self}")
    }
}

impl Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.segments.is_empty() {
            f.write_str(&self.segments.join("/"))
        } else {
            Ok(())
        }
    }
}
