use std::fmt;

/// A navigation target as an ordered list of path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    /// Parse a slash-separated path. Empty segments are dropped, so
    /// `"/schools/1/"` and `"schools/1"` parse identically.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The empty route, before any navigation has resolved.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn login() -> Self {
        Self::from_segments(["login"])
    }

    pub fn forbidden() -> Self {
        Self::from_segments(["forbidden"])
    }

    /// The school picker, also the default authenticated landing area.
    pub fn schools() -> Self {
        Self::from_segments(["schools"])
    }

    pub fn school_dashboard(school_id: &str) -> Self {
        Self::from_segments(["schools", school_id, "dashboard"])
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
