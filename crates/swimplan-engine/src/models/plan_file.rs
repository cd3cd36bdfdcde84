use relative_path::{RelativePath, RelativePathBuf};

/// Extensions recognised as training plan files.
pub const PLAN_EXTENSIONS: &[&str] = &["txt", "swim"];

/// A training plan file with a relative path and display-friendly name
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFile {
    relative_path: RelativePathBuf,
    display_name: String,
    display_path: String,
}

impl PlanFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_name()
            .map(strip_plan_extension)
            .unwrap_or("Untitled")
            .to_string();
        let display_path = strip_plan_extension(relative_path.as_str()).to_string();

        Self {
            relative_path,
            display_name,
            display_path,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without the plan extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Relative path without the plan extension, for use in titles
    pub fn display_path(&self) -> &str {
        &self.display_path
    }
}

fn strip_plan_extension(name: &str) -> &str {
    PLAN_EXTENSIONS
        .iter()
        .find_map(|ext| {
            name.strip_suffix(ext)
                .and_then(|rest| rest.strip_suffix('.'))
        })
        .unwrap_or(name)
}

impl From<RelativePathBuf> for PlanFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PlanFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
