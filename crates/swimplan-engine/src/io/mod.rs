use crate::models::{PLAN_EXTENSIONS, PlanFile};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid plans directory: {0}")]
    InvalidPlansDir(String),
}

/// Read a plan file and return its content
pub fn read_plan(relative_path: &RelativePath, plans_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(plans_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    Ok(fs::read_to_string(&absolute_path)?)
}

/// Scan for plan files under the plans directory, sorted by relative path
pub fn scan_plan_files(plans_root: &Path) -> Result<Vec<PlanFile>, IoError> {
    if !plans_root.exists() {
        return Err(IoError::InvalidPlansDir(
            "plans directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(plans_root, plans_root, &mut files)?;
    files.sort();
    log::debug!("found {} plan files in {}", files.len(), plans_root.display());

    Ok(files.into_iter().map(PlanFile::new).collect())
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if is_plan_file(&path) {
            match path
                .strip_prefix(root)
                .ok()
                .and_then(|p| RelativePathBuf::from_path(p).ok())
            {
                Some(relative) => files.push(relative),
                None => log::warn!("skipping plan file outside of root: {}", path.display()),
            }
        }
    }

    Ok(())
}

fn is_plan_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PLAN_EXTENSIONS.contains(&ext))
}

pub fn validate_plans_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPlansDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_plans_dir};

    #[test]
    fn test_scan_finds_plan_files() {
        // Given a plans directory with both plan extensions
        let plans_dir = create_test_plans_dir();
        create_test_file(&plans_dir, "lundi.txt", "4x50 Cr V2");
        create_test_file(&plans_dir, "jeudi.swim", "200 souple");

        let files = scan_plan_files(plans_dir.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["jeudi", "lundi"]);
    }

    #[test]
    fn test_handle_invalid_plans_directory() {
        let result = scan_plan_files(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("plans directory"));
    }

    #[test]
    fn test_scan_nested_directories() {
        let plans_dir = create_test_plans_dir();
        create_test_file(&plans_dir, "root.txt", "400 souple");
        create_test_file(&plans_dir, "saison/semaine1.txt", "8x25 Max");

        let files = scan_plan_files(plans_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(
            files
                .iter()
                .any(|f| f.relative_path().as_str() == "saison/semaine1.txt")
        );
        assert!(files.iter().any(|f| f.display_path() == "saison/semaine1"));
    }

    #[test]
    fn test_ignore_other_files() {
        let plans_dir = create_test_plans_dir();
        create_test_file(&plans_dir, "plan.txt", "4x100 V1");
        create_test_file(&plans_dir, "notes.md", "# Markdown");
        create_test_file(&plans_dir, "export.json", "[]");

        let files = scan_plan_files(plans_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path().as_str(), "plan.txt");
    }

    #[test]
    fn test_validate_plans_dir() {
        let plans_dir = create_test_plans_dir();
        assert!(validate_plans_dir(plans_dir.path()).is_ok());

        let result = validate_plans_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidPlansDir(_))));
    }

    #[test]
    fn test_validate_rejects_a_file() {
        let plans_dir = create_test_plans_dir();
        let file = create_test_file(&plans_dir, "plan.txt", "");
        assert!(matches!(
            validate_plans_dir(&file),
            Err(IoError::InvalidPlansDir(_))
        ));
    }

    #[test]
    fn test_read_plan() {
        let plans_dir = create_test_plans_dir();
        create_test_file(&plans_dir, "plan.txt", "Echauffement\n400 souple");

        let content = read_plan(RelativePath::new("plan.txt"), plans_dir.path()).unwrap();
        assert_eq!(content, "Echauffement\n400 souple");
    }

    #[test]
    fn test_read_plan_not_found() {
        let plans_dir = create_test_plans_dir();
        let result = read_plan(RelativePath::new("missing.txt"), plans_dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
