use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Could not determine the directory of the running executable: {}", .0)]
    ExecutableDirectory(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_message_names_file_and_path() {
        let error = Error::io_error(
            "input".to_string(),
            "/tmp/names.txt".to_string(),
            std::io::Error::new(ErrorKind::NotFound, "missing"),
        );

        let message = error.to_string();
        assert!(message.contains("input file"));
        assert!(message.contains("`/tmp/names.txt`"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_yaml_error_message() {
        let original = serde_yaml::from_str::<Vec<String>>("[unclosed").unwrap_err();
        let error = Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            "/tmp/settings.yml".to_string(),
            original,
        );

        let message = error.to_string();
        assert!(message.starts_with("Error reading settings file at `/tmp/settings.yml`"));
    }

    #[test]
    fn test_stdio_error_from_io_error() {
        let error: Error = std::io::Error::new(ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(error, Error::Stdio(_)));
    }
}
