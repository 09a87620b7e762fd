use crate::consts::cli_consts::store::LOCAL_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the food store deployments the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local API server (`json-server` style) on port 3333.
    #[default]
    Local,
    /// Any other store reachable at the given base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the food store associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: trimmed.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            " https://menu.example.com ".parse::<Environment>(),
            Ok(Environment::Custom {
                api_url: "https://menu.example.com".to_string()
            })
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_api_url() {
        assert_eq!(Environment::Local.api_url(), "http://localhost:3333");
        let custom = Environment::Custom {
            api_url: "http://10.0.0.2:8080".to_string(),
        };
        assert_eq!(custom.api_url(), "http://10.0.0.2:8080");
        assert_eq!(custom.to_string(), "Custom");
    }
}
