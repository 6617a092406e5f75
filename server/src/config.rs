use anyhow::{Context, Result};

const DEFAULT_SERVICE_NAME: &str = "employee-registry";
const DEFAULT_FIRST_EMPLOYEE_ID: i64 = 1000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_name: String,
    pub seed_demo_data: bool,
    pub first_employee_id: i64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_name = lookup("SERVICE_NAME")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.into());

        let seed_demo_data = lookup("SEED_DEMO_DATA")
            .map(|val| matches!(val.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(true);

        let first_employee_id = match lookup("EMPLOYEE_ID_START") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("invalid EMPLOYEE_ID_START {raw:?}"))?,
            None => DEFAULT_FIRST_EMPLOYEE_ID,
        };

        Ok(Self {
            service_name,
            seed_demo_data,
            first_employee_id,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.into(),
            seed_demo_data: true,
            first_employee_id: DEFAULT_FIRST_EMPLOYEE_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config.service_name, "employee-registry");
        assert!(config.seed_demo_data);
        assert_eq!(config.first_employee_id, 1000);
    }

    #[test]
    fn overrides_are_read() {
        let config = load_from(&[
            ("SERVICE_NAME", "hr-web"),
            ("SEED_DEMO_DATA", "no"),
            ("EMPLOYEE_ID_START", " 1 "),
        ])
        .unwrap();
        assert_eq!(config.service_name, "hr-web");
        assert!(!config.seed_demo_data);
        assert_eq!(config.first_employee_id, 1);
    }

    #[test]
    fn malformed_id_start_is_rejected() {
        let err = load_from(&[("EMPLOYEE_ID_START", "abc")]).unwrap_err();
        assert!(err.to_string().contains("EMPLOYEE_ID_START"));
    }
}
