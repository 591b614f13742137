use crate::server_fns::ContactDetails;

/// Errors raised while reading the server configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid e-mail address: {value}")]
    InvalidEmail { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Site details supplied through the environment (or `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,
    pub instagram_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: "contato@marcenaria.com.br".into(),
            contact_phone: "+55 11 4000-1234".into(),
            contact_address: "Rua dos Marceneiros, 120 - São Paulo".into(),
            instagram_url: "https://instagram.com/marcenaria".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let config = Self {
            contact_email: get("CONTACT_EMAIL", defaults.contact_email),
            contact_phone: get("CONTACT_PHONE", defaults.contact_phone),
            contact_address: get("CONTACT_ADDRESS", defaults.contact_address),
            instagram_url: get("INSTAGRAM_URL", defaults.instagram_url),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let email_ok = self
            .contact_email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !email_ok {
            return Err(ConfigError::InvalidEmail {
                var: "CONTACT_EMAIL",
                value: self.contact_email.clone(),
            });
        }
        if !(self.instagram_url.starts_with("https://") || self.instagram_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl {
                var: "INSTAGRAM_URL",
                value: self.instagram_url.clone(),
            });
        }
        Ok(())
    }

    pub fn contact_details(&self) -> ContactDetails {
        ContactDetails {
            email: self.contact_email.clone(),
            phone: self.contact_phone.clone(),
            address: self.contact_address.clone(),
            instagram: self.instagram_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset_or_blank() {
        let config = SiteConfig::from_lookup(lookup(&[("CONTACT_PHONE", "   ")])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn overrides_are_trimmed() {
        let config = SiteConfig::from_lookup(lookup(&[("CONTACT_EMAIL", " vendas@moveis.pt ")])).unwrap();
        assert_eq!(config.contact_email, "vendas@moveis.pt");
        assert_eq!(config.contact_details().email, "vendas@moveis.pt");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SiteConfig::from_lookup(lookup(&[("CONTACT_EMAIL", "nobody")])),
            Err(ConfigError::InvalidEmail { .. })
        ));
        assert!(matches!(
            SiteConfig::from_lookup(lookup(&[("INSTAGRAM_URL", "instagram.com/x")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
