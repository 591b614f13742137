use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Public contact details shown on the contact page and footer
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub instagram: String,
}

impl ContactDetails {
    /// `mailto:` link with the message pre-filled
    pub fn mailto(&self, subject: &str, name: &str, message: &str) -> String {
        let body = if name.trim().is_empty() {
            message.trim().to_string()
        } else {
            format!("{}\n\n{}", message.trim(), name.trim())
        };
        format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            urlencoding::encode(subject),
            urlencoding::encode(&body)
        )
    }

    /// `tel:` link keeping only digits, plus a `+` if one precedes the first digit
    pub fn tel(&self) -> String {
        let international = self
            .phone
            .chars()
            .take_while(|c| !c.is_ascii_digit())
            .any(|c| c == '+');
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        if international {
            format!("tel:+{digits}")
        } else {
            format!("tel:{digits}")
        }
    }
}

/// Get the contact details configured on the server
#[server]
pub async fn get_contact_details() -> Result<ContactDetails, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use crate::state::AppState;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(state.config.contact_details())
}
