use serde::{Deserialize, Serialize};

/// Site languages
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Pt,
    Es,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::Es => "es",
        }
    }

    /// Accepts bare codes and BCP 47 tags such as `pt-BR` or `es_AR`
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "pt" => Some(Lang::Pt),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Lang::Pt => Lang::Es,
            Lang::Es => Lang::Pt,
        }
    }
}

/// Owned per-language string, used by data records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LocalizedText {
    #[serde(default)]
    pub pt: String,
    #[serde(default)]
    pub es: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(pt: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            pt: pt.into(),
            es: es.into(),
            en: None,
        }
    }

    /// Text in `lang`; a missing locale falls back to English, then to the
    /// other site language
    pub fn get(&self, lang: Lang) -> &str {
        let (wanted, other) = match lang {
            Lang::Pt => (&self.pt, &self.es),
            Lang::Es => (&self.es, &self.pt),
        };
        if !wanted.is_empty() {
            return wanted;
        }
        match self.en.as_deref() {
            Some(en) if !en.is_empty() => en,
            _ => other,
        }
    }
}

/// Static copy-table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub pt: &'static str,
    pub es: &'static str,
}

impl Text {
    pub const fn new(pt: &'static str, es: &'static str) -> Self {
        Self { pt, es }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Pt => self.pt,
            Lang::Es => self.es,
        }
    }
}
