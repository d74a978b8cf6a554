//! # Site Content
//!
//! All display text for the calculator and its surroundings lives in one
//! JSON document (`content/site.json`), embedded in the binary. It is parsed
//! and validated once, then shared read-only by every consumer.
//!
//! ## Structure
//!
//! ```text
//! SiteContent
//! ├── company: CompanyContent (name, tagline, contact details)
//! ├── calculator: CalculatorContent (titles, 4 field hints, result labels)
//! └── cookie_banner: CookieBannerContent (consent notice text)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::InputField;
//! use calc_core::content::site_content;
//!
//! let content = site_content().unwrap();
//! let hint = content.calculator.hint(InputField::People).unwrap();
//! assert_eq!(hint.label, "People doing admin work");
//! assert!(hint.contains(10.0));
//! assert!(!hint.contains(80.0));
//! ```

use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::InputField;
use crate::errors::{CalcError, CalcResult};

/// Name of the embedded content document
pub const CONTENT_FILE: &str = "site.json";

#[derive(RustEmbed)]
#[folder = "content/"]
struct ContentAssets;

static SITE_CONTENT: OnceCell<SiteContent> = OnceCell::new();

/// The embedded content document, parsed on first use.
pub fn site_content() -> CalcResult<&'static SiteContent> {
    SITE_CONTENT.get_or_try_init(SiteContent::embedded)
}

/// Root content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub company: CompanyContent,
    pub calculator: CalculatorContent,
    pub cookie_banner: CookieBannerContent,
}

impl SiteContent {
    /// Parse the document embedded at build time.
    pub fn embedded() -> CalcResult<Self> {
        let file = ContentAssets::get(CONTENT_FILE)
            .ok_or_else(|| CalcError::content(format!("embedded {CONTENT_FILE} is missing")))?;
        let text = std::str::from_utf8(&file.data)
            .map_err(|e| CalcError::content(format!("embedded {CONTENT_FILE} is not UTF-8: {e}")))?;
        Self::from_json(text)
    }

    /// Load a content document from disk (used to override the embedded one).
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read content", path.display().to_string(), e.to_string())
        })?;
        let content = Self::from_json(&text)?;
        debug!(path = %path.display(), "loaded content override");
        Ok(content)
    }

    /// Parse and validate a content document.
    pub fn from_json(text: &str) -> CalcResult<Self> {
        let content: SiteContent = serde_json::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> CalcResult<()> {
        self.calculator.validate()
    }
}

/// Company identity shown in headers and footers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyContent {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
}

/// Text for the calculator section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorContent {
    pub id: String,
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub inputs_title: String,
    pub results_title: String,
    /// One hint per input, in [`InputField::ALL`] order
    pub fields: Vec<FieldHint>,
    pub reset_button: String,
    pub copy_button: String,
    pub copied_button: String,
    pub copy_aria_label: String,
    pub result_labels: ResultLabels,
}

impl CalculatorContent {
    /// Hint for one input field.
    ///
    /// Always `Some` for a validated document; a document assembled in code
    /// with fewer hints yields `None` for the missing ones.
    pub fn hint(&self, field: InputField) -> Option<&FieldHint> {
        self.fields.get(field.index())
    }

    fn validate(&self) -> CalcResult<()> {
        if self.fields.len() != InputField::ALL.len() {
            return Err(CalcError::content(format!(
                "calculator needs {} field hints, found {}",
                InputField::ALL.len(),
                self.fields.len()
            )));
        }
        for (field, hint) in InputField::ALL.iter().zip(&self.fields) {
            if let Some(max) = hint.max {
                if hint.min > max {
                    return Err(CalcError::content(format!(
                        "field hint for {field} has min {} above max {max}",
                        hint.min
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Label, placeholder and advisory range for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldHint {
    pub label: String,
    pub placeholder: String,
    /// Longer description for screen readers and help text
    pub sr_description: String,
    pub min: f64,
    /// No upper hint when absent
    #[serde(default)]
    pub max: Option<f64>,
}

impl FieldHint {
    /// Whether a value sits inside the suggested range.
    ///
    /// Advisory only: the calculator accepts values outside it.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Labels for the six result rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultLabels {
    pub monthly_admin_cost: String,
    pub yearly_revenue_leak: String,
    pub yearly_hours_saved: String,
    pub payback_period: String,
    pub first_year_roi: String,
    pub yearly_savings: String,
}

/// Text for the cookie consent notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieBannerContent {
    pub aria_label: String,
    pub message: String,
    pub cookie_policy_link_text: String,
    pub learn_more: String,
    pub accept: String,
}
