//! Company draft form value and the directory seam it is submitted to.

use std::convert::Infallible;

use serde::Serialize;
use serde_json::{json, Value};

/// In-progress, unsubmitted company entry. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyDraft {
    pub name: String,
    pub location: String,
    #[serde(rename = "linkedin")]
    pub social_profile_url: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Location,
    SocialProfile,
    Email,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Location,
        DraftField::SocialProfile,
        DraftField::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Company Name",
            DraftField::Location => "Location",
            DraftField::SocialProfile => "LinkedIn Profile",
            DraftField::Email => "Email",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DraftField::Name => 0,
            DraftField::Location => 1,
            DraftField::SocialProfile => 2,
            DraftField::Email => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl CompanyDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Location => &self.location,
            DraftField::SocialProfile => &self.social_profile_url,
            DraftField::Email => &self.email,
        }
    }

    /// Copy of this draft with one field replaced; the other three are kept.
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            DraftField::Name => next.name = value,
            DraftField::Location => next.location = value,
            DraftField::SocialProfile => next.social_profile_url = value,
            DraftField::Email => next.email = value,
        }
        next
    }

    pub fn is_blank(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.field(*field).is_empty())
    }

    pub fn to_payload(&self) -> Value {
        json!({
            "name": self.name,
            "location": self.location,
            "linkedin": self.social_profile_url,
            "email": self.email,
        })
    }
}

/// Destination for submitted company drafts.
pub trait CompanyDirectory {
    fn add_company(&mut self, draft: &CompanyDraft) -> Result<(), Infallible>;
}

/// Accepts every draft and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardingDirectory;

impl CompanyDirectory for DiscardingDirectory {
    fn add_company(&mut self, _draft: &CompanyDraft) -> Result<(), Infallible> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CompanyDraft {
        CompanyDraft {
            name: "Acme".to_string(),
            location: "Berlin".to_string(),
            social_profile_url: "https://linkedin.com/company/acme".to_string(),
            email: "hello@acme.test".to_string(),
        }
    }

    #[test]
    fn test_default_draft_is_blank() {
        assert!(CompanyDraft::default().is_blank());
        assert!(!filled().is_blank());
    }

    #[test]
    fn test_with_field_preserves_other_fields() {
        let before = filled();
        for field in DraftField::ALL {
            let after = before.with_field(field, "changed");
            assert_eq!(after.field(field), "changed");
            for other in DraftField::ALL.iter().filter(|f| **f != field) {
                assert_eq!(after.field(*other), before.field(*other));
            }
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(DraftField::Name.next(), DraftField::Location);
        assert_eq!(DraftField::Email.next(), DraftField::Name);
        assert_eq!(DraftField::Name.prev(), DraftField::Email);
    }

    #[test]
    fn test_payload_uses_form_keys() {
        let payload = filled().to_payload();
        assert_eq!(payload["linkedin"], "https://linkedin.com/company/acme");
        assert_eq!(payload["name"], "Acme");
        assert_eq!(
            serde_json::to_value(filled()).unwrap(),
            payload,
            "serde form and payload form agree"
        );
    }

    #[test]
    fn test_discarding_directory_accepts_anything() {
        let mut directory = DiscardingDirectory;
        assert!(directory.add_company(&CompanyDraft::default()).is_ok());
        assert!(directory.add_company(&filled()).is_ok());
    }
}
