//! Organization data models

use serde::{Deserialize, Serialize};

/// Organization data from the StackHawk API
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Millisecond epoch, as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
}

/// Billing/subscription information
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Organization {
    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_deserialize() {
        let org: Organization = serde_json::from_value(serde_json::json!({
            "id": "org-1",
            "name": "Acme",
            "plan": "enterprise",
            "createdTimestamp": "1700000000000",
            "features": ["dast"]
        }))
        .unwrap();

        assert_eq!(org.id, "org-1");
        assert_eq!(org.name, "Acme");
        assert_eq!(org.plan(), Some("enterprise"));
        assert_eq!(org.created_timestamp.as_deref(), Some("1700000000000"));
        assert_eq!(org.features, vec!["dast"]);
    }

    #[test]
    fn test_organization_minimal() {
        let org: Organization = serde_json::from_value(serde_json::json!({"id": "org-2"})).unwrap();
        assert_eq!(org.id, "org-2");
        assert!(org.name.is_empty());
        assert!(org.plan().is_none());
    }

    #[test]
    fn test_empty_plan_is_none() {
        let org = Organization {
            plan: Some(String::new()),
            ..Default::default()
        };
        assert!(org.plan().is_none());
    }
}
