use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::agent::AgentSnapshot;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_NOTE_AUTHOR: &str = "System";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    Assigned,
    InProgress,
    Resolved,
    Closed,
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Open
    }
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Assigned => "assigned",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    /// Assigned or being worked on.
    pub fn is_pending(&self) -> bool {
        matches!(self, TicketStatus::Assigned | TicketStatus::InProgress)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "assigned" => Ok(TicketStatus::Assigned),
            "in-progress" => Ok(TicketStatus::InProgress),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(format!("Invalid ticket status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for TicketPriority {
    fn default() -> Self {
        TicketPriority::Medium
    }
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "urgent" => Ok(TicketPriority::Urgent),
            _ => Err(format!("Invalid ticket priority: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: String, content: String, author: Option<String>, now: DateTime<Utc>) -> Self {
        let author = author
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_NOTE_AUTHOR.to_string());
        Self {
            id,
            content,
            author,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub assigned_to: Option<AgentSnapshot>,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Ticket {
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn assignee_id(&self) -> Option<&str> {
        self.assigned_to.as_ref().map(|a| a.id.as_str())
    }

    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self.customer_name.to_lowercase().contains(needle)
    }
}

/// Query parameters for listing tickets. Values stay strings so that `all`
/// and unknown values behave like the dashboard expects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
}

impl TicketFilter {
    fn active(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .filter(|v| !v.is_empty() && *v != "all")
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = Self::active(&self.status) {
            if ticket.status.as_str() != status {
                return false;
            }
        }
        if let Some(priority) = Self::active(&self.priority) {
            if ticket.priority.as_str() != priority {
                return false;
            }
        }
        match self.search.as_deref().filter(|s| !s.is_empty()) {
            Some(search) => ticket.matches_search(&search.to_lowercase()),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TicketPriority>,
    pub category: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

impl CreateTicketRequest {
    pub fn validate(&self) -> Result<(), String> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !present(&self.title) || !present(&self.customer_name) || !present(&self.customer_email)
        {
            return Err("Missing required fields".to_string());
        }
        Ok(())
    }
}

/// Reference to the agent a ticket should point at. Only the id is read;
/// the stored snapshot is always taken from the agent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTicketRequest {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    /// `None` when the field is absent, `Some(None)` for an explicit `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_to: Option<Option<AssigneeRef>>,
    pub description: Option<String>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddNoteRequest {
    #[serde(default)]
    pub content: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignTicketRequest {
    #[serde(default)]
    pub agent_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedTicketResponse {
    pub message: String,
    pub ticket: Ticket,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, title: &str, customer: &str, status: TicketStatus) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            status,
            priority: TicketPriority::Medium,
            category: DEFAULT_CATEGORY.to_string(),
            created_at: now,
            updated_at: now,
            assigned_to: None,
            customer_name: customer.to_string(),
            customer_email: "someone@customer.com".to_string(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(TicketStatus::InProgress).unwrap(),
            serde_json::json!("in-progress")
        );
        let parsed: TicketStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, TicketStatus::InProgress);
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        assert!(serde_json::from_str::<TicketPriority>("\"critical\"").is_err());
        assert!("critical".parse::<TicketPriority>().is_err());
    }

    #[test]
    fn test_validate_requires_customer_email() {
        let req = CreateTicketRequest {
            title: Some("Printer on fire".to_string()),
            customer_name: Some("Pat".to_string()),
            customer_email: None,
            ..Default::default()
        };
        assert_eq!(req.validate(), Err("Missing required fields".to_string()));

        let blank = CreateTicketRequest {
            customer_email: Some("   ".to_string()),
            ..req.clone()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_filter_all_disables_status_and_priority() {
        let t = ticket("TK-001", "Login issue", "Alex Chen", TicketStatus::Open);
        let filter = TicketFilter {
            status: Some("all".to_string()),
            priority: Some("all".to_string()),
            search: None,
        };
        assert!(filter.matches(&t));
    }

    #[test]
    fn test_filter_search_is_case_insensitive_over_id_title_customer() {
        let t = ticket("TK-002", "Payment error", "Maria Rodriguez", TicketStatus::Assigned);
        for needle in ["tk-002", "PAYMENT", "maria"] {
            let filter = TicketFilter {
                search: Some(needle.to_string()),
                ..Default::default()
            };
            assert!(filter.matches(&t), "expected match for {}", needle);
        }
        let miss = TicketFilter {
            search: Some("refund".to_string()),
            ..Default::default()
        };
        assert!(!miss.matches(&t));
    }

    #[test]
    fn test_filter_unknown_status_matches_nothing() {
        let t = ticket("TK-001", "Login issue", "Alex Chen", TicketStatus::Open);
        let filter = TicketFilter {
            status: Some("snoozed".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&t));
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateTicketRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.assigned_to, None);

        let null: UpdateTicketRequest = serde_json::from_str(r#"{"assigned_to": null}"#).unwrap();
        assert_eq!(null.assigned_to, Some(None));

        let set: UpdateTicketRequest =
            serde_json::from_str(r#"{"assigned_to": {"id": "agent-2", "name": "Sarah"}}"#)
                .unwrap();
        assert_eq!(
            set.assigned_to,
            Some(Some(AssigneeRef {
                id: "agent-2".to_string()
            }))
        );
    }

    #[test]
    fn test_note_author_defaults_to_system() {
        let note = Note::new("NOTE-1".to_string(), "hi".to_string(), None, Utc::now());
        assert_eq!(note.author, DEFAULT_NOTE_AUTHOR);

        let empty = Note::new(
            "NOTE-2".to_string(),
            "hi".to_string(),
            Some(String::new()),
            Utc::now(),
        );
        assert_eq!(empty.author, DEFAULT_NOTE_AUTHOR);
    }
}
