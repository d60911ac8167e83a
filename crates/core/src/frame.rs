use serde::{Deserialize, Serialize};

pub const DEFAULT_ICON: &str = "edit-paste";

/// A request delivered by the host, one per line on stdin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    Query {
        #[serde(default)]
        argument: Option<String>,
    },
    Enter {
        data: String,
        /// Manager that listed the entry, echoed back from the result row
        #[serde(default)]
        manager: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    Results { items: Vec<ResultItem> },
    Copied { method: CommitMethod },
    Error { message: String },
}

/// One row shown by the host. Status rows carry no `data` and are not highlightable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResultItem {
    pub name: String,
    pub icon: String,
    pub highlightable: bool,
    pub small: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>, // Full entry text handed back on Enter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

impl ResultItem {
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            name: message.into(),
            icon: DEFAULT_ICON.to_string(),
            highlightable: false,
            small: false,
            data: None,
            manager: None,
        }
    }

    /// A selectable row. `manager` is the one whose history the entry came
    /// from, so the selection is committed back through it.
    pub fn entry(label: impl Into<String>, payload: impl Into<String>, manager: &str) -> Self {
        Self {
            name: label.into(),
            icon: DEFAULT_ICON.to_string(),
            highlightable: true,
            small: true,
            data: Some(payload.into()),
            manager: Some(manager.to_string()),
        }
    }

    pub fn is_status(&self) -> bool {
        self.data.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommitMethod {
    /// The active manager's own add command
    Manager,
    /// Generic system clipboard write
    Fallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_parses() {
        let req: Request = serde_json::from_str(r#"{"type":"query","argument":"foo"}"#).unwrap();
        assert_eq!(req, Request::Query { argument: Some("foo".to_string()) });
    }

    #[test]
    fn test_query_request_without_argument() {
        let req: Request = serde_json::from_str(r#"{"type":"query"}"#).unwrap();
        assert_eq!(req, Request::Query { argument: None });
    }

    #[test]
    fn test_enter_request_parses() {
        let req: Request = serde_json::from_str(r#"{"type":"enter","data":"a\nb"}"#).unwrap();
        assert_eq!(
            req,
            Request::Enter {
                data: "a\nb".to_string(),
                manager: None,
            }
        );
    }

    #[test]
    fn test_enter_request_carries_manager() {
        let req: Request =
            serde_json::from_str(r#"{"type":"enter","data":"pie","manager":"CopyQ"}"#).unwrap();
        assert_eq!(
            req,
            Request::Enter {
                data: "pie".to_string(),
                manager: Some("CopyQ".to_string()),
            }
        );
    }

    #[test]
    fn test_entry_item_names_its_manager() {
        let item = ResultItem::entry("apple", "apple", "GPaste");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""manager":"GPaste""#));
        assert_eq!(item.manager.as_deref(), Some("GPaste"));
    }

    #[test]
    fn test_status_item_has_no_payload() {
        let item = ResultItem::status("Clipboard history is empty");
        assert!(item.is_status());
        assert!(!item.highlightable);

        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_copied_response_serializes_method() {
        let json = serde_json::to_string(&Response::Copied { method: CommitMethod::Fallback }).unwrap();
        assert_eq!(json, r#"{"type":"copied","method":"fallback"}"#);
    }
}
