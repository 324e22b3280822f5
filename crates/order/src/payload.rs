//! Wire format for the kitchen's order endpoint.

use serde::{Deserialize, Serialize};

use crate::draft::OrderDraft;

/// JSON body posted to the kitchen. Field names are camelCase on the wire;
/// values go out exactly as drafted (no trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

impl From<&OrderDraft> for OrderPayload {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            full_name: draft.full_name.clone(),
            size: draft.size.clone(),
            toppings: draft.toppings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_camel_case() {
        let draft = OrderDraft {
            full_name: "Rosa Diaz".into(),
            size: "M".into(),
            toppings: vec!["1".into(), "4".into()],
        };
        let json = serde_json::to_value(OrderPayload::from(&draft)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Rosa Diaz",
                "size": "M",
                "toppings": ["1", "4"]
            })
        );
    }

    #[test]
    fn name_is_not_trimmed_on_the_wire() {
        let draft = OrderDraft {
            full_name: "  Gina  ".into(),
            size: "L".into(),
            toppings: vec![],
        };
        let payload = OrderPayload::from(&draft);
        assert_eq!(payload.full_name, "  Gina  ");
    }

    #[test]
    fn deserializes_camel_case() {
        let payload: OrderPayload =
            serde_json::from_str(r#"{"fullName":"Jake","size":"S","toppings":[]}"#).unwrap();
        assert_eq!(payload.full_name, "Jake");
        assert_eq!(payload.size, "S");
        assert!(payload.toppings.is_empty());
    }
}
