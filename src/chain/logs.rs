use std::collections::BTreeMap;

use crate::error::Result;
use crate::proto::abci::Event;
use crate::proto::base_abci::{AbciMessageLog, Attribute, StringEvent, TxResponse};

/// Parse the JSON `raw_log` of a successful transaction into message logs.
///
/// A failed transaction carries a plain error string instead, which is
/// reported as a JSON error.
pub fn parse_abci_logs(raw_log: &str) -> Result<Vec<AbciMessageLog>> {
    if raw_log.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw_log)?)
}

/// Convert ABCI events to string events, merging every event of the same
/// type into one entry. Output is ordered by event type.
pub fn stringify_events(events: &[Event]) -> Vec<StringEvent> {
    let mut merged: BTreeMap<String, Vec<Attribute>> = BTreeMap::new();
    for event in events {
        merged
            .entry(event.r#type.clone())
            .or_default()
            .extend(event.attributes.iter().map(|attr| Attribute {
                key: String::from_utf8_lossy(&attr.key).into_owned(),
                value: String::from_utf8_lossy(&attr.value).into_owned(),
            }));
    }
    merged
        .into_iter()
        .map(|(r#type, attributes)| StringEvent { r#type, attributes })
        .collect()
}

impl TxResponse {
    /// Code 0 means the transaction was executed successfully
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// First value of `key` in an event of `event_type`, searching the
    /// message logs first and then the raw events
    pub fn attribute(&self, event_type: &str, key: &str) -> Option<String> {
        let from_logs = self
            .logs
            .iter()
            .flat_map(|log| log.events.iter())
            .filter(|e| e.r#type == event_type)
            .flat_map(|e| e.attributes.iter())
            .find(|a| a.key == key)
            .map(|a| a.value.clone());
        if from_logs.is_some() {
            return from_logs;
        }
        self.events
            .iter()
            .filter(|e| e.r#type == event_type)
            .flat_map(|e| e.attributes.iter())
            .find(|a| a.key == key.as_bytes())
            .map(|a| String::from_utf8_lossy(&a.value).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::abci::EventAttribute;

    fn event(ty: &str, attrs: &[(&str, &str)]) -> Event {
        Event {
            r#type: ty.to_string(),
            attributes: attrs
                .iter()
                .map(|(k, v)| EventAttribute {
                    key: k.as_bytes().to_vec(),
                    value: v.as_bytes().to_vec(),
                    index: true,
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_abci_logs() {
        let raw = r#"[{"msg_index":0,"log":"","events":[{"type":"message","attributes":[{"key":"action","value":"/sei.oracle.v1.MsgAggregateExchangeRateVote"}]}]}]"#;
        let logs = parse_abci_logs(raw).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].events[0].r#type, "message");
        assert_eq!(logs[0].events[0].attributes[0].key, "action");

        // older nodes omit a zero msg_index
        let logs = parse_abci_logs(r#"[{"log":"ok","events":[]}]"#).unwrap();
        assert_eq!(logs[0].msg_index, 0);

        assert!(parse_abci_logs("").unwrap().is_empty());
        assert!(parse_abci_logs("out of gas in location: WriteFlat").is_err());
    }

    #[test]
    fn test_stringify_events_merges_by_type() {
        let events = vec![
            event("transfer", &[("recipient", "sei1a")]),
            event("message", &[("action", "send")]),
            event("transfer", &[("recipient", "sei1b")]),
        ];
        let string_events = stringify_events(&events);
        assert_eq!(string_events.len(), 2);
        assert_eq!(string_events[0].r#type, "message");
        assert_eq!(string_events[1].r#type, "transfer");
        let recipients: Vec<_> = string_events[1].attributes.iter().map(|a| a.value.as_str()).collect();
        assert_eq!(recipients, vec!["sei1a", "sei1b"]);
    }

    #[test]
    fn test_tx_response_attribute() {
        let tx = TxResponse {
            code: 0,
            logs: vec![AbciMessageLog {
                msg_index: 0,
                log: String::new(),
                events: stringify_events(&[event("aggregate_vote", &[("voter", "seivaloper1")])]),
            }],
            events: vec![event("tx", &[("fee", "100usei")])],
            ..Default::default()
        };
        assert!(tx.is_ok());
        assert_eq!(tx.attribute("aggregate_vote", "voter").as_deref(), Some("seivaloper1"));
        assert_eq!(tx.attribute("tx", "fee").as_deref(), Some("100usei"));
        assert_eq!(tx.attribute("tx", "missing"), None);
    }
}
