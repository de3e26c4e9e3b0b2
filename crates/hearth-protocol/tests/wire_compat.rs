// Verify wire format matches what schedule-list clients expect.
// These tests ensure protocol compatibility is never broken.

use hearth_core::types::RulePair;
use hearth_protocol::commands::{
    ERR_ITEM_NOT_FOUND, EVENT_SCHEDULE_LIST_UPDATED, SCHEDULE_LIST_FETCH, SCHEDULE_LIST_UPDATE,
};
use hearth_protocol::envelopes::{EventMessage, RawEnvelope, Response};
use hearth_protocol::requests::WsRequest;

#[test]
fn fetch_request_parses() {
    let json = r#"{"id":41,"type":"schedule_list/fetch","schedule_id":"s1"}"#;
    let req: WsRequest = serde_json::from_str(json).unwrap();

    assert_eq!(req.id(), 41);
    match req {
        WsRequest::Fetch { schedule_id, .. } => assert_eq!(schedule_id, "s1"),
        _ => panic!("expected fetch"),
    }
}

#[test]
fn update_request_parses_nested_data() {
    let json = r#"{
        "id": 42,
        "type": "schedule_list/update",
        "schedule_id": "s1",
        "data": {
            "schedule": [[{"cval": "1", "nval": "2"}]],
            "entities": ["light.kitchen"]
        }
    }"#;
    let req: WsRequest = serde_json::from_str(json).unwrap();

    match req {
        WsRequest::Update {
            id,
            schedule_id,
            data,
        } => {
            assert_eq!(id, 42);
            assert_eq!(schedule_id, "s1");
            assert_eq!(
                data.schedule,
                vec![vec![RulePair {
                    cval: "1".into(),
                    nval: "2".into()
                }]]
            );
            assert_eq!(data.entities, vec!["light.kitchen".to_string()]);
        }
        _ => panic!("expected update"),
    }
}

#[test]
fn command_constants_match_wire_tags() {
    let fetch = format!(r#"{{"id":1,"type":"{SCHEDULE_LIST_FETCH}","schedule_id":"s"}}"#);
    assert!(matches!(
        serde_json::from_str::<WsRequest>(&fetch),
        Ok(WsRequest::Fetch { .. })
    ));

    let update = format!(
        r#"{{"id":2,"type":"{SCHEDULE_LIST_UPDATE}","schedule_id":"s",
             "data":{{"schedule":[],"entities":[]}}}}"#
    );
    assert!(matches!(
        serde_json::from_str::<WsRequest>(&update),
        Ok(WsRequest::Update { .. })
    ));
}

#[test]
fn unknown_command_type_is_rejected() {
    let json = r#"{"id":1,"type":"schedule_list/delete","schedule_id":"s1"}"#;
    assert!(serde_json::from_str::<WsRequest>(json).is_err());
}

#[test]
fn update_without_data_is_rejected() {
    let json = r#"{"id":1,"type":"schedule_list/update","schedule_id":"s1"}"#;
    assert!(serde_json::from_str::<WsRequest>(json).is_err());
}

#[test]
fn update_with_mistyped_entities_is_rejected() {
    let json = r#"{"id":1,"type":"schedule_list/update","schedule_id":"s1",
                   "data":{"schedule":[],"entities":[7]}}"#;
    assert!(serde_json::from_str::<WsRequest>(json).is_err());
}

#[test]
fn response_ok_serialization() {
    let res = Response::ok(7, serde_json::json!({ "schedule": null, "entities": null }));
    let json = serde_json::to_string(&res).unwrap();

    assert!(json.contains(r#""id":7"#));
    assert!(json.contains(r#""success":true"#));
    assert!(json.contains(r#""schedule":null"#));
    // error field must be absent on success
    assert!(!json.contains(r#""error""#));
}

#[test]
fn response_ok_null_result_stays_on_the_wire() {
    let res = Response::ok(9, serde_json::Value::Null);
    let json = serde_json::to_string(&res).unwrap();

    assert!(json.contains(r#""result":null"#));
}

#[test]
fn response_err_serialization() {
    let res = Response::err(8, ERR_ITEM_NOT_FOUND, "schedule not found: s9");
    let json = serde_json::to_string(&res).unwrap();

    assert!(json.contains(r#""success":false"#));
    assert!(json.contains(r#""item_not_found""#));
    // result field must be absent on error
    assert!(!json.contains(r#""result""#));
}

#[test]
fn updated_event_has_no_payload() {
    let ev = EventMessage::new(EVENT_SCHEDULE_LIST_UPDATED).with_seq(3);
    let json = serde_json::to_string(&ev).unwrap();

    assert!(json.contains(r#""type":"event""#));
    assert!(json.contains(r#""event":"schedule_list_updated""#));
    assert!(json.contains(r#""seq":3"#));
    assert!(!json.contains(r#""payload""#));
}

#[test]
fn raw_envelope_recovers_id_from_broken_frames() {
    let raw: RawEnvelope =
        serde_json::from_str(r#"{"id":5,"type":"schedule_list/update"}"#).unwrap();
    assert_eq!(raw.id, Some(5));

    let raw: RawEnvelope = serde_json::from_str(r#"{"type":"garbage"}"#).unwrap();
    assert_eq!(raw.id, None);
}
