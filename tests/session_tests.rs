mod common;

use std::io::Cursor;

use bounds_header::plugin::message::{PluginRequest, PluginResponse};
use bounds_header::plugin::session::{PluginSession, SessionStep};
use bounds_header::{GeneratorOptions, Selection};
use common::utils::{frame, node};

fn session_with(selection: Selection) -> PluginSession {
    PluginSession::new(selection, GeneratorOptions::default())
}

fn responses(output: &[u8]) -> Vec<PluginResponse> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn generate_request_yields_save_text() {
    let mut session = session_with(Selection::new(vec![frame("A", vec![node("B")])]));

    match session.handle(&PluginRequest::Generate) {
        SessionStep::Respond(PluginResponse::SaveText { payload }) => {
            assert!(payload.contains("extern const float fbh_A_B[4];"));
        }
        other => panic!("Expected SaveText, got {:?}", other),
    }
}

#[test]
fn empty_selection_yields_error_payload() {
    let mut session = session_with(Selection::default());

    assert_eq!(
        session.handle(&PluginRequest::Generate),
        SessionStep::Respond(PluginResponse::Error {
            payload: "You must select at least 1 node/group!".into()
        })
    );
    assert!(!session.is_closed());
}

#[test]
fn cancel_closes_and_later_requests_are_ignored() {
    let mut session = session_with(Selection::new(vec![node("A")]));

    assert_eq!(session.handle(&PluginRequest::Cancel), SessionStep::Close);
    assert!(session.is_closed());
    assert_eq!(session.handle(&PluginRequest::Generate), SessionStep::Ignored);
}

#[test]
fn serve_answers_each_line_until_cancel() {
    let mut session = session_with(Selection::new(vec![node("A")]));
    let input = "{\"type\":\"generate\"}\n\n{\"type\":\"generate\"}\n{\"type\":\"cancel\"}\n{\"type\":\"generate\"}\n";
    let mut output = Vec::new();

    let handled = session.serve(Cursor::new(input), &mut output).unwrap();

    assert_eq!(handled, 3);
    let resps = responses(&output);
    assert_eq!(resps.len(), 2);
    assert_eq!(resps[0], resps[1]);
    assert!(matches!(resps[0], PluginResponse::SaveText { .. }));
}

#[test]
fn serve_reports_malformed_lines_and_continues() {
    let mut session = session_with(Selection::new(vec![node("A")]));
    let input = "not json\n{\"type\":\"resize\"}\n{\"type\":\"generate\"}\n";
    let mut output = Vec::new();

    let handled = session.serve(Cursor::new(input), &mut output).unwrap();

    assert_eq!(handled, 1);
    let resps = responses(&output);
    assert_eq!(resps.len(), 3);
    match &resps[0] {
        PluginResponse::Error { payload } => assert!(payload.starts_with("malformed request")),
        other => panic!("Expected Error, got {:?}", other),
    }
    assert!(matches!(resps[1], PluginResponse::Error { .. }));
    assert!(matches!(resps[2], PluginResponse::SaveText { .. }));
}
