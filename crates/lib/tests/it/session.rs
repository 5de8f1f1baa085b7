//! Engine-level history invariants, exercised end to end.

use apidraft::{
    EditorSession, Value,
    command::SetPropertyCommand,
};

use crate::helpers::{path, sample_session, title};

fn set_title(session: &mut EditorSession, value: &str) {
    session
        .execute_command(
            Box::new(SetPropertyCommand::new(path("/info"), "title", value)),
            format!("set title to '{value}'"),
        )
        .unwrap();
}

/// Linear history: after any single undo, redo replays exactly the most
/// recent command and reproduces its post-state.
#[test]
fn test_linear_history_undo_then_redo() {
    let mut session = sample_session();
    set_title(&mut session, "A");
    set_title(&mut session, "B");
    set_title(&mut session, "C");

    assert!(session.undo().unwrap());
    assert_eq!(title(&session), Some(Value::from("B")));

    assert!(session.redo().unwrap());
    assert_eq!(title(&session), Some(Value::from("C")));
}

/// Redo-branch invalidation: a fresh execution after undos clears the redo
/// stack and subsequent redo is a no-op.
#[test]
fn test_redo_branch_invalidation() {
    let mut session = sample_session();
    set_title(&mut session, "A");
    set_title(&mut session, "B");

    session.undo().unwrap();
    assert!(session.can_redo());

    set_title(&mut session, "C");
    assert!(!session.can_redo());
    assert!(!session.redo().unwrap());
    assert_eq!(title(&session), Some(Value::from("C")));
}

/// Bounded eviction: executing `max + k` commands keeps exactly `max`
/// entries, dropping the oldest `k`, and the survivors undo in order.
#[test]
fn test_bounded_history_evicts_oldest() {
    let mut session = EditorSession::with_history_capacity(3);
    session.load_document(crate::helpers::sample_document());
    for value in ["A", "B", "C", "D", "E"] {
        set_title(&mut session, value);
    }

    // Only the 3 most recent edits are undoable.
    assert!(session.undo().unwrap());
    assert_eq!(title(&session), Some(Value::from("D")));
    assert!(session.undo().unwrap());
    assert_eq!(title(&session), Some(Value::from("C")));
    assert!(session.undo().unwrap());
    assert_eq!(title(&session), Some(Value::from("B")));

    // "A" and the original title were evicted.
    assert!(!session.undo().unwrap());
    assert_eq!(title(&session), Some(Value::from("B")));
}

/// Undo and redo both restore the selection captured before the original
/// execution, not whatever was selected at undo time.
#[test]
fn test_undo_redo_restore_focus_to_pre_execute_selection() {
    let mut session = sample_session();
    session.select(path("/info"), Some("title"), false).unwrap();
    let selected_before = session.selection().clone();

    set_title(&mut session, "A");

    // Move the focus somewhere else entirely.
    session
        .select(path("/paths/~1pets/get"), None, false)
        .unwrap();

    session.undo().unwrap();
    assert_eq!(session.selection().path, selected_before.path);
    assert_eq!(session.selection().node, selected_before.node);
    assert_eq!(session.selection().property, selected_before.property);
    assert!(session.selection().highlight);

    // Move focus again; redo must return to the same snapshot.
    session.select(path("/components/schemas/Pet"), None, false).unwrap();
    session.redo().unwrap();
    assert_eq!(session.selection().path, selected_before.path);
    assert_eq!(session.selection().property, selected_before.property);
    assert!(session.selection().highlight);
}

/// Empty-stack undo/redo are no-ops: false, no error, no state change.
#[test]
fn test_empty_stack_operations_are_idempotent() {
    let mut session = sample_session();
    session.select(path("/info"), None, false).unwrap();
    let selection_before = session.selection().clone();
    let version_before = session.version();

    assert!(!session.undo().unwrap());
    assert!(!session.redo().unwrap());
    assert!(!session.can_undo());
    assert!(!session.can_redo());
    assert_eq!(title(&session), Some(Value::from("Petstore")));
    assert_eq!(session.selection(), &selection_before);
    assert_eq!(session.version(), version_before);
}

/// The end-to-end scenario: two title edits, two undos back to the
/// original, two redos forward again.
#[test]
fn test_end_to_end_title_scenario() {
    let mut session = sample_session();

    set_title(&mut session, "A");
    set_title(&mut session, "B");
    assert_eq!(title(&session), Some(Value::from("B")));

    assert!(session.undo().unwrap());
    assert_eq!(title(&session), Some(Value::from("A")));

    assert!(session.undo().unwrap());
    assert_eq!(title(&session), Some(Value::from("Petstore")));

    assert!(session.redo().unwrap());
    assert_eq!(title(&session), Some(Value::from("A")));

    assert!(session.redo().unwrap());
    assert_eq!(title(&session), Some(Value::from("B")));

    assert!(!session.redo().unwrap());
}

/// Redoing a deletion restores focus toward the deleted location: the
/// snapshot's node is gone again, so the selection falls back to the
/// nearest existing node along the stored path.
#[test]
fn test_redo_of_delete_falls_back_to_nearest_existing() {
    use apidraft::command::DeleteNodeCommand;

    let mut session = sample_session();
    let get_path = path("/paths/~1pets/get");
    session.select(get_path.clone(), None, false).unwrap();
    let get = session.selection().node.unwrap();

    session
        .execute_command(
            Box::new(DeleteNodeCommand::new(get_path.clone())),
            "delete get operation",
        )
        .unwrap();

    // Undo reattaches the subtree; the snapshot's node id is live again.
    session.undo().unwrap();
    assert_eq!(session.selection().node, Some(get));

    // Redo removes it again; the stored path no longer resolves, so the
    // selection lands on the nearest existing ancestor, the path item.
    session.redo().unwrap();
    let doc = session.document().unwrap();
    let pets = doc.resolve(&path("/paths/~1pets")).unwrap();
    assert_eq!(session.selection().path, Some(get_path));
    assert_eq!(session.selection().node, Some(pets));
    assert!(session.selection().highlight);
}
