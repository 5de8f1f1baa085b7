//! Composite ordering and command replay semantics through the engine.

use std::{cell::RefCell, rc::Rc};

use apidraft::{
    NodeKind, Value,
    command::{AddNodeCommand, CompositeCommand, SetPropertyCommand},
};

use crate::helpers::{RecordingCommand, path, sample_session};

/// Composite commands execute forward and undo in reverse order.
#[test]
fn test_composite_inversion_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let composite = CompositeCommand::new()
        .with(RecordingCommand::new("a", log.clone()))
        .with(RecordingCommand::new("b", log.clone()))
        .with(RecordingCommand::new("c", log.clone()));

    let mut session = sample_session();
    session
        .execute_command(Box::new(composite), "three recorded steps")
        .unwrap();
    session.undo().unwrap();
    session.redo().unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "execute a",
            "execute b",
            "execute c",
            "undo c",
            "undo b",
            "undo a",
            "execute a",
            "execute b",
            "execute c",
        ]
    );
}

/// A composite whose second step depends on structure the first creates:
/// the whole unit must round-trip through undo and redo.
#[test]
fn test_composite_with_structural_dependency() {
    let mut session = sample_session();
    let composite = CompositeCommand::new()
        .with(AddNodeCommand::new(
            path("/paths"),
            "/owners",
            NodeKind::PathItem,
        ))
        .with(SetPropertyCommand::new(
            path("/paths/~1owners"),
            "summary",
            "Owner collection",
        ));

    session
        .execute_command(Box::new(composite), "add owners path")
        .unwrap();
    {
        let doc = session.document().unwrap();
        let owners = doc.resolve(&path("/paths/~1owners")).unwrap();
        assert_eq!(
            doc.get(owners).unwrap().property("summary"),
            Some(&Value::from("Owner collection"))
        );
    }

    // Undo removes the property first, then the node.
    session.undo().unwrap();
    assert!(
        session
            .document()
            .unwrap()
            .resolve(&path("/paths/~1owners"))
            .is_none()
    );

    // Redo rebuilds both, in dependency order.
    session.redo().unwrap();
    let doc = session.document().unwrap();
    let owners = doc.resolve(&path("/paths/~1owners")).unwrap();
    assert_eq!(
        doc.get(owners).unwrap().property("summary"),
        Some(&Value::from("Owner collection"))
    );
}

/// Replaying a command after undo is equivalent to a single execution,
/// repeated across several cycles.
#[test]
fn test_repeated_undo_redo_cycles_are_stable() {
    let mut session = sample_session();
    session
        .execute_command(
            Box::new(SetPropertyCommand::new(path("/info"), "title", "Pet API")),
            "set title",
        )
        .unwrap();

    for _ in 0..3 {
        session.undo().unwrap();
        assert_eq!(crate::helpers::title(&session), Some(Value::from("Petstore")));
        session.redo().unwrap();
        assert_eq!(crate::helpers::title(&session), Some(Value::from("Pet API")));
    }
}
