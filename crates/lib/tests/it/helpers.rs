use std::{cell::RefCell, rc::Rc};

use apidraft::{
    Command, Document, EditorSession, NodeKind, Value,
    constants::{INFO, PATHS},
    doc::NodePath,
};

/// Builds a small petstore-style document:
///
/// ```text
/// (root document)
/// ├── info                          title, version
/// ├── paths
/// │   └── /pets (path-item)
/// │       └── get (operation)
/// │           └── responses
/// │               └── 200 (response)
/// │                   └── schema (schema)
/// │                       └── properties
/// │                           └── name (schema)
/// └── components
///     └── schemas
///         └── Pet (schema)
/// ```
pub fn sample_document() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let info = doc.add_node(root, INFO, NodeKind::Info).unwrap();
    doc.set_property(info, "title", Value::from("Petstore"))
        .unwrap();
    doc.set_property(info, "version", Value::from("1.0.0"))
        .unwrap();

    let paths = doc.add_node(root, PATHS, NodeKind::Section).unwrap();
    let pets = doc.add_node(paths, "/pets", NodeKind::PathItem).unwrap();
    let get = doc.add_node(pets, "get", NodeKind::Operation).unwrap();
    doc.set_property(get, "summary", Value::from("List all pets"))
        .unwrap();
    let responses = doc.add_node(get, "responses", NodeKind::Section).unwrap();
    let ok = doc.add_node(responses, "200", NodeKind::Response).unwrap();
    let schema = doc.add_node(ok, "schema", NodeKind::Schema).unwrap();
    let props = doc
        .add_node(schema, "properties", NodeKind::Section)
        .unwrap();
    let name = doc.add_node(props, "name", NodeKind::Schema).unwrap();
    doc.set_property(name, "type", Value::from("string")).unwrap();

    let components = doc.add_node(root, "components", NodeKind::Section).unwrap();
    let schemas = doc
        .add_node(components, "schemas", NodeKind::Section)
        .unwrap();
    let pet = doc.add_node(schemas, "Pet", NodeKind::Schema).unwrap();
    doc.set_property(pet, "type", Value::from("object")).unwrap();

    doc
}

/// A session with [`sample_document`] loaded.
pub fn sample_session() -> EditorSession {
    let mut session = EditorSession::new();
    session.load_document(sample_document());
    session
}

/// Parses a pointer, panicking on malformed test input.
pub fn path(pointer: &str) -> NodePath {
    pointer.parse().expect("test pointer must be valid")
}

/// Reads the title property off the sample document's info node.
pub fn title(session: &EditorSession) -> Option<Value> {
    let doc = session.document().unwrap();
    let info = doc.resolve(&path("/info")).unwrap();
    doc.get(info).unwrap().property("title").cloned()
}

/// A command that appends to a shared log on every execute/undo, for
/// asserting invocation order.
#[derive(Debug)]
pub struct RecordingCommand {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingCommand {
    pub fn new(name: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { name, log }
    }
}

impl Command for RecordingCommand {
    fn execute(&mut self, _doc: &mut Document) -> apidraft::Result<()> {
        self.log.borrow_mut().push(format!("execute {}", self.name));
        Ok(())
    }

    fn undo(&mut self, _doc: &mut Document) -> apidraft::Result<()> {
        self.log.borrow_mut().push(format!("undo {}", self.name));
        Ok(())
    }

    fn describe(&self) -> String {
        format!("record '{}'", self.name)
    }
}
