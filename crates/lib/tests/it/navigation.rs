//! Navigation resolution over a realistic document shape.

use apidraft::navigation::{
    NavigationKind, resolve_navigation_object, resolve_nearest_existing,
    resolve_nearest_operation,
};

use crate::helpers::{path, sample_document};

/// A deeply nested schema property routes to the owning schema, not the
/// response or operation above it: the nearest navigable ancestor wins.
#[test]
fn test_nearest_ancestor_tie_break() {
    let doc = sample_document();
    let inner_schema = doc
        .resolve(&path("/paths/~1pets/get/responses/200/schema/properties/name"))
        .unwrap();
    let response_schema = doc
        .resolve(&path("/paths/~1pets/get/responses/200/schema"))
        .unwrap();

    // The `name` property schema is itself navigable.
    let target = resolve_navigation_object(&doc, inner_schema);
    assert_eq!(target.node, inner_schema);
    assert_eq!(target.kind, NavigationKind::Schema);

    // Its grouping container routes to the response's schema, skipping
    // neither up to the response nor the operation.
    let properties = doc
        .resolve(&path("/paths/~1pets/get/responses/200/schema/properties"))
        .unwrap();
    let target = resolve_navigation_object(&doc, properties);
    assert_eq!(target.node, response_schema);
    assert_eq!(target.kind, NavigationKind::Schema);
}

#[test]
fn test_response_and_path_item_routing() {
    let doc = sample_document();

    let ok = doc.resolve(&path("/paths/~1pets/get/responses/200")).unwrap();
    let target = resolve_navigation_object(&doc, ok);
    assert_eq!(target.node, ok);
    assert_eq!(target.kind, NavigationKind::Response);

    // The responses container sits between operation and response; it
    // routes upward to the path item.
    let responses = doc.resolve(&path("/paths/~1pets/get/responses")).unwrap();
    let pets = doc.resolve(&path("/paths/~1pets")).unwrap();
    let target = resolve_navigation_object(&doc, responses);
    assert_eq!(target.node, pets);
    assert_eq!(target.kind, NavigationKind::PathItem);
}

#[test]
fn test_root_and_info_route_to_info_view() {
    let doc = sample_document();

    let target = resolve_navigation_object(&doc, doc.root());
    assert_eq!(target.node, doc.root());
    assert_eq!(target.kind, NavigationKind::Info);

    let info = doc.resolve(&path("/info")).unwrap();
    let target = resolve_navigation_object(&doc, info);
    assert_eq!(target.node, doc.root());
    assert_eq!(target.kind, NavigationKind::Info);
}

/// Selecting a location that does not exist yet resolves to the deepest
/// node that does.
#[test]
fn test_nearest_existing_for_future_locations() {
    let doc = sample_document();
    let get = doc.resolve(&path("/paths/~1pets/get")).unwrap();

    // A response that has not been created yet.
    let future = path("/paths/~1pets/get/responses/404/schema");
    let responses = doc.resolve(&path("/paths/~1pets/get/responses")).unwrap();
    assert_eq!(resolve_nearest_existing(&doc, &future), Some(responses));

    // A whole operation that has not been created yet.
    let future = path("/paths/~1pets/post/requestBody");
    let pets = doc.resolve(&path("/paths/~1pets")).unwrap();
    assert_eq!(resolve_nearest_existing(&doc, &future), Some(pets));

    // An existing path resolves exactly.
    assert_eq!(
        resolve_nearest_existing(&doc, &path("/paths/~1pets/get")),
        Some(get)
    );

    // Nothing matches: the root is the nearest existing node.
    assert_eq!(
        resolve_nearest_existing(&doc, &path("/webhooks/newPet")),
        Some(doc.root())
    );
}

#[test]
fn test_nearest_operation_along_path() {
    let doc = sample_document();
    let get = doc.resolve(&path("/paths/~1pets/get")).unwrap();

    assert_eq!(
        resolve_nearest_operation(&doc, &path("/paths/~1pets/get/responses/200")),
        Some(get)
    );
    assert_eq!(
        resolve_nearest_operation(&doc, &path("/components/schemas/Pet")),
        None
    );
}
