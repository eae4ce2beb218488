use std::collections::BTreeMap;

use sas_pidl::collectors::ErrorList;
use sas_pidl::{Document, Element, JsonClientHelper, JsonCodec, Node};
use sas_pidl_core::errors::CodecError;
use sas_pidl_core::{BinData, InvokeStatus, SasErrorCollector, Transport, TransportResponse};
use proptest::prelude::*;

struct EchoTransport;

impl Transport for EchoTransport {
    fn invoke(&self, request: &BinData, _errors: &mut dyn SasErrorCollector) -> TransportResponse {
        TransportResponse::ok(request.clone())
    }
}

fn name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_.-]{0,6}"
}

fn attributes() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(name(), ".{0,10}", 0..3)
}

/// Text first, then one contiguous run per child name.
fn build(
    name: String,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
    groups: BTreeMap<String, Vec<Element>>,
) -> Element {
    let mut element = Element::new(name);
    element.attributes = attributes.into_iter().collect();
    if let Some(text) = text {
        element.children.push(Node::Text(text));
    }
    for (group, members) in groups {
        for mut child in members {
            child.name = group.clone();
            element.children.push(Node::Element(child));
        }
    }
    element
}

fn element() -> impl Strategy<Value = Element> {
    let leaf = (name(), attributes(), prop::option::of(".{1,10}"))
        .prop_map(|(n, a, t)| build(n, a, t, BTreeMap::new()));
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            name(),
            attributes(),
            prop::option::of(".{1,10}"),
            prop::collection::btree_map(name(), prop::collection::vec(inner, 1..3), 0..4),
        )
            .prop_map(|(n, a, t, g)| build(n, a, t, g))
    })
}

proptest! {
    #[test]
    fn codec_round_trip(root in element()) {
        let codec = JsonCodec::new();
        let doc = Document::new(root);
        let bytes = codec.encode(&doc).unwrap();
        prop_assert_eq!(codec.decode(&bytes).unwrap(), doc);
    }

    #[test]
    fn echo_returns_request(root in element()) {
        let request = Document::new(root);
        let client = JsonClientHelper::new(EchoTransport);
        let mut errors = ErrorList::new();
        let outcome = client.invoke(&request, &mut errors).unwrap();
        prop_assert_eq!(outcome.status, InvokeStatus::Ok);
        prop_assert_eq!(outcome.response, Some(request));
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn separated_siblings_are_rejected(a in name(), b in name()) {
        prop_assume!(a != b);
        let doc = Document::new(
            Element::new("r")
                .with_child(Element::new(a.as_str()))
                .with_child(Element::new(b.as_str()))
                .with_child(Element::new(a.as_str())),
        );
        match JsonCodec::new().encode(&doc) {
            Err(CodecError::UnsupportedConstruct { path, .. }) => {
                prop_assert_eq!(path, format!("/r/{}", a));
            }
            other => prop_assert!(false, "unexpected: {:?}", other),
        }
    }

    #[test]
    fn nesting_past_the_limit_is_rejected(extra in 1usize..5000, objects in any::<bool>()) {
        let codec = JsonCodec::new();
        let depth = codec.max_depth() + extra;
        let text = if objects {
            format!("{{\"r\":{}1{}}}", "{\"a\":".repeat(depth), "}".repeat(depth))
        } else {
            format!("{}{}", "[".repeat(depth), "]".repeat(depth))
        };
        let result = codec.decode(&BinData::from(text.as_str()));
        prop_assert!(
            matches!(result, Err(CodecError::DepthExceeded { .. })),
            "expected DepthExceeded, got {:?}",
            result
        );
    }
}
