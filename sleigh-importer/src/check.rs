use crate::{document::list, document::malformed, ImportError, ImportResult};
use sleigh_structs::layout::{
    CLASS_ATTR, CUSTOMER_LIST_TAG, CUSTOMER_TAG, DEPOT_LIST_TAG, DEPOT_TAG, IDENTIFIER_ATTR,
    LOCATION_LIST_TAG, LOCATION_TAG, REFERENCE_ATTR, ROOT_IDENTIFIER, ROOT_TAG, VEHICLE_LIST_TAG,
    VEHICLE_TAG,
};
use sleigh_utils::Element;
use std::collections::HashMap;

const LIST_ORDER: [&str; 4] = [
    LOCATION_LIST_TAG,
    CUSTOMER_LIST_TAG,
    DEPOT_LIST_TAG,
    VEHICLE_LIST_TAG,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub locations: usize,
    pub customers: usize,
    pub depots: usize,
    pub vehicles: usize,
    pub identifiers: u64,
}

/// Checks that a solution document is internally consistent:
///
/// * the root holds the four lists in build order,
/// * identifiers run 1, 2, 3, ... in document order with no repeats,
/// * every `reference` names an existing identifier, and the referenced
///   element has the tag given by `clas` when one is present.
pub fn check_document(document: &Element) -> ImportResult<DocumentSummary> {
    if document.tag != ROOT_TAG {
        return Err(malformed(format!(
            "root is '{}', expected '{}'",
            document.tag, ROOT_TAG
        )));
    }
    let tags: Vec<&str> = document.children.iter().map(|c| c.tag.as_str()).collect();
    if tags != LIST_ORDER {
        return Err(malformed(format!(
            "root children are {:?}, expected {:?}",
            tags, LIST_ORDER
        )));
    }

    let mut nodes: HashMap<u64, &Element> = HashMap::new();
    let mut expected = ROOT_IDENTIFIER;
    for element in document.descendants() {
        let Some(identifier) = element.attr(IDENTIFIER_ATTR) else {
            continue;
        };
        let identifier: u64 = identifier
            .parse()
            .map_err(|_| malformed(format!("identifier '{}' is not numeric", identifier)))?;
        if nodes.insert(identifier, element).is_some() {
            return Err(ImportError::DuplicateIdentifier { identifier });
        }
        if identifier != expected {
            return Err(ImportError::NonContiguousIdentifiers {
                expected,
                actual: identifier,
            });
        }
        expected += 1;
    }

    for element in document.descendants() {
        let Some(reference) = element.attr(REFERENCE_ATTR) else {
            continue;
        };
        let target = reference
            .parse::<u64>()
            .ok()
            .and_then(|identifier| nodes.get(&identifier))
            .ok_or_else(|| ImportError::DanglingReference {
                reference: reference.to_string(),
            })?;
        if let Some(class) = element.attr(CLASS_ATTR) {
            if target.tag != class {
                return Err(ImportError::MismatchedReference {
                    reference: reference.to_string(),
                    expected: class.to_string(),
                    actual: target.tag.clone(),
                });
            }
        }
    }

    let count = |list_tag: &str, node_tag: &str| -> ImportResult<usize> {
        Ok(list(document, list_tag)?.children_named(node_tag).count())
    };
    Ok(DocumentSummary {
        locations: count(LOCATION_LIST_TAG, LOCATION_TAG)?,
        customers: count(CUSTOMER_LIST_TAG, CUSTOMER_TAG)?,
        depots: count(DEPOT_LIST_TAG, DEPOT_TAG)?,
        vehicles: count(VEHICLE_LIST_TAG, VEHICLE_TAG)?,
        identifiers: expected - ROOT_IDENTIFIER,
    })
}
