use sleigh_importer::*;
use sleigh_structs::{core::Gift, layout::*};
use sleigh_utils::{xml, Element};

fn solution() -> Element {
    make_document(&[
        Gift::new("1", "10.0", "20.0", "5"),
        Gift::new("2", "11.0", "21.0", "6"),
    ])
    .unwrap()
}

#[test]
fn test_dangling_reference() {
    let mut solution = solution();
    solution.children[2].children[0].children[1].set_attr(REFERENCE_ATTR, "99");
    assert!(matches!(
        check_document(&solution),
        Err(ImportError::DanglingReference { reference }) if reference == "99"
    ));
}

#[test]
fn test_reference_to_wrong_type() {
    let mut solution = solution();
    // first vehicle's depot now points at the root
    solution.children[3].children[0].children[2].set_attr(REFERENCE_ATTR, "1");
    assert!(matches!(
        check_document(&solution),
        Err(ImportError::MismatchedReference { .. })
    ));
}

#[test]
fn test_duplicate_identifier() {
    let mut solution = solution();
    solution.children[1].children[1].set_attr(IDENTIFIER_ATTR, "7");
    assert!(matches!(
        check_document(&solution),
        Err(ImportError::DuplicateIdentifier { identifier: 7 })
    ));
}

#[test]
fn test_gap_in_identifiers() {
    let mut solution = solution();
    solution.children[3].children[2].set_attr(IDENTIFIER_ATTR, "15");
    assert!(matches!(
        check_document(&solution),
        Err(ImportError::NonContiguousIdentifiers {
            expected: 14,
            actual: 15
        })
    ));
}

#[test]
fn test_lists_out_of_order() {
    let mut solution = solution();
    solution.children.swap(2, 3);
    assert!(matches!(
        check_document(&solution),
        Err(ImportError::MalformedDocument { .. })
    ));
}

#[test]
fn test_wrong_root() {
    let parsed = xml::parse("<VrpVehicleRoutingSolution id=\"1\" />").unwrap();
    assert!(matches!(
        check_document(&parsed),
        Err(ImportError::MalformedDocument { .. })
    ));
}

#[test]
fn test_read_back_dangling_customer_location() {
    let mut solution = solution();
    solution.children[1].children[0].children[2].set_attr(REFERENCE_ATTR, "42");
    assert!(matches!(
        read_gifts_back(&solution),
        Err(ImportError::DanglingReference { .. })
    ));
}
