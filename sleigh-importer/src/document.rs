use crate::{
    make_customers, make_depot, make_locations, make_vehicles, node, ImportError, ImportResult,
    Sequence,
};
use sleigh_structs::{
    core::Gift,
    layout::{
        CUSTOMER_LIST_TAG, CUSTOMER_TAG, IDENTIFIER_ATTR, ID_FIELD, LATITUDE_FIELD,
        LOCATION_FIELD, LOCATION_LIST_TAG, LOCATION_TAG, LONGITUDE_FIELD, REFERENCE_ATTR,
        ROOT_TAG, WEIGHT_FIELD,
    },
};
use sleigh_utils::Element;
use std::{collections::HashMap, io::Write, path::Path};
use tempfile::NamedTempFile;
use tracing::debug;

/// Builds the whole `VrpTimeWindowedVehicleRoutingSolution` for `gifts`.
///
/// Identifiers are issued root first, then locations, customers, depot
/// and vehicles, and the four lists are appended to the root in that
/// same order.
pub fn make_document(gifts: &[Gift]) -> ImportResult<Element> {
    let mut sequence = Sequence::new();
    let mut solution = node(ROOT_TAG, &mut sequence);

    let (locations, anchor) = make_locations(gifts, &mut sequence)?;
    let customers = make_customers(gifts, &mut sequence);
    let (depots, depot) = make_depot(&mut sequence, anchor);
    let vehicles = make_vehicles(&mut sequence, depot);

    solution.push(locations);
    solution.push(customers);
    solution.push(depots);
    solution.push(vehicles);
    debug!("issued {} identifiers", sequence.current());

    Ok(solution)
}

/// Serializes `document` into a temporary file beside `path` and renames it
/// into place, so `path` never holds a partial document. On any failure the
/// temporary file is removed.
pub fn write_document(document: &Element, path: impl AsRef<Path>) -> ImportResult<()> {
    let path = path.as_ref();
    let xml = document.to_xml_string()?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(xml.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ImportError::Io(e.error))?;
    Ok(())
}

/// Recovers the gifts a document was built from, one per customer, with
/// coordinates taken from the location each customer references.
pub fn read_gifts_back(document: &Element) -> ImportResult<Vec<Gift>> {
    let locations: HashMap<&str, &Element> = list(document, LOCATION_LIST_TAG)?
        .children_named(LOCATION_TAG)
        .filter_map(|l| l.attr(IDENTIFIER_ATTR).map(|id| (id, l)))
        .collect();

    list(document, CUSTOMER_LIST_TAG)?
        .children_named(CUSTOMER_TAG)
        .map(|customer| -> ImportResult<Gift> {
            let reference = customer
                .child(LOCATION_FIELD)
                .and_then(|l| l.attr(REFERENCE_ATTR))
                .ok_or_else(|| malformed(format!("{} without a location", CUSTOMER_TAG)))?;
            let location =
                locations
                    .get(reference)
                    .ok_or_else(|| ImportError::DanglingReference {
                        reference: reference.to_string(),
                    })?;
            Ok(Gift::new(
                field(customer, ID_FIELD)?,
                field(location, LATITUDE_FIELD)?,
                field(location, LONGITUDE_FIELD)?,
                field(customer, WEIGHT_FIELD)?,
            ))
        })
        .collect()
}

pub(crate) fn list<'a>(document: &'a Element, tag: &str) -> ImportResult<&'a Element> {
    document
        .child(tag)
        .ok_or_else(|| malformed(format!("missing {}", tag)))
}

/// Text of the `name` child; present but empty reads as "".
pub(crate) fn field<'a>(element: &'a Element, name: &str) -> ImportResult<&'a str> {
    element
        .child(name)
        .map(|c| c.text.as_deref().unwrap_or(""))
        .ok_or_else(|| malformed(format!("{} without {}", element.tag, name)))
}

pub(crate) fn malformed(reason: String) -> ImportError {
    ImportError::MalformedDocument { reason }
}
