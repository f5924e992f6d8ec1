use crate::{node, reference, Sequence};
use sleigh_structs::layout::{
    DEPOT_ID, DEPOT_LIST_TAG, DEPOT_TAG, ID_FIELD, LOCATION_FIELD, LOCATION_TAG,
};
use sleigh_utils::Element;

/// Builds `depotList` with the single depot placed at `anchor`.
///
/// Returns the list and the depot's identifier.
pub fn make_depot(sequence: &mut Sequence, anchor: u64) -> (Element, u64) {
    let mut depots = node(DEPOT_LIST_TAG, sequence);

    let mut depot = node(DEPOT_TAG, sequence);
    depot.sub_element(ID_FIELD).text = Some(DEPOT_ID.to_string());
    depot.push(reference(LOCATION_FIELD, anchor, LOCATION_TAG));
    depots.push(depot);

    (depots, sequence.current())
}
