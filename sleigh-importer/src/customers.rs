use crate::{node, reference, Sequence};
use sleigh_structs::{
    core::Gift,
    layout::{
        CUSTOMER_LIST_TAG, CUSTOMER_TAG, FIRST_LOCATION_IDENTIFIER, ID_FIELD, LOCATION_FIELD,
        LOCATION_TAG, WEIGHT_FIELD,
    },
};
use sleigh_utils::Element;
use tracing::debug;

/// Builds `customerList`, one customer per gift.
///
/// Customer `i` references location identifier `FIRST_LOCATION_IDENTIFIER + i`.
/// The reference is positional: it holds only while the location list is
/// built first, straight after the root.
pub fn make_customers(gifts: &[Gift], sequence: &mut Sequence) -> Element {
    let mut customers = node(CUSTOMER_LIST_TAG, sequence);
    let mut location_ref = FIRST_LOCATION_IDENTIFIER;

    for gift in gifts {
        let mut customer = node(CUSTOMER_TAG, sequence);
        customer.sub_element(ID_FIELD).text = Some(gift.id.clone());
        customer.sub_element(WEIGHT_FIELD).text = Some(gift.weight.clone());
        customer.push(reference(LOCATION_FIELD, location_ref, LOCATION_TAG));
        customers.push(customer);

        location_ref += 1;
    }
    debug!("built {} customers", customers.children.len());

    customers
}
