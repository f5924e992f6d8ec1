use crate::{node, reference, Sequence};
use sleigh_structs::layout::{
    DEPOT_FIELD, DEPOT_TAG, FLEET_SIZE, ID_FIELD, VEHICLE_LIST_TAG, VEHICLE_TAG, VEHICLE_WEAR,
    WEAR_FIELD,
};
use sleigh_utils::Element;

/// Builds `vehicleList`: [`FLEET_SIZE`] vehicles numbered from 1, all based at `depot`.
pub fn make_vehicles(sequence: &mut Sequence, depot: u64) -> Element {
    let mut vehicles = node(VEHICLE_LIST_TAG, sequence);

    for i in 1..=FLEET_SIZE {
        let mut vehicle = node(VEHICLE_TAG, sequence);
        vehicle.sub_element(ID_FIELD).text = Some(i.to_string());
        vehicle.sub_element(WEAR_FIELD).text = Some(VEHICLE_WEAR.to_string());
        vehicle.push(reference(DEPOT_FIELD, depot, DEPOT_TAG));
        vehicles.push(vehicle);
    }

    vehicles
}
