//! Fixed layout of a `VrpTimeWindowedVehicleRoutingSolution` document.
//!
//! Consumers resolve cross references by identifier, and some references
//! are computed from position alone (customers point at locations by
//! counting up from [`FIRST_LOCATION_IDENTIFIER`]). The constants below are
//! chained from one another so that moving a node in the build order
//! shows up as a layout mismatch at build time instead of as dangling
//! references in the output.

/// Value of the sequence before anything is issued.
pub const SEQUENCE_START: u64 = 0;
/// Solution root, first node built.
pub const ROOT_IDENTIFIER: u64 = SEQUENCE_START + 1;
/// `locationList` is built straight after the root.
pub const LOCATION_LIST_IDENTIFIER: u64 = ROOT_IDENTIFIER + 1;
/// First gift location. Customer `i` references `FIRST_LOCATION_IDENTIFIER + i`.
pub const FIRST_LOCATION_IDENTIFIER: u64 = LOCATION_LIST_IDENTIFIER + 1;

pub const ANCHOR_LATITUDE: &str = "90.0";
pub const ANCHOR_LONGITUDE: &str = "0.0";

pub const DEPOT_ID: &str = "1";
pub const FLEET_SIZE: usize = 3;
pub const VEHICLE_WEAR: &str = "100";

pub const ROOT_TAG: &str = "VrpTimeWindowedVehicleRoutingSolution";
pub const LOCATION_LIST_TAG: &str = "locationList";
pub const LOCATION_TAG: &str = "VrpAirLocation";
pub const CUSTOMER_LIST_TAG: &str = "customerList";
pub const CUSTOMER_TAG: &str = "VrpTimeWindowedCustomer";
pub const DEPOT_LIST_TAG: &str = "depotList";
pub const DEPOT_TAG: &str = "VrpTimeWindowedDepot";
pub const VEHICLE_LIST_TAG: &str = "vehicleList";
pub const VEHICLE_TAG: &str = "VrpVehicle";

// attributes
pub const IDENTIFIER_ATTR: &str = "id";
pub const REFERENCE_ATTR: &str = "reference";
pub const CLASS_ATTR: &str = "clas";

// fields
pub const ID_FIELD: &str = "id";
pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";
pub const WEIGHT_FIELD: &str = "weight";
pub const LOCATION_FIELD: &str = "location";
pub const DEPOT_FIELD: &str = "depot";
pub const WEAR_FIELD: &str = "wear";
