use crate::{node, ImportError, ImportResult, Sequence};
use sleigh_structs::{
    core::Gift,
    layout::{
        ANCHOR_LATITUDE, ANCHOR_LONGITUDE, FIRST_LOCATION_IDENTIFIER, ID_FIELD, LATITUDE_FIELD,
        LOCATION_LIST_TAG, LOCATION_TAG, LONGITUDE_FIELD,
    },
};
use sleigh_utils::Element;
use tracing::debug;

/// Id of the synthetic anchor location: the last gift's id plus one.
///
/// The last gift in the given order must hold the largest numeric id,
/// otherwise the anchor could take the id of an existing location.
pub fn anchor_id(gifts: &[Gift]) -> ImportResult<i64> {
    let last = gifts.last().ok_or(ImportError::NoGifts)?;
    let last_id = last.numeric_id().ok_or_else(|| ImportError::InvalidGiftId {
        id: last.id.clone(),
    })?;
    if let Some(max_id) = gifts.iter().filter_map(Gift::numeric_id).max() {
        if max_id > last_id {
            return Err(ImportError::UnorderedGifts { last_id, max_id });
        }
    }
    last_id.checked_add(1).ok_or_else(|| ImportError::InvalidGiftId {
        id: last.id.clone(),
    })
}

fn location(sequence: &mut Sequence, id: &str, latitude: &str, longitude: &str) -> Element {
    let mut location = node(LOCATION_TAG, sequence);
    location.sub_element(ID_FIELD).text = Some(id.to_string());
    location.sub_element(LATITUDE_FIELD).text = Some(latitude.to_string());
    location.sub_element(LONGITUDE_FIELD).text = Some(longitude.to_string());
    location
}

/// Builds `locationList`: one location per gift followed by the anchor.
///
/// Returns the list and the anchor's identifier. Must run straight after
/// the root takes its identifier; the first location is checked against
/// [`FIRST_LOCATION_IDENTIFIER`].
pub fn make_locations(gifts: &[Gift], sequence: &mut Sequence) -> ImportResult<(Element, u64)> {
    let anchor_id = anchor_id(gifts)?;

    let mut locations = node(LOCATION_LIST_TAG, sequence);
    for gift in gifts {
        let location = location(sequence, &gift.id, &gift.latitude, &gift.longitude);
        if locations.children.is_empty() && sequence.current() != FIRST_LOCATION_IDENTIFIER {
            return Err(ImportError::LayoutMismatch {
                node: LOCATION_TAG,
                expected: FIRST_LOCATION_IDENTIFIER,
                actual: sequence.current(),
            });
        }
        locations.push(location);
    }

    let anchor = location(
        sequence,
        &anchor_id.to_string(),
        ANCHOR_LATITUDE,
        ANCHOR_LONGITUDE,
    );
    locations.push(anchor);
    debug!(
        "built {} locations, anchor id {} at identifier {}",
        locations.children.len(),
        anchor_id,
        sequence.current()
    );

    Ok((locations, sequence.current()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gifts(ids: &[&str]) -> Vec<Gift> {
        ids.iter().map(|id| Gift::new(*id, "1.5", "2.5", "3")).collect()
    }

    #[test]
    fn test_anchor_id_uses_last_gift() {
        assert_eq!(anchor_id(&gifts(&["1", "2", "7"])).unwrap(), 8);
        assert_eq!(anchor_id(&gifts(&["x", "4"])).unwrap(), 5);
        assert_eq!(anchor_id(&gifts(&["-3", "-1"])).unwrap(), 0);
        assert_eq!(anchor_id(&gifts(&["1", " 7"])).unwrap(), 8);
    }

    #[test]
    fn test_anchor_id_preconditions() {
        assert!(matches!(anchor_id(&[]), Err(ImportError::NoGifts)));
        assert!(matches!(
            anchor_id(&gifts(&["1", "abc"])),
            Err(ImportError::InvalidGiftId { .. })
        ));
        assert!(matches!(
            anchor_id(&gifts(&["5", "2"])),
            Err(ImportError::UnorderedGifts {
                last_id: 2,
                max_id: 5
            })
        ));
        let max = i64::MAX.to_string();
        assert!(matches!(
            anchor_id(&gifts(&[max.as_str()])),
            Err(ImportError::InvalidGiftId { .. })
        ));
    }

    #[test]
    fn test_first_location_must_follow_root() {
        let mut sequence = Sequence::new();
        assert!(matches!(
            make_locations(&gifts(&["1"]), &mut sequence),
            Err(ImportError::LayoutMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }
}
