use crate::models::{Listing, ListingPreferences};

/// Check whether a listing satisfies the user's preference constraints
///
/// Pure predicate with no hidden state: every specified constraint must
/// hold (exact match for beds/baths, `price_per_bed <= max` for the price
/// cap), and unconstrained fields always pass. Evaluated before a listing
/// is admitted to the graph; rejected listings are never stored, matched,
/// or counted.
#[inline]
pub fn matches_preferences(listing: &Listing, preferences: &ListingPreferences) -> bool {
    if let Some(beds) = preferences.beds {
        if listing.bedrooms != beds {
            return false;
        }
    }

    if let Some(baths) = preferences.baths {
        if listing.bathrooms != baths {
            return false;
        }
    }

    if let Some(max_price_per_bed) = preferences.max_price_per_bed {
        // The divide guard decides for zero-bedroom listings: no price per
        // bed means the cap can never be satisfied.
        match listing.price_per_bed() {
            Ok(price_per_bed) if price_per_bed <= max_price_per_bed => {}
            _ => return false,
        }
    }

    true
}
