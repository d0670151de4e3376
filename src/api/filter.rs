//! Client-side visibility and query matching over fetched offers.

// self
use crate::{
	api::models::{Offer, OfferStatus},
	auth::{Role, SubjectId},
};

/// Returns `true` when `subject`, acting as `role`, may see the offer.
///
/// Sellers see their own offers. Buyers and carriers see offers assigned to them plus any offer in
/// the `assigned` state. Agents see everything.
pub fn visible_to(offer: &Offer, role: Role, subject: &SubjectId) -> bool {
	let is = |id: Option<&str>| id == Some(subject.as_ref());

	match role {
		Role::Seller => is(Some(offer.seller_id.as_str())),
		Role::Buyer => is(offer.buyer_id.as_deref()) || offer.status == OfferStatus::Assigned,
		Role::Carrier => is(offer.carrier_id.as_deref()) || offer.status == OfferStatus::Assigned,
		Role::Agent => true,
	}
}

/// Case-insensitive substring match on make, model, year, or id.
///
/// A blank query matches nothing.
pub fn matches_query(offer: &Offer, query: &str) -> bool {
	let needle = query.trim().to_lowercase();

	if needle.is_empty() {
		return false;
	}

	[
		offer.listing.vehicle_make.as_str(),
		offer.listing.vehicle_model.as_str(),
		offer.listing.vehicle_year.as_str(),
		offer.id.as_str(),
	]
	.into_iter()
	.any(|field| field.to_lowercase().contains(&needle))
}

/// Offers that are both visible to the identity and match the query, in input order.
pub fn filter_offers<'a>(
	offers: &'a [Offer],
	role: Role,
	subject: &SubjectId,
	query: &str,
) -> Vec<&'a Offer> {
	offers
		.iter()
		.filter(|offer| visible_to(offer, role, subject) && matches_query(offer, query))
		.collect()
}
