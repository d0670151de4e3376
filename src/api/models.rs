//! Wire models for the marketplace API.
//!
//! Field names follow the API's camelCase JSON. Assignment bodies are the exception and use
//! snake_case. Identifier fields accept both JSON strings and integers because the API is not
//! consistent about them.

// self
use crate::{
	_prelude::*,
	auth::{Role, SubjectId},
	session::SearchSession,
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_SORT_BY: &str = "createdAt";

/// Lifecycle status of an offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
	/// Created by a seller, not yet assigned.
	Draft,
	/// Assigned to a buyer and carrier.
	Assigned,
	/// Cancelled before completion.
	Cancelled,
	/// Delivered and closed.
	Completed,
}
impl OfferStatus {
	/// Returns the stable wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			OfferStatus::Draft => "draft",
			OfferStatus::Assigned => "assigned",
			OfferStatus::Cancelled => "cancelled",
			OfferStatus::Completed => "completed",
		}
	}
}

/// Fuel type of a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
	/// Gasoline engine.
	Gasoline,
	/// Diesel engine.
	Diesel,
	/// Battery electric.
	Electric,
	/// Hybrid drivetrain.
	Hybrid,
	/// Anything else.
	Other,
}

/// Body type of a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
	/// Sedan.
	Sedan,
	/// Sport utility vehicle.
	#[serde(rename = "SUV")]
	Suv,
	/// Pickup or box truck.
	Truck,
	/// Van.
	Van,
	/// Coupe.
	Coupe,
	/// Convertible.
	Convertible,
	/// Station wagon.
	Wagon,
	/// Hatchback.
	Hatchback,
	/// Anything else.
	Other,
}

/// Primary use of a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleUsage {
	/// Personal use.
	Personal,
	/// Commercial use.
	Commercial,
}

/// How the seller holds the vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipType {
	/// Owned outright.
	Owned,
	/// Leased.
	Leased,
	/// Financed with an outstanding loan.
	Financed,
}

/// Title brand recorded for the vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
	/// Clean title.
	Clean,
	/// Salvage title.
	Salvage,
	/// Rebuilt title.
	Rebuilt,
	/// Lemon-law buyback.
	Lemon,
	/// Flood-damaged.
	Flood,
}

/// Yes/no answer to a condition question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
	/// Yes.
	Yes,
	/// No.
	No,
}

/// Whether the vehicle can move under its own power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivetrainCondition {
	/// Starts and drives.
	Drives,
	/// Starts but cannot drive.
	RunsButDoesNotDrive,
	/// Does not start.
	DoesNotRun,
}

/// State of the engine and transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineTransmissionCondition {
	/// Both present and undamaged.
	Intact,
	/// Present but damaged.
	Damaged,
	/// One or both missing.
	Missing,
}

/// Vehicle, ownership, and condition record shared by offers and create requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListing {
	/// Model year, as entered.
	pub vehicle_year: String,
	/// Manufacturer.
	pub vehicle_make: String,
	/// Model name.
	pub vehicle_model: String,
	/// Trim level.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vehicle_trim: Option<String>,
	/// Body type.
	pub vehicle_body_type: BodyType,
	/// Cab type for trucks.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vehicle_cab_type: Option<String>,
	/// Number of doors.
	pub vehicle_door_count: u8,
	/// Fuel type.
	pub vehicle_fuel_type: FuelType,
	/// Free-form body style.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vehicle_body_style: Option<String>,
	/// Personal or commercial use.
	pub vehicle_usage: VehicleUsage,
	/// ZIP code where the vehicle is located.
	pub vehicle_zip_code: String,
	/// How the seller holds the vehicle.
	pub ownership_type: OwnershipType,
	/// Title brand.
	pub ownership_title_type: TitleType,
	/// Odometer reading.
	pub mileage: u64,
	/// Odometer cannot be trusted.
	pub is_mileage_unverifiable: bool,
	/// Whether the vehicle drives.
	pub drivetrain_condition: DrivetrainCondition,
	/// A key or fob is available.
	pub key_or_fob_available: YesNo,
	/// A working battery is installed.
	pub working_battery_installed: YesNo,
	/// All tires hold air.
	pub all_tires_inflated: YesNo,
	/// Any wheel has been removed.
	pub wheels_removed: YesNo,
	/// Driver-side front wheel removed.
	pub wheels_removed_driver_front: bool,
	/// Driver-side rear wheel removed.
	pub wheels_removed_driver_rear: bool,
	/// Passenger-side front wheel removed.
	pub wheels_removed_passenger_front: bool,
	/// Passenger-side rear wheel removed.
	pub wheels_removed_passenger_rear: bool,
	/// Body panels are intact.
	pub body_panels_intact: YesNo,
	/// Body is free of damage.
	pub body_damage_free: YesNo,
	/// Mirrors, lights, and glass are intact.
	pub mirrors_lights_glass_intact: YesNo,
	/// Interior is intact.
	pub interior_intact: YesNo,
	/// Free of flood or fire damage.
	pub flood_fire_damage_free: YesNo,
	/// Engine and transmission state.
	pub engine_transmission_condition: EngineTransmissionCondition,
	/// Airbags have deployed.
	pub airbags_deployed: YesNo,
}

/// Vehicle offer as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
	/// Offer identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub id: String,
	/// Seller that created the offer.
	#[serde(deserialize_with = "de::id_string")]
	pub seller_id: String,
	/// Seller display name.
	#[serde(default)]
	pub seller_name: Option<String>,
	/// Assigned buyer.
	#[serde(default, deserialize_with = "de::opt_id_string")]
	pub buyer_id: Option<String>,
	/// Assigned buyer display name.
	#[serde(default)]
	pub buyer_name: Option<String>,
	/// Assigned carrier.
	#[serde(default, deserialize_with = "de::opt_id_string")]
	pub carrier_id: Option<String>,
	/// Assigned carrier display name.
	#[serde(default)]
	pub carrier_name: Option<String>,
	/// Vehicle identification number.
	#[serde(default)]
	pub vin: Option<String>,
	/// Vehicle, ownership, and condition record.
	#[serde(flatten)]
	pub listing: VehicleListing,
	/// Lifecycle status.
	pub status: OfferStatus,
	/// Creation timestamp (ISO-8601).
	pub created_at: String,
	/// Last update timestamp (ISO-8601).
	pub updated_at: String,
}

/// Input for creating an offer.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateOfferRequest {
	/// Seller creating the offer; sent as its numeric suffix.
	pub seller_id: SubjectId,
	/// Vehicle identification number; sent as an empty string when absent.
	pub vin: Option<String>,
	/// Vehicle, ownership, and condition record.
	pub listing: VehicleListing,
}
impl CreateOfferRequest {
	pub(crate) fn payload(&self) -> CreateOfferPayload<'_> {
		CreateOfferPayload {
			seller_id: self.seller_id.numeric_suffix(),
			vin: self.vin.as_deref().unwrap_or_default(),
			listing: &self.listing,
		}
	}
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOfferPayload<'a> {
	seller_id: u64,
	vin: &'a str,
	#[serde(flatten)]
	listing: &'a VehicleListing,
}

/// Body for assigning an offer to a buyer and carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignOfferRequest {
	/// Numeric buyer identifier.
	pub buyer_id: u64,
	/// Numeric carrier identifier.
	pub carrier_id: u64,
}
impl AssignOfferRequest {
	/// Builds the body from textual subject ids such as `buyer-3` and `carrier-1`.
	pub fn from_subjects(buyer: &SubjectId, carrier: &SubjectId) -> Self {
		Self { buyer_id: buyer.numeric_suffix(), carrier_id: carrier.numeric_suffix() }
	}
}

/// Paging, sorting, and filtering options for listing offers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffersListParams {
	/// 1-based page number (default 1).
	pub page_number: Option<u32>,
	/// Page size (default 20).
	pub page_size: Option<u32>,
	/// Free-text search.
	pub search: Option<String>,
	/// Status filter.
	pub status: Option<OfferStatus>,
	/// Sort field (default `createdAt`).
	pub sort_by: Option<String>,
	/// Sort direction (default descending).
	pub sort_descending: Option<bool>,
}
impl OffersListParams {
	/// Query pairs with defaults applied; empty search strings are omitted.
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = vec![
			("pageNumber", self.page_number.unwrap_or(DEFAULT_PAGE).to_string()),
			("pageSize", self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).to_string()),
			("sortBy", self.sort_by.clone().unwrap_or_else(|| DEFAULT_SORT_BY.into())),
			("sortDescending", self.sort_descending.unwrap_or(true).to_string()),
		];

		if let Some(search) = self.search.as_deref().filter(|search| !search.is_empty()) {
			pairs.push(("search", search.to_owned()));
		}
		if let Some(status) = self.status {
			pairs.push(("status", status.as_str().to_owned()));
		}

		pairs
	}
}

/// Page of offers; `total` is back-filled from `totalCount` when the API omits it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawOffersListResponse")]
pub struct OffersListResponse {
	/// Offers on this page.
	pub offers: Vec<Offer>,
	/// Total matching offers.
	pub total: u64,
	/// 1-based page number.
	pub page: u32,
	/// Page size.
	pub page_size: u32,
	/// Total page count, when reported.
	pub total_pages: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOffersListResponse {
	#[serde(default)]
	offers: Vec<Offer>,
	total: Option<u64>,
	total_count: Option<u64>,
	page: Option<u32>,
	page_size: Option<u32>,
	total_pages: Option<u32>,
}
impl From<RawOffersListResponse> for OffersListResponse {
	fn from(raw: RawOffersListResponse) -> Self {
		Self {
			offers: raw.offers,
			total: raw.total.or(raw.total_count).unwrap_or_default(),
			page: raw.page.unwrap_or(DEFAULT_PAGE),
			page_size: raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			total_pages: raw.total_pages,
		}
	}
}

/// Marketplace user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	/// User identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub id: String,
	/// Display name.
	pub name: String,
	/// Role held by the user.
	#[serde(rename = "type")]
	pub role: Role,
}

#[derive(Deserialize)]
pub(crate) struct UsersResponse {
	#[serde(default)]
	pub(crate) users: Vec<User>,
}

/// Entity family targeted by a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
	/// Offers only.
	#[default]
	Offer,
	/// Purchases only.
	Purchase,
	/// Transports only.
	Transport,
	/// Every entity family.
	All,
}

/// Inclusive date range filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
	/// Range start (ISO-8601).
	pub from: String,
	/// Range end (ISO-8601).
	pub to: String,
}

/// Cross-entity search filters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
	/// Role the search runs as.
	pub user_type: Role,
	/// Subject the search runs as.
	pub user_id: SubjectId,
	/// Free-text query.
	pub query: String,
	/// Entity family to search.
	pub entity_type: EntityType,
	/// Optional status filter.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	/// Optional date range filter.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub date_range: Option<DateRange>,
}
impl SearchFilters {
	/// Builds offer-search filters for the session's selected identity.
	pub fn for_session(session: &SearchSession, query: impl Into<String>) -> Self {
		Self {
			user_type: session.role(),
			user_id: session.subject().clone(),
			query: query.into(),
			entity_type: EntityType::default(),
			status: None,
			date_range: None,
		}
	}

	/// Overrides the entity family.
	pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
		self.entity_type = entity_type;

		self
	}

	/// Adds a status filter.
	pub fn with_status(mut self, status: impl Into<String>) -> Self {
		self.status = Some(status.into());

		self
	}

	/// Adds a date range filter.
	pub fn with_date_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
		self.date_range = Some(DateRange { from: from.into(), to: to.into() });

		self
	}
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchRequest<'a> {
	#[serde(flatten)]
	pub(crate) filters: &'a SearchFilters,
	pub(crate) page: u32,
	pub(crate) page_size: u32,
}

/// Buyer contact details on a purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerDetails {
	/// Buyer name.
	pub name: String,
	/// Buyer email.
	pub email: String,
	/// Buyer phone.
	pub phone: String,
}

/// Purchase status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
	/// Awaiting completion.
	Pending,
	/// Paid and closed.
	Completed,
	/// Cancelled.
	Cancelled,
}

/// Purchase of an offer by a buyer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
	/// Purchase identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub id: String,
	/// Buyer identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub buyer_id: String,
	/// Purchased offer identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub offer_id: String,
	/// Purchase date (ISO-8601).
	pub purchase_date: String,
	/// Purchase amount.
	pub amount: f64,
	/// Purchase status.
	pub status: PurchaseStatus,
	/// Buyer contact details.
	pub buyer_details: BuyerDetails,
	/// Embedded offer, when expanded.
	#[serde(default)]
	pub offer: Option<Box<Offer>>,
	/// Creation timestamp (ISO-8601).
	pub created_at: String,
	/// Last update timestamp (ISO-8601).
	pub updated_at: String,
}

/// Street address used for transport pickup and delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
	/// Street address.
	pub address: String,
	/// City.
	pub city: String,
	/// State.
	pub state: String,
	/// ZIP code.
	pub zip_code: String,
}

/// Transport status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportStatus {
	/// Pickup scheduled.
	Scheduled,
	/// Vehicle on the road.
	InTransit,
	/// Vehicle delivered.
	Delivered,
	/// Transport cancelled.
	Cancelled,
}

/// Vehicle summary carried on a transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportVehicle {
	/// Vehicle identification number.
	pub vin: String,
	/// Manufacturer.
	pub make: String,
	/// Model name.
	pub model: String,
}

/// Carrier contact summary carried on a transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierInfo {
	/// Carrier name.
	pub name: String,
	/// Carrier contact.
	pub contact: String,
}

/// Transport of a purchased vehicle by a carrier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
	/// Transport identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub id: String,
	/// Carrier identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub carrier_id: String,
	/// Purchase identifier.
	#[serde(deserialize_with = "de::id_string")]
	pub purchase_id: String,
	/// Pickup address.
	pub pickup_location: Location,
	/// Delivery address.
	pub delivery_location: Location,
	/// Scheduled date (ISO-8601).
	pub schedule_date: String,
	/// Transport status.
	pub status: TransportStatus,
	/// Vehicle summary.
	#[serde(default)]
	pub vehicle_details: Option<TransportVehicle>,
	/// Carrier contact summary.
	#[serde(default)]
	pub carrier_info: Option<CarrierInfo>,
	/// Creation timestamp (ISO-8601).
	pub created_at: String,
	/// Last update timestamp (ISO-8601).
	pub updated_at: String,
}

/// One search hit; the entity family is inferred from the JSON shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
	/// Offer hit.
	Offer(Box<Offer>),
	/// Purchase hit.
	Purchase(Box<Purchase>),
	/// Transport hit.
	Transport(Box<Transport>),
}

/// Page of search hits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	/// Hits on this page.
	#[serde(default)]
	pub results: Vec<SearchResult>,
	/// Total hits.
	#[serde(default)]
	pub total: u64,
	/// 1-based page number.
	pub page: u32,
	/// Page size.
	pub page_size: u32,
	/// Entity family searched.
	pub entity_type: EntityType,
}
impl SearchResponse {
	/// Iterates over the offer hits only.
	pub fn offers(&self) -> impl Iterator<Item = &Offer> {
		self.results.iter().filter_map(|result| match result {
			SearchResult::Offer(offer) => Some(offer.as_ref()),
			_ => None,
		})
	}
}

/// Category of an autocomplete suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
	/// Vehicle identification number.
	Vin,
	/// Entity identifier.
	Id,
	/// Location.
	Location,
	/// Manufacturer.
	Make,
	/// Model name.
	Model,
	/// Phone number.
	Phone,
}

/// Autocomplete suggestion for a partial query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteItem {
	/// Value to insert into the query.
	pub value: String,
	/// Display label.
	pub label: String,
	/// Suggestion category.
	#[serde(rename = "type")]
	pub kind: SuggestionKind,
	/// Highlighted fragment, when provided.
	#[serde(default)]
	pub highlight: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AutocompleteRequest<'a> {
	pub(crate) query: &'a str,
	pub(crate) user_type: Role,
	pub(crate) user_id: &'a SubjectId,
}

#[derive(Deserialize)]
pub(crate) struct AutocompleteResponse {
	#[serde(default)]
	pub(crate) suggestions: Vec<AutocompleteItem>,
}

mod de {
	// crates.io
	use serde::{Deserializer, de::Error as DeError};
	// self
	use crate::_prelude::*;

	#[derive(Deserialize)]
	#[serde(untagged)]
	enum RawId {
		Text(String),
		Signed(i64),
		Unsigned(u64),
	}
	impl From<RawId> for String {
		fn from(raw: RawId) -> Self {
			match raw {
				RawId::Text(value) => value,
				RawId::Signed(value) => value.to_string(),
				RawId::Unsigned(value) => value.to_string(),
			}
		}
	}

	pub(super) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
	where
		D: Deserializer<'de>,
	{
		RawId::deserialize(deserializer)
			.map(String::from)
			.map_err(|_| DeError::custom("expected a string or integer identifier"))
	}

	pub(super) fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		Option::<RawId>::deserialize(deserializer)
			.map(|raw| raw.map(String::from))
			.map_err(|_| DeError::custom("expected a string or integer identifier"))
	}
}

#[cfg(test)]
pub(crate) mod tests {
	// self
	use super::*;

	pub(crate) fn listing() -> VehicleListing {
		VehicleListing {
			vehicle_year: "2018".into(),
			vehicle_make: "Toyota".into(),
			vehicle_model: "Camry".into(),
			vehicle_trim: None,
			vehicle_body_type: BodyType::Suv,
			vehicle_cab_type: None,
			vehicle_door_count: 4,
			vehicle_fuel_type: FuelType::Hybrid,
			vehicle_body_style: None,
			vehicle_usage: VehicleUsage::Personal,
			vehicle_zip_code: "90210".into(),
			ownership_type: OwnershipType::Owned,
			ownership_title_type: TitleType::Clean,
			mileage: 42_000,
			is_mileage_unverifiable: false,
			drivetrain_condition: DrivetrainCondition::RunsButDoesNotDrive,
			key_or_fob_available: YesNo::Yes,
			working_battery_installed: YesNo::Yes,
			all_tires_inflated: YesNo::No,
			wheels_removed: YesNo::No,
			wheels_removed_driver_front: false,
			wheels_removed_driver_rear: false,
			wheels_removed_passenger_front: false,
			wheels_removed_passenger_rear: false,
			body_panels_intact: YesNo::Yes,
			body_damage_free: YesNo::Yes,
			mirrors_lights_glass_intact: YesNo::Yes,
			interior_intact: YesNo::Yes,
			flood_fire_damage_free: YesNo::Yes,
			engine_transmission_condition: EngineTransmissionCondition::Intact,
			airbags_deployed: YesNo::No,
		}
	}

	#[test]
	fn create_payload_uses_numeric_seller_and_empty_vin() {
		let request = CreateOfferRequest {
			seller_id: SubjectId::new("seller-2").expect("Seller fixture should be valid."),
			vin: None,
			listing: listing(),
		};
		let value = serde_json::to_value(request.payload()).expect("Payload should serialize.");

		assert_eq!(value["sellerId"], 2);
		assert_eq!(value["vin"], "");
		assert_eq!(value["vehicleBodyType"], "SUV");
		assert_eq!(value["drivetrainCondition"], "runs_but_does_not_drive");
		assert!(value.get("vehicleTrim").is_none(), "Absent optional fields are omitted.");
	}

	#[test]
	fn list_params_apply_defaults() {
		let pairs = OffersListParams::default().query_pairs();

		assert_eq!(
			pairs,
			vec![
				("pageNumber", "1".to_owned()),
				("pageSize", "20".to_owned()),
				("sortBy", "createdAt".to_owned()),
				("sortDescending", "true".to_owned()),
			]
		);

		let filtered = OffersListParams {
			search: Some("camry".into()),
			status: Some(OfferStatus::Assigned),
			sort_descending: Some(false),
			..OffersListParams::default()
		}
		.query_pairs();

		assert!(filtered.contains(&("search", "camry".to_owned())));
		assert!(filtered.contains(&("status", "assigned".to_owned())));
		assert!(filtered.contains(&("sortDescending", "false".to_owned())));
	}

	#[test]
	fn list_response_backfills_total_from_total_count() {
		let response: OffersListResponse =
			serde_json::from_str(r#"{"offers":[],"totalCount":7,"page":2,"pageSize":5}"#)
				.expect("List response should deserialize.");

		assert_eq!(response.total, 7);
		assert_eq!(response.page, 2);
		assert_eq!(response.page_size, 5);
	}

	#[test]
	fn identifiers_accept_numbers_and_strings() {
		let users: UsersResponse = serde_json::from_value(serde_json::json!({
			"users": [
				{"id": 3, "name": "Ada", "type": "buyer"},
				{"id": "agent-1", "name": "Bo", "type": "agent"}
			]
		}))
		.expect("Users should deserialize.");

		assert_eq!(users.users[0].id, "3");
		assert_eq!(users.users[0].role, Role::Buyer);
		assert_eq!(users.users[1].id, "agent-1");
	}

	#[test]
	fn search_results_infer_entity_family() {
		let transport = serde_json::json!({
			"id": "t-1",
			"carrierId": "carrier-1",
			"purchaseId": "p-1",
			"pickupLocation": {"address": "1 Main", "city": "A", "state": "CA", "zipCode": "1"},
			"deliveryLocation": {"address": "2 Main", "city": "B", "state": "CA", "zipCode": "2"},
			"scheduleDate": "2025-01-02",
			"status": "in-transit",
			"createdAt": "2025-01-01",
			"updatedAt": "2025-01-01"
		});
		let hit: SearchResult =
			serde_json::from_value(transport).expect("Transport hit should deserialize.");

		assert!(matches!(
			hit,
			SearchResult::Transport(ref transport) if transport.status == TransportStatus::InTransit
		));
	}
}
