//! Marketplace roles asserted by search tokens.

// self
use crate::_prelude::*;

/// Capability class a token asserts; determines which offers a principal may view or act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	/// Lists vehicles and manages their own offers.
	Seller,
	/// Purchases assigned offers.
	Buyer,
	/// Transports purchased vehicles.
	Carrier,
	/// Back-office staff with visibility over every offer.
	Agent,
}
impl Role {
	/// Every role, in the order the marketplace presents them.
	pub const ALL: [Role; 4] = [Role::Seller, Role::Buyer, Role::Carrier, Role::Agent];

	/// Returns the stable wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Role::Seller => "seller",
			Role::Buyer => "buyer",
			Role::Carrier => "carrier",
			Role::Agent => "agent",
		}
	}
}
impl Display for Role {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Role {
	type Err = InvalidInputError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::ALL
			.into_iter()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| InvalidInputError::UnknownRole { value: s.to_owned() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_parse_back_to_roles() {
		for role in Role::ALL {
			assert_eq!(Role::from_str(role.as_str()), Ok(role));
			assert_eq!(
				serde_json::to_string(&role).expect("Role should serialize."),
				format!("\"{role}\"")
			);
		}
	}

	#[test]
	fn unknown_labels_are_rejected() {
		assert_eq!(
			Role::from_str("Seller"),
			Err(InvalidInputError::UnknownRole { value: "Seller".into() })
		);
		assert!(Role::from_str("").is_err());
		assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
	}
}
