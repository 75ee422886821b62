//! Guest domain entity.

use serde::{Deserialize, Serialize};

/// A person who may book apartments, identified externally by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Guest {
    /// Unique guest identifier
    pub id: i32,
    /// Last name
    #[serde(rename = "l_name")]
    #[cfg_attr(feature = "openapi", schema(example = "Ivanov"))]
    pub last_name: String,
    /// First name
    #[serde(rename = "f_name")]
    #[cfg_attr(feature = "openapi", schema(example = "Ivan"))]
    pub first_name: String,
    /// Phone number (unique)
    #[cfg_attr(feature = "openapi", schema(example = "+79991234567"))]
    pub phone_number: String,
}

/// Guest registration data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub last_name: String,
    pub first_name: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_short_name_fields() {
        let guest = Guest {
            id: 1,
            last_name: "Ivanov".to_string(),
            first_name: "Ivan".to_string(),
            phone_number: "+79991234567".to_string(),
        };

        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(json["l_name"], "Ivanov");
        assert_eq!(json["f_name"], "Ivan");
        assert_eq!(json["phone_number"], "+79991234567");
        assert!(json.get("last_name").is_none());
    }
}
