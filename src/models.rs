use serde::Deserialize;

/// A single offering at a salon (e.g. "Balayage", category "Hair Styling").
///
/// Owned by exactly one salon; the backend embeds services in the salon
/// document, so there is no standalone service endpoint to mirror.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    /// Free-text category label, e.g. "Hair Styling & Color". Category
    /// filtering matches against this by substring.
    pub category: String,
    pub min_duration: u32,
    pub max_duration: u32,
    pub price: f64,
}

/// A salon record as served by the listing endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Salon {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slogan: Option<String>,
    pub gender: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Wrapper around the listing endpoint response.
///
/// `salons` is optional on purpose: a payload without the field is treated
/// as "nothing to update", not as a fetch failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalonsResponse {
    #[serde(default)]
    pub salons: Option<Vec<Salon>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salon_deserializes_backend_payload() {
        let json = r#"{
            "_id": "66b2e1",
            "name": "Velvet Room",
            "slogan": "Look sharp, feel sharp",
            "gender": "unisex",
            "address": "12 Rose St",
            "city": "Lisbon",
            "services": [
                {
                    "_id": "s1",
                    "name": "Balayage",
                    "category": "Hair Styling & Color",
                    "minDuration": 60,
                    "maxDuration": 120,
                    "price": 85.0
                }
            ],
            "gallery": ["https://img.example/1.jpg"],
            "rating": 4.6
        }"#;

        let salon: Salon = serde_json::from_str(json).unwrap();
        assert_eq!(salon.id, "66b2e1");
        assert_eq!(salon.services.len(), 1);
        assert_eq!(salon.services[0].category, "Hair Styling & Color");
        assert_eq!(salon.services[0].min_duration, 60);
        assert_eq!(salon.gallery.as_deref(), Some(&["https://img.example/1.jpg".to_string()][..]));
        assert_eq!(salon.rating, Some(4.6));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let json = r#"{
            "_id": "66b2e2",
            "name": "Barber Due",
            "gender": "male",
            "address": "Main Sq 3",
            "city": "Porto",
            "services": []
        }"#;

        let salon: Salon = serde_json::from_str(json).unwrap();
        assert!(salon.slogan.is_none());
        assert!(salon.logo.is_none());
        assert!(salon.gallery.is_none());
        assert!(salon.rating.is_none());
        assert!(salon.services.is_empty());
    }

    #[test]
    fn test_response_without_salons_field_is_none() {
        let response: SalonsResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(response.salons.is_none());
    }

    #[test]
    fn test_response_preserves_salon_order() {
        let json = r#"{"salons":[
            {"_id":"a","name":"A","gender":"unisex","address":"x","city":"y","services":[]},
            {"_id":"b","name":"B","gender":"unisex","address":"x","city":"y","services":[]}
        ]}"#;
        let response: SalonsResponse = serde_json::from_str(json).unwrap();
        let salons = response.salons.unwrap();
        assert_eq!(salons[0].id, "a");
        assert_eq!(salons[1].id, "b");
    }
}
