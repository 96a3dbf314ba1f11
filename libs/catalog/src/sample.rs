//! Seed catalog data
//!
//! The ARTE MUSEUM sample event used to seed the gateway at startup and as
//! a shared fixture in tests.

use crate::event::{AddOn, Event, TicketType, Variant};
use crate::store::InMemoryCatalog;
use rust_decimal::Decimal;

fn money(s: &str) -> Decimal {
    Decimal::from_str_exact(s).expect("valid decimal literal")
}

fn variant(id: &str, name: &str, price_modifier: &str) -> Variant {
    Variant {
        id: id.to_string(),
        name: name.to_string(),
        price_modifier: money(price_modifier),
        available: true,
    }
}

/// The `arte-museum-ny` sample event.
pub fn arte_museum() -> Event {
    Event {
        id: "arte-museum-ny".to_string(),
        name: "ARTE MUSEUM: An Immersive Media Art Exhibition".to_string(),
        venue: "Arte Museum New York".to_string(),
        image_url: "https://images.unsplash.com/photo-1518998053901-5348d3961a04?w=800"
            .to_string(),
        ticket_types: vec![
            TicketType {
                id: "adult".to_string(),
                name: "Adult (13+)".to_string(),
                description: Some(
                    "Entry ticket for guests aged 13 and above. Includes access to \
                     ARTE MUSEUM and ARTE CAFE with one complimentary drink."
                        .to_string(),
                ),
                price: money("20.40"),
                min_quantity: 0,
                max_quantity: 10,
            },
            TicketType {
                id: "child".to_string(),
                name: "Child (3-12)".to_string(),
                description: Some(
                    "Entry ticket for children aged 3-12. Children under 3 enter free. \
                     Includes access to ARTE MUSEUM and ARTE CAFE."
                        .to_string(),
                ),
                price: money("20.40"),
                min_quantity: 0,
                max_quantity: 10,
            },
        ],
        add_ons: vec![
            AddOn {
                id: "parking".to_string(),
                name: "Parking".to_string(),
                description: "Save time and stress by securing a parking spot at or near \
                              the event venue."
                    .to_string(),
                price: money("20.00"),
                image_url: "https://images.unsplash.com/photo-1545558014-8692077e9b5c?w=400"
                    .to_string(),
                requires_ticket_type: Some("adult".to_string()),
                min_required_tickets: 1,
                variants: None,
            },
            AddOn {
                id: "tshirt".to_string(),
                name: "Event T-Shirt".to_string(),
                description: "Take home a piece of the experience with our exclusive \
                              ARTE MUSEUM t-shirt. Premium cotton, available in multiple sizes."
                    .to_string(),
                price: money("35.00"),
                image_url: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400"
                    .to_string(),
                requires_ticket_type: None,
                min_required_tickets: 0,
                variants: Some(vec![
                    variant("xs", "XS", "0.00"),
                    variant("s", "S", "0.00"),
                    variant("m", "M", "0.00"),
                    variant("l", "L", "0.00"),
                    variant("xl", "XL", "0.00"),
                    variant("xxl", "XXL", "5.00"),
                ]),
            },
            AddOn {
                id: "photobook".to_string(),
                name: "Photo Book".to_string(),
                description: "A beautiful hardcover photo book featuring the best artworks \
                              from the exhibition. Choose your preferred edition."
                    .to_string(),
                price: money("45.00"),
                image_url: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400"
                    .to_string(),
                requires_ticket_type: None,
                min_required_tickets: 0,
                variants: Some(vec![
                    variant("standard", "Standard Edition", "0.00"),
                    variant("deluxe", "Deluxe Edition", "25.00"),
                    variant("collectors", "Collector's Edition", "55.00"),
                ]),
            },
        ],
    }
}

/// Catalog containing the sample event.
pub fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new([arte_museum()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_event_shape() {
        let event = arte_museum();
        assert_eq!(event.id, "arte-museum-ny");
        assert_eq!(event.ticket_types.len(), 2);
        assert_eq!(event.add_ons.len(), 3);

        let parking = event.add_on("parking").unwrap();
        assert_eq!(parking.requires_ticket_type.as_deref(), Some("adult"));
        assert_eq!(parking.min_required_tickets, 1);
        assert!(!parking.requires_variant());

        let tshirt = event.add_on("tshirt").unwrap();
        assert!(tshirt.requires_variant());
        assert_eq!(tshirt.variant("xxl").unwrap().price_modifier, money("5.00"));
    }

    #[test]
    fn test_sample_ids_unique() {
        let event = arte_museum();

        let mut ticket_ids: Vec<_> = event.ticket_types.iter().map(|t| &t.id).collect();
        ticket_ids.sort();
        ticket_ids.dedup();
        assert_eq!(ticket_ids.len(), event.ticket_types.len());

        let mut addon_ids: Vec<_> = event.add_ons.iter().map(|a| &a.id).collect();
        addon_ids.sort();
        addon_ids.dedup();
        assert_eq!(addon_ids.len(), event.add_ons.len());

        for addon in &event.add_ons {
            if let Some(variants) = &addon.variants {
                let mut ids: Vec<_> = variants.iter().map(|v| &v.id).collect();
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), variants.len());
            }
        }
    }
}
