use serde::{Deserialize, Serialize};

/// One purchasable ticket tier as served by the events API.
///
/// The sales-window dates stay as raw strings so that one malformed date
/// cannot abort deserialization of the whole event payload; the eligibility
/// engine parses them and fails closed on garbage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTicket {
    pub id: String,
    #[serde(default)]
    pub order: i32,
    pub ticket_category: String,
    #[serde(default)]
    pub ticket_description: String,
    pub ticket_price: String,
    #[serde(default)]
    pub ticket_highlights: Vec<String>,
    #[serde(rename = "maxTicketsPerUser", default)]
    pub max_tickets_per_user: u32,
    #[serde(rename = "totalQuota", default)]
    pub total_quota: u32,
    pub status: String,
    #[serde(default)]
    pub currency: String,
    #[serde(rename = "salesStartDate", default)]
    pub sales_start_date: Option<String>,
    #[serde(rename = "salesEndDate", default)]
    pub sales_end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub id: String,
    pub event_name: String,
    #[serde(default)]
    pub event_logo: String,
    #[serde(default)]
    pub event_description: String,
    pub event_date: String,
    #[serde(default)]
    pub event_location: String,
    #[serde(default)]
    pub tickets: Vec<EventTicket>,
}

impl EventData {
    pub fn ticket(&self, id: &str) -> Option<&EventTicket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tiers in display order (the API does not guarantee sorted output).
    pub fn tickets_by_order(&self) -> Vec<&EventTicket> {
        let mut tiers: Vec<&EventTicket> = self.tickets.iter().collect();
        tiers.sort_by_key(|t| t.order);
        tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_payload_with_optional_fields_absent() {
        let payload = r#"{
            "id": "evt_1",
            "event_name": "Ba to the Road",
            "event_date": "2026-09-05T18:00:00Z",
            "tickets": [
                {
                    "id": "tier_ga",
                    "order": 2,
                    "ticket_category": "General Admission",
                    "ticket_price": "19.99",
                    "status": "active"
                },
                {
                    "id": "tier_vip",
                    "order": 1,
                    "ticket_category": "VIP",
                    "ticket_price": "89.00",
                    "maxTicketsPerUser": 2,
                    "status": "active",
                    "currency": "EUR",
                    "salesStartDate": "2026-08-01T00:00:00Z",
                    "salesEndDate": "2026-09-01T00:00:00Z"
                }
            ]
        }"#;

        let event: EventData = serde_json::from_str(payload).unwrap();
        assert_eq!(event.tickets.len(), 2);

        let ga = event.ticket("tier_ga").unwrap();
        assert_eq!(ga.max_tickets_per_user, 0);
        assert_eq!(ga.currency, "");
        assert!(ga.sales_start_date.is_none());

        let vip = event.ticket("tier_vip").unwrap();
        assert_eq!(vip.max_tickets_per_user, 2);
        assert_eq!(vip.sales_end_date.as_deref(), Some("2026-09-01T00:00:00Z"));
    }

    #[test]
    fn tickets_by_order_sorts_tiers() {
        let event = EventData {
            id: "evt_1".into(),
            event_name: "Test".into(),
            event_logo: String::new(),
            event_description: String::new(),
            event_date: "2026-09-05T18:00:00Z".into(),
            event_location: String::new(),
            tickets: vec![
                EventTicket {
                    id: "b".into(),
                    order: 2,
                    ticket_category: "GA".into(),
                    ticket_description: String::new(),
                    ticket_price: "10".into(),
                    ticket_highlights: vec![],
                    max_tickets_per_user: 0,
                    total_quota: 0,
                    status: "active".into(),
                    currency: String::new(),
                    sales_start_date: None,
                    sales_end_date: None,
                },
                EventTicket {
                    id: "a".into(),
                    order: 1,
                    ticket_category: "VIP".into(),
                    ticket_description: String::new(),
                    ticket_price: "20".into(),
                    ticket_highlights: vec![],
                    max_tickets_per_user: 0,
                    total_quota: 0,
                    status: "active".into(),
                    currency: String::new(),
                    sales_start_date: None,
                    sales_end_date: None,
                },
            ],
        };

        let ordered: Vec<&str> = event
            .tickets_by_order()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ordered, vec!["a", "b"]);
    }
}
