use serde::{Deserialize, Serialize};

/// Bill / payment category
///
/// Categories the client knows how to label; anything else the backend sends
/// deserializes to [`BillType::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BillType {
    Maintenance,
    AmenityBooking,
    Gym,
    Custom,
    #[serde(other)]
    Other,
}

impl BillType {
    /// Payment types offered for ad-hoc payments, in picker order
    pub fn all() -> &'static [BillType] {
        &[
            BillType::Maintenance,
            BillType::AmenityBooking,
            BillType::Gym,
            BillType::Custom,
        ]
    }

    /// Label shown in the payment type picker
    pub fn label(&self) -> &'static str {
        match self {
            BillType::Maintenance => "Society Maintenance",
            BillType::AmenityBooking => "Amenity Booking (Function Hall)",
            BillType::Gym => "Gym Membership",
            BillType::Custom => "Custom Amount",
            BillType::Other => "Other",
        }
    }

    /// Suggested amount in whole rupees; `0` means the resident enters it.
    pub fn default_amount_rupees(&self) -> u64 {
        match self {
            BillType::Maintenance => 1000,
            BillType::AmenityBooking => 5000,
            BillType::Gym => 2000,
            BillType::Custom | BillType::Other => 0,
        }
    }

    /// Wire name, as used in `create-order` bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            BillType::Maintenance => "maintenance",
            BillType::AmenityBooking => "amenity_booking",
            BillType::Gym => "gym",
            BillType::Custom => "custom",
            BillType::Other => "other",
        }
    }
}

/// A bill the resident still owes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingBill {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub bill_type: BillType,
    /// Amount in paise
    pub amount: u64,
    #[serde(default)]
    pub description: String,
    pub due_date: String,
}

/// `GET /payments/bills/pending`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingBillsResponse {
    pub bills: Vec<PendingBill>,
}

/// `POST /payments/create-order`
///
/// Bill payments send only `bill_id` and `amount`; ad-hoc payments describe
/// the charge themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_id: Option<String>,
    /// Amount in paise
    pub amount: u64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bill_type: Option<BillType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Order payload returned by `create-order`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderData {
    pub razorpay_order: RazorpayOrder,
}

/// Razorpay order reference (opaque to the client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RazorpayOrder {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Signed outcome returned by the Razorpay checkout, forwarded verbatim
/// to `POST /payments/verify-razorpay`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_bill_parses_mongo_id_and_unknown_type() {
        let body = r#"{"bills":[
            {"_id":"b1","type":"maintenance","amount":150000,"description":"June","dueDate":"2024-06-30"},
            {"_id":"b2","type":"parking","amount":50000,"description":"Car","dueDate":"2024-06-30"}
        ]}"#;
        let parsed: PendingBillsResponse = serde_json::from_str(body).expect("bills should parse in test");

        assert_eq!(parsed.bills.len(), 2);
        assert_eq!(parsed.bills[0].id, "b1");
        assert_eq!(parsed.bills[0].bill_type, BillType::Maintenance);
        assert_eq!(parsed.bills[1].bill_type, BillType::Other);
    }

    #[test]
    fn test_pending_bills_without_list_is_an_error() {
        let body = r#"{"success":false,"message":"Server busy"}"#;
        assert!(serde_json::from_str::<PendingBillsResponse>(body).is_err());

        let empty: PendingBillsResponse =
            serde_json::from_str(r#"{"bills":[]}"#).expect("empty list should parse in test");
        assert!(empty.bills.is_empty());
    }

    #[test]
    fn test_bill_order_request_omits_ad_hoc_fields() {
        let request = CreateOrderRequest {
            bill_id: Some("b1".to_string()),
            amount: 150000,
            ..Default::default()
        };

        let json = serde_json::to_value(&request).expect("request should serialize in test");
        assert_eq!(json, serde_json::json!({ "billId": "b1", "amount": 150000 }));
    }

    #[test]
    fn test_ad_hoc_order_request_serializes_type() {
        let request = CreateOrderRequest {
            amount: 200000,
            bill_type: Some(BillType::AmenityBooking),
            month: Some("06".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).expect("request should serialize in test");
        assert_eq!(json["type"], "amenity_booking");
        assert_eq!(json["month"], "06");
        assert!(json.get("billId").is_none());
    }

    #[test]
    fn test_default_amounts() {
        assert_eq!(BillType::Maintenance.default_amount_rupees(), 1000);
        assert_eq!(BillType::AmenityBooking.default_amount_rupees(), 5000);
        assert_eq!(BillType::Gym.default_amount_rupees(), 2000);
        assert_eq!(BillType::Custom.default_amount_rupees(), 0);
        assert_eq!(BillType::all().len(), 4);
    }
}
