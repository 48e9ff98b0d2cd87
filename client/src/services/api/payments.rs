//! # Payment Endpoints
//!
//! Pending bills, Razorpay order creation and payment verification.

use shared::{
    CreateOrderData, CreateOrderRequest, PendingBill, PendingBillsResponse, RazorpayOrder,
    VerifyPaymentRequest,
};

use super::client::{read_confirmation, read_envelope, rejection_message, ApiClient};
use super::error::ApiError;

/// Fetch the resident's pending bills.
///
/// This endpoint returns `{ bills: [...] }` without the usual envelope. A body
/// with `success: false` or without `bills` is an error, never an empty list.
#[tracing::instrument(skip_all)]
pub async fn pending_bills(client: &ApiClient, token: &str) -> Result<Vec<PendingBill>, ApiError> {
    let start = std::time::Instant::now();

    let response = ApiClient::authorized(
        client.client.get(client.url("/payments/bills/pending")),
        token,
    )
    .send()
    .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Pending bills request rejected");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        });
    }

    let value: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if value.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
        tracing::warn!(status = status.as_u16(), "Pending bills request refused");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        });
    }
    let parsed: PendingBillsResponse =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;

    tracing::debug!(
        count = parsed.bills.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Pending bills fetched"
    );
    Ok(parsed.bills)
}

/// Create a Razorpay order for a bill or an ad-hoc payment.
#[tracing::instrument(skip(client, token, request), fields(amount = request.amount, bill_id = ?request.bill_id))]
pub async fn create_order(
    client: &ApiClient,
    token: &str,
    request: CreateOrderRequest,
) -> Result<RazorpayOrder, ApiError> {
    let response = ApiClient::authorized(
        client.client.post(client.url("/payments/create-order")),
        token,
    )
    .json(&request)
    .send()
    .await?;

    let data = read_envelope::<CreateOrderData>(response).await?;
    tracing::info!(order_id = %data.razorpay_order.id, "Payment order created");
    Ok(data.razorpay_order)
}

/// Forward the signed checkout result for server-side signature verification.
///
/// Succeeds only on an explicit `{ success: true }`.
#[tracing::instrument(skip(client, token, request), fields(order_id = %request.razorpay_order_id, payment_id = %request.razorpay_payment_id))]
pub async fn verify_payment(
    client: &ApiClient,
    token: &str,
    request: VerifyPaymentRequest,
) -> Result<(), ApiError> {
    let response = ApiClient::authorized(
        client.client.post(client.url("/payments/verify-razorpay")),
        token,
    )
    .json(&request)
    .send()
    .await?;

    read_confirmation(response).await
}
