//! Client for a Stripe-compatible payment intent API.
//!
//! Requests authenticate with the secret key as a bearer token and send form-encoded
//! bodies. Amounts are integer minor units.

use serde::{de::DeserializeOwned, Deserialize};

use crate::server::error::{payment::PaymentError, AppError};

/// Remote payment intent state.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    /// `requires_payment_method`, `requires_confirmation`, `processing`, `succeeded`,
    /// `canceled`, ...
    pub status: String,
    pub client_secret: Option<String>,
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Refund {
    pub id: String,
    pub status: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

#[derive(Clone)]
pub struct PaymentGateway {
    http_client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

impl PaymentGateway {
    /// Creates a gateway client.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_url` - Base URL, e.g. `https://api.stripe.com`
    /// - `secret_key` - Secret API key sent as the bearer token
    pub fn new(
        http_client: reqwest::Client,
        api_url: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        }
    }

    /// Creates a payment intent for an order.
    ///
    /// # Arguments
    /// - `amount` - Amount in minor units
    /// - `currency` - Lower-case ISO currency code
    /// - `order_number` - Stored as intent metadata for reconciliation
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)` - Created intent carrying its `client_secret`
    /// - `Err(AppError::PaymentErr)` - Transport failure or gateway rejection
    pub async fn create_intent(
        &self,
        amount: i64,
        currency: &str,
        order_number: &str,
    ) -> Result<PaymentIntent, AppError> {
        let response = self
            .http_client
            .post(format!("{}/v1/payment_intents", self.api_url))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("amount", amount.to_string()),
                ("currency", currency.to_string()),
                ("metadata[order_number]", order_number.to_string()),
                ("automatic_payment_methods[enabled]", "true".to_string()),
            ])
            .send()
            .await
            .map_err(PaymentError::from)?;

        Self::parse(response).await
    }

    pub async fn retrieve_intent(&self, intent_id: &str) -> Result<PaymentIntent, AppError> {
        let response = self
            .http_client
            .get(format!("{}/v1/payment_intents/{}", self.api_url, intent_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(PaymentError::from)?;

        Self::parse(response).await
    }

    /// Refunds the full captured amount of a payment intent.
    pub async fn refund(&self, intent_id: &str) -> Result<Refund, AppError> {
        let response = self
            .http_client
            .post(format!("{}/v1/refunds", self.api_url))
            .bearer_auth(&self.secret_key)
            .form(&[("payment_intent", intent_id)])
            .send()
            .await
            .map_err(PaymentError::from)?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await.map_err(PaymentError::from)?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error.message)
            .unwrap_or_else(|| status.to_string());

        tracing::warn!("Payment gateway returned {}: {}", status, message);

        Err(PaymentError::GatewayResponse {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn gateway(server: &MockServer) -> PaymentGateway {
        PaymentGateway::new(reqwest::Client::new(), server.uri(), "sk_test_123")
    }

    /// Tests creating a payment intent.
    ///
    /// Verifies the bearer token and form body reach the gateway and the intent is parsed.
    ///
    /// Expected: Ok(PaymentIntent) with the client secret
    #[tokio::test]
    async fn creates_intent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(header("authorization", "Bearer sk_test_123"))
            .and(body_string_contains("amount=4599"))
            .and(body_string_contains("currency=ghs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_1",
                "status": "requires_payment_method",
                "client_secret": "pi_1_secret_abc",
                "amount": 4599,
                "currency": "ghs"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let intent = gateway(&server)
            .create_intent(4599, "ghs", "ORD-0000ABCD")
            .await
            .unwrap();

        assert_eq!(intent.id, "pi_1");
        assert_eq!(intent.client_secret.as_deref(), Some("pi_1_secret_abc"));
        assert_eq!(intent.amount, 4599);
    }

    /// Tests retrieving an intent's status.
    ///
    /// Expected: Ok(PaymentIntent) with status `succeeded`
    #[tokio::test]
    async fn retrieves_intent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/payment_intents/pi_2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_2",
                "status": "succeeded",
                "client_secret": null,
                "amount": 1000,
                "currency": "ghs"
            })))
            .mount(&server)
            .await;

        let intent = gateway(&server).retrieve_intent("pi_2").await.unwrap();

        assert_eq!(intent.status, "succeeded");
    }

    /// Tests refunding an intent.
    ///
    /// Expected: Ok(Refund) parsed from the response
    #[tokio::test]
    async fn refunds_intent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/refunds"))
            .and(body_string_contains("payment_intent=pi_3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "re_1",
                "status": "succeeded"
            })))
            .mount(&server)
            .await;

        let refund = gateway(&server).refund("pi_3").await.unwrap();

        assert_eq!(refund.id, "re_1");
        assert_eq!(refund.status, "succeeded");
    }

    /// Tests that a gateway error response keeps its status and message.
    ///
    /// Expected: Err(PaymentError::GatewayResponse { status: 402, .. })
    #[tokio::test]
    async fn surfaces_gateway_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": { "message": "Your card was declined." }
            })))
            .mount(&server)
            .await;

        let result = gateway(&server).create_intent(100, "ghs", "ORD-1").await;

        match result {
            Err(AppError::PaymentErr(PaymentError::GatewayResponse { status, message })) => {
                assert_eq!(status, 402);
                assert_eq!(message, "Your card was declined.");
            }
            other => panic!("expected gateway error, got {other:?}"),
        }
    }
}
