//! PIX charge providers
//!
//! Two ways to mint a charge: a locally-built static BR Code (default) or a
//! dynamic charge from the Mercado Pago API. Selected once at startup from
//! configuration.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::payments::brcode;
use shared::models::{Order, Settings};

/// Merchant name embedded in static BR Codes
const MERCHANT_NAME: &str = "Disk Mensagem";

/// Provider errors
#[derive(Debug, Error)]
pub enum PixError {
    #[error("PIX provider error: {0}")]
    Provider(String),

    #[error("PIX provider response missing {0}")]
    MissingField(String),
}

/// A minted charge, ready to persist and present
#[derive(Debug, Clone)]
pub struct PixCharge {
    pub reference_code: String,
    pub brcode: String,
}

/// Per-order transaction id: `DM` + order id
pub fn reference_code(order_id: i64) -> String {
    format!("DM{order_id:06}")
}

/// Charge provider selected at startup
#[derive(Clone)]
pub enum PixProvider {
    /// Locally-built static EMVCo payload
    Static,
    /// Dynamic charge through the Mercado Pago payments API
    MercadoPago(MercadoPagoPix),
}

impl PixProvider {
    /// Pick the provider from configuration; falls back to static when no
    /// access token is configured.
    pub fn from_config(psp_provider: &str, mpago_access_token: &str) -> Self {
        if psp_provider.eq_ignore_ascii_case("mercadopago") && !mpago_access_token.is_empty() {
            PixProvider::MercadoPago(MercadoPagoPix::new(mpago_access_token.to_string()))
        } else {
            PixProvider::Static
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PixProvider::Static => "static",
            PixProvider::MercadoPago(_) => "mercadopago",
        }
    }

    /// Mint a charge for the order using the configured settings snapshot
    pub async fn create_charge(
        &self,
        order: &Order,
        settings: &Settings,
    ) -> Result<PixCharge, PixError> {
        let txid = reference_code(order.id);
        match self {
            PixProvider::Static => {
                // Static payloads carry at most 9 city chars, upper-cased
                let city_src = if settings.city_name.trim().is_empty() {
                    "CIDADE"
                } else {
                    settings.city_name.trim()
                };
                let city: String = city_src.to_uppercase().chars().take(9).collect();
                let payload = brcode::build_brcode(
                    &settings.pix_key,
                    MERCHANT_NAME,
                    &city,
                    order.amount_cents,
                    &txid,
                );
                Ok(PixCharge {
                    reference_code: txid,
                    brcode: payload,
                })
            }
            PixProvider::MercadoPago(mp) => {
                let copy_paste = mp.create_charge(order).await?;
                Ok(PixCharge {
                    reference_code: txid,
                    brcode: copy_paste,
                })
            }
        }
    }
}

/// Mercado Pago PIX client
#[derive(Clone)]
pub struct MercadoPagoPix {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MpPaymentResponse {
    point_of_interaction: Option<MpPointOfInteraction>,
}

#[derive(Debug, Deserialize)]
struct MpPointOfInteraction {
    transaction_data: Option<MpTransactionData>,
}

#[derive(Debug, Deserialize)]
struct MpTransactionData {
    /// Copy-paste BR Code text
    qr_code: Option<String>,
}

impl MercadoPagoPix {
    pub fn new(access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
            base_url: "https://api.mercadopago.com".to_string(),
        }
    }

    /// Request a dynamic PIX charge, returning the copy-paste code
    pub async fn create_charge(&self, order: &Order) -> Result<String, PixError> {
        let payload = json!({
            "transaction_amount": order.amount_cents as f64 / 100.0,
            "description": format!("Pedido #{}", order.id),
            "payment_method_id": "pix",
            "external_reference": format!("order-{}", order.id),
        });

        let response = self
            .client
            .post(format!("{}/v1/payments", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PixError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PixError::Provider(format!(
                "Mercado Pago returned {}",
                response.status()
            )));
        }

        let body: MpPaymentResponse = response
            .json()
            .await
            .map_err(|e| PixError::Provider(e.to_string()))?;

        body.point_of_interaction
            .and_then(|p| p.transaction_data)
            .and_then(|t| t.qr_code)
            .ok_or_else(|| PixError::MissingField("point_of_interaction.transaction_data.qr_code".into()))
    }
}
