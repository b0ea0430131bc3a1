#![allow(dead_code)]

use pxpay_gateway::application::gateway::PxPayGateway;
use pxpay_gateway::config::GatewayConfig;
use pxpay_gateway::domain::intent::PaymentIntent;
use pxpay_gateway::infrastructure::in_memory::InMemoryTransport;
use std::path::Path;

pub const HOSTED_PAGE_URL: &str = "https://sec.paymentexpress.com/pxpay/pxpay.aspx?userid=Developer&request=v5H7JrBTzH-4Whs__1iQnz4RGSb9qxRKNR4kIuDP8kIkQzIDiIob9GTIjw_9q_AdRiR47ViWGVx40uRMu52yz2mijT39YtGeO7cZWrL5rfnx0Mc4DltIHRnIUxy1EO1srkNpxaU8fT8_1xMMRmLa-8Fd9bT8Oq0BaWMxMquYa1hDNwvoGs1SJQOAJvyyKACvvwsbMCC2qJVyN0rlvwUoMtx6gGhvmk7ucEsPc_Cyr5kNl3qURnrLKxINnS0trdpU4kXPKOlmT6VacjzT1zuj_DnrsWAPFSFq-hGsow6GpKKciQ0V0aFbAqECN8rl_c-aZWFFy0gkfjnUM4qp6foS0KMopJlPzGAgMjV6qZ0WfleOT64c3E-FRLMP5V_-mILs8a";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("fixture should exist")
}

pub fn intent() -> PaymentIntent {
    PaymentIntent::builder(1000, "https://www.example.com/return")
        .build()
        .expect("valid intent")
}

/// Gateway backed by a transport that answers once with the named fixture.
pub fn gateway_with_fixture(name: &str) -> (PxPayGateway, InMemoryTransport) {
    let transport = InMemoryTransport::with_response(fixture(name));
    let gateway = PxPayGateway::new(
        GatewayConfig::new("Developer", "test-key"),
        Box::new(transport.clone()),
    );
    (gateway, transport)
}
