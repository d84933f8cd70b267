use std::sync::Arc;

use ethers::abi::{self, Token};
use ethers::providers::Provider;
use ethers::types::{Bytes, U256};
use tron_supply_checker::config::ClientConfig;
use tron_supply_checker::supply::{self, SupplyFormat};
use tron_supply_checker::{ContractHandle, SupplyError, TronAddress, TronClient};

const TOKEN: &str = "TMzB9rdKu2eQuZaDEgeeRQkCzHz59DQi4C";
const KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

fn uint_response(value: u64) -> Bytes {
    Bytes::from(abi::encode(&[Token::Uint(U256::from(value))]))
}

fn token() -> TronAddress {
    TOKEN.parse().unwrap()
}

#[tokio::test]
async fn stubbed_total_supply_is_printed_in_base_units() {
    let (provider, mock) = Provider::mocked();
    mock.push::<Bytes, _>(uint_response(123_456_789)).unwrap();
    let contract = ContractHandle::new(token(), Arc::new(provider));

    let mut out = Vec::new();
    let value = supply::check_total_supply(&contract, SupplyFormat::Raw, &mut out)
        .await
        .unwrap();

    assert_eq!(value, U256::from(123_456_789u64));
    assert_eq!(String::from_utf8(out).unwrap(), "Toplam Arz: 123456789\n");
}

#[tokio::test]
async fn failed_call_is_a_call_error_and_prints_nothing() {
    // no queued response: the node request itself fails
    let (provider, _mock) = Provider::mocked();
    let contract = ContractHandle::new(token(), Arc::new(provider));

    let mut out = Vec::new();
    let err = supply::check_total_supply(&contract, SupplyFormat::Raw, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, SupplyError::Call { method: "totalSupply", .. }));
    assert_eq!(err.exit_code(), 5);
    assert!(out.is_empty());
}

#[tokio::test]
async fn human_format_scales_by_contract_decimals() {
    // responses are served last-pushed first: decimals(), then totalSupply()
    let (provider, mock) = Provider::mocked();
    mock.push::<Bytes, _>(uint_response(2_500_000)).unwrap();
    mock.push::<Bytes, _>(uint_response(6)).unwrap();
    let contract = ContractHandle::new(token(), Arc::new(provider));

    let mut out = Vec::new();
    let value = supply::check_total_supply(&contract, SupplyFormat::Human, &mut out)
        .await
        .unwrap();

    assert_eq!(value, U256::from(2_500_000u64));
    assert_eq!(String::from_utf8(out).unwrap(), "Toplam Arz: 2.5\n");
}

#[tokio::test]
async fn failed_decimals_is_a_call_error_and_prints_nothing() {
    let (provider, _mock) = Provider::mocked();
    let contract = ContractHandle::new(token(), Arc::new(provider));

    let mut out = Vec::new();
    let err = supply::check_total_supply(&contract, SupplyFormat::Human, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, SupplyError::Call { method: "decimals", .. }));
    assert_eq!(err.exit_code(), 5);
    assert!(out.is_empty());
}

#[tokio::test]
async fn deployed_contract_resolves() {
    let (provider, mock) = Provider::mocked();
    mock.push::<Bytes, _>(Bytes::from(vec![0x60, 0x80, 0x60, 0x40, 0x52]))
        .unwrap();
    let client = TronClient::new(provider, "mock");
    assert_eq!(client.endpoint(), "mock");

    let contract = client.resolve_contract(token()).await.unwrap();
    assert_eq!(contract.address().to_string(), TOKEN);
}

#[tokio::test]
async fn address_without_code_is_a_resolution_error() {
    let (provider, mock) = Provider::mocked();
    mock.push::<Bytes, _>(Bytes::default()).unwrap();
    let client = TronClient::new(provider, "mock");

    let err = client.resolve_contract(token()).await.unwrap_err();
    match &err {
        SupplyError::Resolution { address, reason } => {
            assert_eq!(address, TOKEN);
            assert!(reason.contains("no contract code"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn rejected_lookup_is_a_resolution_error() {
    let (provider, _mock) = Provider::mocked();
    let client = TronClient::new(provider, "mock");

    let err = client.resolve_contract(token()).await.unwrap_err();
    assert!(matches!(err, SupplyError::Resolution { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_connection_error() {
    // nothing listens on port 1
    let config = ClientConfig::new("http://127.0.0.1:1/jsonrpc", KEY);

    let err = TronClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, SupplyError::Connection { .. }), "{err}");
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn malformed_credential_fails_before_any_request() {
    let config = ClientConfig::new("http://127.0.0.1:1/jsonrpc", "not-a-key");

    let err = TronClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, SupplyError::InvalidConfig(_)));
    assert!(!err.to_string().contains("not-a-key"));
}

#[tokio::test]
async fn non_http_endpoint_is_rejected() {
    let config = ClientConfig::new("wss://api.shasta.trongrid.io", KEY);

    let err = TronClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, SupplyError::InvalidConfig(_)));
}
