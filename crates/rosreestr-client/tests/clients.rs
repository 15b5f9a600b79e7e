//! Both clients against a local mock of the registry APIs.
//!
//! The clients are blocking, so they are created, used and dropped inside
//! `spawn_blocking`.

use std::sync::Arc;
use std::time::Duration;

use rosreestr_client::{
    CadastralClient, ClientConfig, ClientError, FeatureSearchOptions, RegistryClient,
};
use rosreestr_core::AddressInput;
use rosreestr_http::{ExecutorConfig, HttpExecutor, InMemoryRequestLogger, LogLevel};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

async fn mount_region_tables(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/online/macro_regions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 145000000000_u64, "name": "Москва"},
            {"id": 199000000000_u64, "name": "Еврейская А.обл."}
        ])))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/online/regions/145000000000/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 145296000000_u64, "name": "ЮЖНОЕ БУТОВО"},
            {"id": 145297000000_u64, "name": "СОСЕНСКОЕ"}
        ])))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/online/regions/199000000000/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 199401000000_u64, "name": "Биробиджан"}
        ])))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_objects_by_address_end_to_end() {
    let server = MockServer::start().await;
    mount_region_tables(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/online/address/fir_objects/"))
        .and(query_param("macroRegionId", "145000000000"))
        .and(query_param("regionId", "145296000000"))
        .and(query_param("street", "Красного маяка"))
        .and(query_param("house", "22"))
        .and(query_param("building", "2"))
        .and(query_param("apartment", "187"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"objectId": "177_385900460001", "objectCn": "77:05:0007007:4926"}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let base_url = format!("{}/api/online", server.uri());
    let objects = blocking(move || {
        let mut client = RegistryClient::new(ClientConfig::new(base_url)).unwrap();
        let address = AddressInput::builder("Красного маяка", "22")
            .macro_region_name("Москва")
            .region_name("ЮЖНОЕ БУТОВО")
            .house_building("2")
            .apartment("187")
            .build()
            .unwrap();

        // The second search reuses the downloaded lookup tables.
        client.get_objects_by_address(&address).unwrap();
        client.get_objects_by_address(&address).unwrap()
    })
    .await;

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0]["objectId"], "177_385900460001");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_search_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/online/address/fir_objects/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let base_url = format!("{}/api/online", server.uri());
    let objects = blocking(move || {
        let mut client = RegistryClient::new(ClientConfig::new(base_url)).unwrap();
        let address = AddressInput::builder("Ленина", "1")
            .macro_region_id("145000000000")
            .region_id("145296000000")
            .build()
            .unwrap();
        client.get_objects_by_address(&address).unwrap()
    })
    .await;

    assert!(objects.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/online/fir_object/77:5:7007:4926/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/api/online", server.uri());
    let err = blocking(move || {
        let client = RegistryClient::new(ClientConfig::new(base_url)).unwrap();
        client.get_object("77:05:0007007:4926").unwrap_err()
    })
    .await;

    assert!(matches!(
        err,
        ClientError::HttpStatus { status: 503, ref body } if body == "Service Unavailable"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let base_url = format!("{}/api/online", server.uri());
    let err = blocking(move || {
        let client = RegistryClient::new(
            ClientConfig::new(base_url).with_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        client.get_region_types("145296000000").unwrap_err()
    })
    .await;

    assert!(matches!(err, ClientError::Transport(ref source) if source.is_timeout()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clients_share_one_keep_alive_executor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/online/region_types/145296000000/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"webType": "set22", "typeDesc": "Село"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/features/1"))
        .and(query_param("text", "77:17:0:11471"))
        .and(query_param("limit", "11"))
        .and(query_param("tolerance", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/features/5"))
        .and(query_param("text", "55.7 37.6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let (opened, errors, types, parcel) = blocking(move || {
        let logger = Arc::new(InMemoryRequestLogger::new());
        let executor = Arc::new(
            HttpExecutor::new(ExecutorConfig::new().with_keep_alive(true))
                .unwrap()
                .with_logger(logger.clone()),
        );

        let registry = RegistryClient::with_executor(format!("{uri}/api/online"), executor.clone());
        let cadastral = CadastralClient::with_executor(format!("{uri}/api"), executor.clone());

        let types = registry.get_region_types("145296000000").unwrap();
        let parcel = cadastral
            .get_parcel_by_cadastral_id("77:17:0:11471", FeatureSearchOptions::default())
            .unwrap();
        cadastral
            .get_building_by_coordinates(55.7, 37.6, FeatureSearchOptions::default())
            .unwrap();

        (
            executor.sessions().opened(),
            logger.records_at(LogLevel::Error).len(),
            types,
            parcel,
        )
    })
    .await;

    assert_eq!(opened, 1);
    assert_eq!(errors, 0);
    assert_eq!(types[0]["typeDesc"], "Село");
    assert_eq!(parcel["total"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_region_is_not_found() {
    let server = MockServer::start().await;
    mount_region_tables(&server).await;

    let base_url = format!("{}/api/online", server.uri());
    let err = blocking(move || {
        let mut client = RegistryClient::new(ClientConfig::new(base_url)).unwrap();
        client.resolve_region_id("Химки", "Москва").unwrap_err()
    })
    .await;

    assert!(err.is_not_found());
    assert!(matches!(err, ClientError::RegionNotFound { .. }));
}
