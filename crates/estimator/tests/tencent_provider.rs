use std::sync::Arc;
use std::time::Duration;

use fundest_estimator::{
    FailureKind, FundInfoProvider, Market, QuoteFetcher, QuoteProvider, QuoteSymbol,
    TencentProvider,
};
use mockito::Matcher;

fn gbk(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::GBK.encode(text);
    bytes.into_owned()
}

#[tokio::test]
async fn fetch_changes_parses_batch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex("s_sh600519".to_string()))
        .with_status(200)
        .with_body(gbk(
            "v_s_sh600519=\"1~贵州茅台~600519~1700.00~-10.00~-0.58~12345~67890~~21345.67\";\n\
             v_s_hk00700=\"100~腾讯控股~00700~380.00~4.00~--~0\";\n\
             v_s_sz000001=\"51~平安银行~000001\";\n",
        ))
        .create_async()
        .await;

    let provider = TencentProvider::with_base_url(server.url());
    let symbols = vec![
        QuoteSymbol::new(Market::Shanghai, "600519"),
        QuoteSymbol::new(Market::HongKong, "00700"),
        QuoteSymbol::new(Market::Shenzhen, "000001"),
    ];

    let quotes = provider.fetch_changes(&symbols).await.unwrap();

    mock.assert_async().await;
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].symbol, symbols[0]);
    assert_eq!(quotes[0].percent_change, -0.58);
}

#[tokio::test]
async fn fetch_fund_name_decodes_gbk() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex("jj005827".to_string()))
        .with_status(200)
        .with_body(gbk("v_jj005827=\"005827~易方达蓝筹精选混合~1.8234~2025-01-10\";"))
        .create_async()
        .await;

    let provider = TencentProvider::with_base_url(server.url());
    let name = provider.fetch_fund_name("005827").await.unwrap();

    assert_eq!(name, "易方达蓝筹精选混合");
}

#[tokio::test]
async fn unknown_fund_is_parse_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("v_pv_none_match=\"1\";")
        .create_async()
        .await;

    let provider = TencentProvider::with_base_url(server.url());
    let err = provider.fetch_fund_name("999999").await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::ParseFailure);
}

#[tokio::test]
async fn server_error_is_network_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let provider = TencentProvider::with_base_url(server.url());
    let err = provider
        .fetch_changes(&[QuoteSymbol::new(Market::Us, "AAPL")])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::NetworkFailure);
}

#[tokio::test]
async fn fetcher_reads_fx_from_batch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex("s_usAAPL,s_usUSDCNH".to_string()))
        .with_status(200)
        .with_body(gbk(
            "v_s_usAAPL=\"200~苹果~AAPL.OQ~230.10~2.30~1.01~5000~10000~~35000\";\n\
             v_s_usUSDCNH=\"200~美元兑离岸人民币~USDCNH~7.2500~0.0100~0.14~0~0~~0\";\n",
        ))
        .create_async()
        .await;

    let fetcher = QuoteFetcher::new(
        Arc::new(TencentProvider::with_base_url(server.url())),
        Duration::from_secs(3),
    );
    let batch = fetcher.fetch(&["AAPL".to_string()]).await;

    mock.assert_async().await;
    assert_eq!(batch.change("AAPL"), Some(1.01));
    assert_eq!(batch.fx_change, 0.14);
}

#[tokio::test]
async fn fetcher_degrades_on_refused_connection() {
    let fetcher = QuoteFetcher::new(
        Arc::new(TencentProvider::with_base_url("http://127.0.0.1:1")),
        Duration::from_secs(3),
    );

    let batch = fetcher
        .fetch(&["600519".to_string(), "AAPL".to_string()])
        .await;

    assert!(batch.is_empty());
    assert_eq!(batch.fx_change, 0.0);
}
