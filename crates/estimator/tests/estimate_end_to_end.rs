use chrono::{Datelike, Local};
use fundest_estimator::{
    EastmoneyProvider, EstimationMethod, EstimatorConfig, FundEstimator, HoldingsProvider,
    ReportPeriod,
};
use mockito::{Matcher, Server, ServerGuard};

fn gbk(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::GBK.encode(text);
    bytes.into_owned()
}

fn holdings_body(label: &str, rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (code, name, weight))| {
            format!(
                "<tr><td>{}</td><td><a href='#'>{}</a></td><td class='tol'><a href='#'>{}</a></td>\
                 <td class='tor'>--</td><td class='tor'>--</td><td class='xglj'>变动详情</td>\
                 <td class='tor'>{}</td><td class='tor'>100.00</td><td class='tor'>2000.00</td></tr>",
                i + 1,
                code,
                name,
                weight
            )
        })
        .collect();
    format!(
        "var apidata={{ content:\"<div class='box'><div class='boxitem w790'><h4 class='t'>\
         <label class='left'><a href='#'>测试混合</a>&nbsp;&nbsp;{}股票投资明细</label></h4>\
         <table class='w782 comm tzxq'><thead><tr><th>序号</th><th>股票代码</th><th class='tol'>股票名称</th>\
         <th>最新价</th><th>涨跌幅</th><th class='xglj'>相关资讯</th><th>占净值<br />比例</th>\
         <th>持股数<br />（万股）</th><th>持仓市值<br />（万元）</th></tr></thead><tbody>{}</tbody></table>\
         </div></div>\",arryear:[2024,2023],curyear:2024}};",
        label, body
    )
}

const EMPTY_HOLDINGS: &str = "var apidata={ content:\"\",arryear:[],curyear:0};";

async fn mock_year(server: &mut ServerGuard, fund_code: &str, year: i32, body: String) {
    server
        .mock("GET", Matcher::Regex(r"^/FundArchivesDatas\.aspx".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "jjcc".into()),
            Matcher::UrlEncoded("code".into(), fund_code.into()),
            Matcher::UrlEncoded("year".into(), year.to_string()),
        ]))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;
}

fn config(quote_server: &ServerGuard, holdings_server: &ServerGuard) -> EstimatorConfig {
    EstimatorConfig {
        quote_base_url: quote_server.url(),
        holdings_base_url: holdings_server.url(),
        ..EstimatorConfig::default()
    }
}

#[tokio::test]
async fn eastmoney_parses_latest_quarters() {
    let mut server = Server::new_async().await;
    mock_year(
        &mut server,
        "005827",
        2024,
        holdings_body("2024年4季度", &[("600519", "贵州茅台", "9.87%"), ("00700", "腾讯控股", "6.50%")]),
    )
    .await;

    let provider = EastmoneyProvider::with_base_url(server.url());
    let rows = provider.fetch_holdings("005827", 2024).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period, ReportPeriod::new(2024, 4));
    assert_eq!(rows[0].stock_code, "600519");
    assert_eq!(rows[0].stock_name, "贵州茅台");
    assert!((rows[1].weight - 0.065).abs() < 1e-12);
}

#[tokio::test]
async fn holdings_look_through_with_prior_year_fallback() {
    let year = Local::now().year();

    let mut quotes = Server::new_async().await;
    quotes
        .mock("GET", Matcher::Regex("jj005827".to_string()))
        .with_status(200)
        .with_body(gbk("v_jj005827=\"005827~易方达蓝筹精选混合~1.8234\";"))
        .create_async()
        .await;
    quotes
        .mock("GET", Matcher::Regex("s_sh600519".to_string()))
        .with_status(200)
        .with_body(gbk(
            "v_s_sh600519=\"1~贵州茅台~600519~1700.00~34.00~2.00~1~1~~1\";\n\
             v_s_hk00700=\"100~腾讯控股~00700~380.00~-3.80~-1.00~1~1~~1\";\n",
        ))
        .create_async()
        .await;

    let mut holdings = Server::new_async().await;
    mock_year(&mut holdings, "005827", year, EMPTY_HOLDINGS.to_string()).await;
    mock_year(
        &mut holdings,
        "005827",
        year - 1,
        holdings_body(
            &format!("{}年4季度", year - 1),
            &[("600519", "贵州茅台", "30.00%"), ("00700", "腾讯控股", "10.00%"), ("BRK.B", "伯克希尔", "5.00%")],
        ),
    )
    .await;

    let estimator = FundEstimator::new(config(&quotes, &holdings));
    let result = estimator.estimate("005827", Some(20000.0)).await;

    assert_eq!(result.fund_name, "易方达蓝筹精选混合");
    assert_eq!(result.method, EstimationMethod::HoldingsLookThrough { holdings: 3 });
    // (0.3 * 2.0 + 0.1 * -1.0) / 0.4
    assert!((result.change_percent - 1.25).abs() < 1e-9);
    assert!((result.profit.unwrap() - 250.0).abs() < 1e-6);
}

#[tokio::test]
async fn proxy_fund_queries_proxy_only() {
    let mut quotes = Server::new_async().await;
    quotes
        .mock("GET", Matcher::Regex("jj000217".to_string()))
        .with_status(200)
        .with_body(gbk("v_jj000217=\"000217~华安黄金易ETF联接C~1.9\";"))
        .create_async()
        .await;
    let proxy_mock = quotes
        .mock("GET", Matcher::Regex("s_sh518880".to_string()))
        .with_status(200)
        .with_body(gbk("v_s_sh518880=\"1~黄金ETF~518880~5.60~0.05~0.90~1~1~~1\";"))
        .create_async()
        .await;

    let mut holdings = Server::new_async().await;
    let holdings_mock = holdings
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let estimator = FundEstimator::new(config(&quotes, &holdings));
    let result = estimator.estimate("000217", None).await;

    proxy_mock.assert_async().await;
    holdings_mock.assert_async().await;
    assert_eq!(result.change_percent, 0.9);
    assert_eq!(result.detail, "tracking 黄金(518880)");
    assert_eq!(result.profit, None);
}

#[tokio::test]
async fn unreachable_services_yield_unknown() {
    let config = EstimatorConfig {
        quote_base_url: "http://127.0.0.1:1".to_string(),
        holdings_base_url: "http://127.0.0.1:1".to_string(),
        ..EstimatorConfig::default()
    };
    let estimator = FundEstimator::new(config);

    let result = estimator.estimate("013403", Some(1000.0)).await;

    assert_eq!(result.fund_name, "基金013403");
    assert_eq!(result.method, EstimationMethod::Unknown);
    assert_eq!(result.change_percent, 0.0);
    assert_eq!(result.detail, "no data");
    assert_eq!(result.profit, Some(0.0));
}
