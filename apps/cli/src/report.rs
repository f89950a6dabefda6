use fundest_estimator::EstimationResult;

/// Marketing fragments dropped from display names.
const NAME_NOISE: [&str; 3] = ["发起式", "联接", "人民币"];

const NAME_WIDTH: usize = 10;

pub fn short_name(name: &str) -> String {
    let mut name = name.to_string();
    for noise in NAME_NOISE {
        name = name.replace(noise, "");
    }
    name.chars().take(NAME_WIDTH).collect()
}

pub fn render_line(result: &EstimationResult) -> String {
    let mut line = format!(
        "{}  {}  {:+.2}%  [{}] {}",
        result.fund_code,
        short_name(&result.fund_name),
        result.change_percent,
        result.method.label(),
        result.detail
    );
    if let Some(profit) = result.profit {
        line.push_str(&format!("  profit {:+.2}", profit));
    }
    line
}

pub fn render(results: &[EstimationResult]) -> String {
    results
        .iter()
        .map(|result| render_line(result) + "\n")
        .collect()
}
