use clap::Parser;

/// Funds estimated when no code is given on the command line.
pub const DEFAULT_FUND_CODES: &str = "013403, 005827, 000834, 000217, 007911";

/// Separators accepted between fund codes inside a single argument.
const CODE_SEPARATORS: [char; 2] = [',', '，'];

#[derive(Parser, Debug)]
#[command(name = "fundest", author, version, about = "Intraday estimates for mutual funds")]
pub struct Cli {
    /// Fund codes; one argument may hold several separated by `,` or `，`
    pub codes: Vec<String>,

    /// Principal held in a fund, used to compute today's profit (repeatable)
    #[arg(long = "amount", value_name = "CODE=AMOUNT", value_parser = parse_amount)]
    pub amounts: Vec<(String, f64)>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Estimate all funds concurrently
    #[arg(long)]
    pub parallel: bool,
}

impl Cli {
    /// Fund codes in command-line order, falling back to the default list.
    pub fn fund_codes(&self) -> Vec<String> {
        let codes: Vec<String> = self.codes.iter().flat_map(|arg| split_codes(arg)).collect();
        if codes.is_empty() {
            split_codes(DEFAULT_FUND_CODES)
        } else {
            codes
        }
    }
}

pub fn split_codes(raw: &str) -> Vec<String> {
    raw.split(CODE_SEPARATORS.as_slice())
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `CODE=AMOUNT`. An amount that is not a number counts as 0.0.
fn parse_amount(raw: &str) -> Result<(String, f64), String> {
    let (code, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=AMOUNT, got `{}`", raw))?;
    let code = code.trim();
    if code.is_empty() {
        return Err(format!("missing fund code in `{}`", raw));
    }
    let amount = amount.trim().parse::<f64>().unwrap_or(0.0);
    Ok((code.to_string(), amount))
}
