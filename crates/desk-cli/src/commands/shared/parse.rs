/// Parse a JSON command-line argument.
pub fn parse_json(raw: &str, field: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(|error| anyhow::anyhow!("invalid {field} JSON: {error}"))
}
