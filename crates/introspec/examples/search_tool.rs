use introspec::{derive_schema, Reflect};

/// ---------------------------------------------------------------------------
/// Example – shared parameter blocks via `flatten`
///
/// A flattened field contributes its own properties to the parent object, so
/// cross-cutting blocks (pagination, auth scopes, …) can be declared once
/// and reused across tool parameter structs.
///
/// **Running the demo**
/// ```bash
/// cargo run -p introspec --example search_tool
/// ```
/// ---------------------------------------------------------------------------

#[derive(Reflect)]
struct Pagination {
    #[schema(name = "page,omitempty", default = "1")]
    pub page: u64,

    #[schema(name = "per_page,omitempty", default = "20")]
    pub per_page: u64,
}

#[derive(Reflect)]
struct SearchParams {
    #[schema(description = "Full-text query")]
    pub query: String,

    #[schema(name = "labels,omitempty", description = "Free-form key/value filters")]
    pub labels: std::collections::HashMap<String, String>,

    #[schema(flatten)]
    pub pagination: Pagination,
}

fn main() -> anyhow::Result<()> {
    let schema = derive_schema::<SearchParams>()?;
    println!("{}", serde_json::to_string_pretty(schema.as_ref())?);
    Ok(())
}
