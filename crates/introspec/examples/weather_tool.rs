use introspec::{derive_schema, Reflect};

/// ---------------------------------------------------------------------------
/// Example – deriving an OpenAI-style function-calling parameter schema
///
/// Instead of hand-writing the `parameters` JSON blob of a tool declaration,
/// declare the parameter struct once and derive the schema from it.
///
/// **Running the demo**
/// ```bash
/// cargo run -p introspec --example weather_tool
/// ```
/// ---------------------------------------------------------------------------

#[derive(Reflect)]
struct WeatherParams {
    #[schema(description = "The city and state, e.g. San Francisco, CA")]
    pub location: String,

    #[schema(name = "unit,omitempty", values = "celsius,fahrenheit", default = "celsius")]
    pub unit: String,

    #[schema(name = "days,omitempty", description = "Forecast horizon", default = "3")]
    pub days: u8,
}

fn main() -> anyhow::Result<()> {
    let schema = derive_schema::<WeatherParams>()?;

    // The derived schema slots straight into a tool declaration.
    let tool = serde_json::json!({
        "name": "current_weather",
        "description": "Fetch the current weather report (temperature in °C and condition).",
        "parameters": schema.as_ref(),
    });

    println!("{}", serde_json::to_string_pretty(&tool)?);
    Ok(())
}
