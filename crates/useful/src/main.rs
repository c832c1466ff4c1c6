use std::time::Duration;

use useful::{Color, Field, Instant, TextExt, Toolkit, load_config, logging, schedule};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    logging::init(&config.logging.level)?;

    tracing::info!(config = ?config, "Configuration loaded");

    let toolkit = Toolkit::from_settings(&config)?;

    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let instant = if input.is_whitespace_only() {
        Instant::now()
    } else {
        toolkit
            .parse_date_time(&input)
            .or_else(|| toolkit.parse_date(&input))
            .ok_or_else(|| anyhow::anyhow!("expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS, got {input:?}"))?
    };

    let fields = toolkit.fields();
    println!("{instant} in {}", toolkit.calendar().timezone());
    for field in Field::ALL {
        println!("  {field:<12}{}", fields.get(instant, field));
    }
    println!("  {:<12}{}", "weekday", fields.weekday(instant));
    println!("  {:<12}{}", "week", fields.week_of_year(instant));
    println!("  {:<12}{}", "quarter", fields.quarter(instant));

    schedule::delay(Duration::from_millis(10), || {
        println!("random color: {}", Color::random());
    })
    .await?;

    Ok(())
}
