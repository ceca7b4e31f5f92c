use std::error::Error;
use weatherboard::Dashboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let base_url =
        std::env::var("WAREHOUSE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let dashboard = Dashboard::connect().base_url(base_url).call();

    // Render once with every control at its default.
    let view = match dashboard.render().call().await {
        Ok(view) => view,
        Err(e) => {
            // Fetch failures halt the whole pass; there is no partial view.
            eprintln!("Failed to load data: {e}");
            return Ok(());
        }
    };

    println!("Hosts: {:?}", view.controls.host_options);
    println!(
        "Temperature span: {:.1} - {:.1}",
        view.controls.temperature_bounds.0, view.controls.temperature_bounds.1
    );
    match view.summary.avg_temperature {
        Some(avg) => println!("Avg Temperature: {avg:.1}°F"),
        None => println!("Avg Temperature: N/A"),
    }
    match view.summary.avg_humidity {
        Some(avg) => println!("Avg Humidity: {avg:.1}%"),
        None => println!("Avg Humidity: N/A"),
    }
    match view.summary.avg_pressure {
        Some(avg) => println!("Avg Pressure: {avg:.1}"),
        None => println!("Avg Pressure: N/A"),
    }
    println!("Records: {}", view.summary.record_count);
    println!("{} charts with data", view.charts.len());
    println!("{}", view.table.head(Some(10)));
    println!(
        "Export ready: {} ({} bytes)",
        view.export.filename,
        view.export.bytes.len()
    );

    Ok(())
}
