mod common;

use common::get_connector;
use grafico::{
    ChartHandle, ChartRenderer, ChartSeriesConfig, DateRangeSelection, Grafico, GraficoError,
};

/// Minimal renderer that "draws" a chart as text on stdout.
struct TextRenderer;

struct TextChart {
    title: String,
}

impl ChartRenderer for TextRenderer {
    type Instance = TextChart;

    fn draw(&mut self, config: &ChartSeriesConfig) -> Result<TextChart, GraficoError> {
        println!(
            "drawing chart: {} periods, axis {} .. {}",
            config.labels.len(),
            config.axis_bounds.min.to_display_string(),
            config.axis_bounds.max.to_display_string(),
        );
        for dataset in &config.datasets {
            let ticks: Vec<String> = dataset
                .values
                .iter()
                .map(|v| config.format_tick(*v).to_display_string())
                .collect();
            println!("  {:<26} {}", dataset.name, ticks.join("  "));
        }
        Ok(TextChart {
            title: format!("{} periods", config.labels.len()),
        })
    }

    fn destroy(&mut self, instance: TextChart) {
        println!("destroying chart ({})", instance.title);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let grafico = Grafico::builder().with_connector(get_connector()).build()?;
    let mut handle = ChartHandle::new(TextRenderer);

    // Full history first: axis bounds fall back to the outermost labels.
    println!("== IBM, full history ==");
    grafico.render_chart(&mut handle, "IBM").await?;

    // Then narrow the axis to a quarter range; the old chart is destroyed
    // before the new one is drawn.
    println!("\n== IBM, 2022-Q3 .. 2023-Q4 ==");
    let range = DateRangeSelection::parse("2022-Q3", "2023-Q4")?;
    let data = grafico.chart_data_with_range("IBM", &range).await?;
    handle.render(&data)?;

    // An unknown symbol yields no data and leaves the last chart alone.
    println!("\n== unknown symbol ==");
    let data = grafico.chart_data("EMPTY").await?;
    if data.is_no_data() {
        println!("no chart data; previous chart kept");
    }

    Ok(())
}
