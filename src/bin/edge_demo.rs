use edge_bridge::config::{load_config, DemoConfig};
use edge_bridge::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use edge_bridge::image::GrayImageU8;
use edge_bridge::pipeline::{detect_edges_with_report, CannyParams};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: DemoConfig = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let width = gray.width();
    let height = gray.height();

    let params = CannyParams::new(config.edge.low_threshold, config.edge.high_threshold);
    let result = detect_edges_with_report(gray.data(), width, height, params);
    if result.report.degraded {
        return Err(format!(
            "edge detection degraded to passthrough for {}",
            config.input.display()
        ));
    }

    let edge_map = GrayImageU8::new(width, height, result.edges);
    save_grayscale_u8(&edge_map, &config.output.edge_image)?;
    write_json_file(&config.output.report_json, &result.report)?;

    println!(
        "{}x{}: {} edge pixels in {:.3} ms",
        width, height, result.report.edge_count, result.report.timing.total_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage: edge_demo <config.json>".to_string()
}
