use std::path::Path;

use wedge_stability::config::load_config;
use wedge_stability::{JointOrientation, WedgeAnalyzer, WedgeParams};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let (joints, friction_angle_deg, params, json_out) = if let Some(path) = args.get(1) {
        match load_config(Path::new(path)) {
            Ok(config) => (
                config.joints,
                config.friction_angle_deg,
                config.params.unwrap_or_default(),
                config.json_out,
            ),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        // Demo stub: three steep joints fanned around the compass
        (
            [
                JointOrientation::new(60.0, 90.0),
                JointOrientation::new(70.0, 180.0),
                JointOrientation::new(80.0, 270.0),
            ],
            30.0,
            WedgeParams::default(),
            None,
        )
    };

    let analyzer = WedgeAnalyzer::new(params);
    match analyzer.analyze(&joints, friction_angle_deg) {
        Ok(report) => {
            println!(
                "classification={:?} mode={:?} polygon_vertices={} latency_ms={:.3}",
                report.classification,
                report.mode,
                report.polygon.vertices.len(),
                report.latency_ms
            );
            if let Some(path) = json_out {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => {
                        if let Err(e) = std::fs::write(&path, json) {
                            eprintln!("Failed to write report {}: {e}", path.display());
                            std::process::exit(1);
                        }
                        println!("report written to {}", path.display());
                    }
                    Err(e) => {
                        eprintln!("Failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("analysis failed: {e}");
            std::process::exit(1);
        }
    }
}
