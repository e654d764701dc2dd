use std::path::Path;
use voxel_prep::config::{load_config, RuntimeConfig};
use voxel_prep::prelude::*;

fn run() -> Result<(), String> {
    // Optional JSON config as the first argument; defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => RuntimeConfig::default(),
    };

    // Demo stub: a small synthetic batch stands in for a parsed model output
    let batch = synthetic_batch();
    let volume = batch.get(config.object_index).ok_or_else(|| {
        format!(
            "object index {} out of range, batch holds {} volumes",
            config.object_index,
            batch.len()
        )
    })?;

    let prep = VolumePrep::new(config.prep_params);
    let report = prep
        .process(volume)
        .map_err(|e| format!("prep failed: {e}"))?;
    let blocks = block_layout(&report.volume, &config.block_options);
    println!(
        "object={} kept={} blocks={} centroid=({:.2}, {:.2}, {:.2}) latency_ms={:.3}",
        config.object_index,
        report.diagnostics.kept_voxels,
        blocks.len(),
        report.centroid.x,
        report.centroid.y,
        report.centroid.z,
        report.diagnostics.total_latency_ms
    );

    if let Some(path) = &config.output.json_out {
        let summary = serde_json::json!({
            "diagnostics": &report.diagnostics,
            "centroid": &report.centroid,
            "camera": &report.camera,
        });
        let contents = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        std::fs::write(path, contents)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }
    Ok(())
}

/// Two 32-cube objects: a solid blob with stray speckle, and a hollow shell.
fn synthetic_batch() -> VolumeBatch {
    let mut first = VolumeF32::new(32, 32, 32);
    for x in 10..16 {
        for y in 10..16 {
            for z in 10..16 {
                first.set(x, y, z, 0.9);
            }
        }
    }
    // stray speckle the component filter should drop
    first.set(30, 30, 30, 0.7);

    let mut second = VolumeF32::new(32, 32, 32);
    for x in 8..24 {
        for y in 8..24 {
            for z in 8..24 {
                let edge = x == 8 || x == 23 || y == 8 || y == 23 || z == 8 || z == 23;
                if edge {
                    second.set(x, y, z, 0.6);
                }
            }
        }
    }

    VolumeBatch::from_volumes(vec![first, second])
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
