//! End-to-end pipeline demo
//!
//! Fetches (or falls back to bundled) sentiment scores, builds the
//! displacement field over an icosphere, then simulates a few seconds of
//! the frame loop: auto-rotation, a focus flight to the strongest country,
//! and the marker projections an overlay layer would consume.

use sentiglobe_core::SphereMesh;
use sentiglobe_data::{bundled_scores, fetch_scores, samples_from_scores};
use sentiglobe_field::{build_displacement_field, FieldParams};
use sentiglobe_scene::{SceneContext, Viewport};

const GLOBE_RADIUS: f32 = 5.0;
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scores = match std::env::args().nth(1) {
        Some(url) => match fetch_scores(&url) {
            Ok(scores) => scores,
            Err(err) => {
                // One report, no retry; continue with a neutral state
                log::error!("sentiment fetch failed: {err}");
                println!("Fetch failed ({err}), using bundled sample data");
                bundled_scores()
            }
        },
        None => bundled_scores(),
    };

    let samples = samples_from_scores(&scores, GLOBE_RADIUS);
    println!("Validated {} of {} scores", samples.len(), scores.len());

    let mesh = SphereMesh::icosphere(GLOBE_RADIUS, 4)?;
    let field = build_displacement_field(&samples, &mesh, &FieldParams::default());
    println!(
        "Built field over {} vertices, max |displacement| = {:.4}",
        field.len(),
        field.max_abs
    );

    let vertex_buffer = field.displaced_points(&mesh);
    println!(
        "Vertex attribute buffer: {} entries ({} bytes)",
        vertex_buffer.len(),
        std::mem::size_of_val(vertex_buffer.as_slice())
    );

    let mut ctx = SceneContext::new(Viewport::new(800.0, 600.0));
    ctx.set_samples(&samples);
    ctx.set_displacement_scale(1.5);

    // One second of auto-rotation
    for _ in 0..60 {
        ctx.advance(FRAME_DT);
    }
    println!("\nMarkers after 1s of rotation:");
    for marker in ctx.markers() {
        if marker.visible {
            println!(
                "  {} at ({:6.1}, {:6.1})",
                marker.code, marker.screen_x, marker.screen_y
            );
        } else {
            println!("  {} hidden", marker.code);
        }
    }

    // Fly to the country with the strongest score
    if let Some(strongest) = samples
        .iter()
        .max_by(|a, b| a.score.abs().total_cmp(&b.score.abs()))
    {
        println!("\nFocusing {}", strongest.code);
        ctx.focus_country(strongest.code);
        for _ in 0..90 {
            ctx.advance(FRAME_DT);
        }
        println!(
            "Camera now at distance {:.2} (halo visible: {})",
            ctx.camera.position.coords.norm(),
            ctx.halo().is_visible()
        );

        ctx.unfocus();
        for _ in 0..90 {
            ctx.advance(FRAME_DT);
        }
        println!(
            "Back home at distance {:.2}",
            ctx.camera.position.coords.norm()
        );
    }

    let uniforms = ctx.uniforms(&field);
    println!(
        "\nShader uniforms: max={:.4} scale={:.2} point_size={:.1}",
        uniforms.max_displacement, uniforms.displacement_scale, uniforms.point_size
    );

    Ok(())
}
