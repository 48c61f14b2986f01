use clap::Parser;
use ellipsoid_mesh::{EllipsoidConfig, EllipsoidMeshErrors, Mesh, Vertex};
use glam::{Vec3, vec3};
use std::path::PathBuf;

/// Animate an ellipsoid mesh and report how a directional light shades it.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// RON file with center, radii, stacks and slices
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of animation frames to run
    #[arg(short, long, default_value_t = 8)]
    frames: usize,
    /// Override the stack count after loading the config
    #[arg(long)]
    stacks: Option<usize>,
    /// Override the slice count after loading the config
    #[arg(long)]
    slices: Option<usize>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), EllipsoidMeshErrors> {
    let config = match &cli.config {
        Some(path) => EllipsoidConfig::load(path)?,
        None => EllipsoidConfig::default(),
    };
    let mut ellipsoid = config.build()?;

    if let Some(stacks) = cli.stacks {
        ellipsoid.set_stacks(stacks)?;
    }
    if let Some(slices) = cli.slices {
        ellipsoid.set_slices(slices)?;
    }

    log::info!(
        "{}x{} ellipsoid, {} bytes of vertex data",
        ellipsoid.stack_count(),
        ellipsoid.slice_count(),
        Vertex::as_bytes(&ellipsoid.mesh().to_vertices()).len()
    );

    let light = vec3(1.0, 1.0, 2.0).normalize();
    let base_radii = config.radii;
    for frame in 0..cli.frames {
        let t = frame as f32 / cli.frames.max(1) as f32 * std::f32::consts::TAU;
        ellipsoid.set_center(config.center + vec3(t.cos(), t.sin(), 0.0) * 0.5);
        ellipsoid.set_radii(base_radii * (1.0 + 0.25 * t.sin()));

        let (lit, brightness) = lambert(ellipsoid.mesh(), light);
        println!(
            "frame {frame}: center {:.3?} radii {:.3?} lit {lit}/{} mean {brightness:.4}",
            ellipsoid.center(),
            ellipsoid.radii(),
            ellipsoid.mesh().len()
        );
    }
    Ok(())
}

/// Counts cells facing the light and averages their diffuse term.
fn lambert(mesh: &Mesh, light: Vec3) -> (usize, f32) {
    let mut lit = 0;
    let mut total = 0.0;
    for normal in mesh.normals() {
        let diffuse = normal.dot(light);
        if diffuse > 0.0 {
            lit += 1;
            total += diffuse;
        }
    }
    (lit, total / mesh.len() as f32)
}
