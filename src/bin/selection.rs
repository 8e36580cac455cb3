use std::ops::Range;

use clap::Parser;
use glam::*;

use viewer_selection as vs;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "\
    Apply one selection gesture to a generated point cloud and print the selected count.\n\
    \n\
    The point cloud is a grid spanning 0 to 100 on x and y at z = 0. \
    With the default identity camera, device coordinates equal data coordinates. \
    Use --perspective to look at the grid through a perspective camera instead, \
    device coordinates are then normalized device coordinates.\
    "
)]
struct Args {
    /// The gesture type: lasso, circle or rectangle.
    #[arg(short, long, default_value_t = vs::SelectionMode::Rectangle)]
    gesture: vs::SelectionMode,

    /// The device positions as "x,y;x,y;...".
    ///
    /// Circle and rectangle take the begin and end position, lasso takes the vertices.
    #[arg(short, long)]
    points: String,

    /// The number of grid points along each axis.
    #[arg(long, default_value_t = 11)]
    grid: usize,

    /// Use a perspective camera looking at the grid.
    #[arg(long)]
    perspective: bool,
}

/// A rendering surface with a fixed camera.
#[derive(Debug)]
struct StaticSurface {
    transform: vs::CameraTransform,
}

impl vs::RenderSurface for StaticSurface {
    fn matrix_world(&self) -> Option<[f32; 16]> {
        Some(self.transform.world.to_cols_array())
    }

    fn matrix_projection(&self) -> Option<[f32; 16]> {
        Some(self.transform.projection.to_cols_array())
    }

    fn set_bounds(&mut self, axis: vs::Axis, bounds: Range<f32>) {
        log::debug!("Bounds of {} set to {bounds:?}", axis.as_str());
    }

    fn set_axes_visible(&mut self, visible: bool) {
        log::debug!("Axes visible: {visible}");
    }

    fn set_selector(&mut self, mode: vs::SelectionMode) {
        log::debug!("Selector set to {mode}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let points = parse_points(&args.points)?;
    let event = match args.gesture {
        vs::SelectionMode::Lasso => vs::SelectionEvent::lasso(points),
        mode => match points.as_slice() {
            [begin, end] => vs::SelectionEvent::new(
                mode.as_str(),
                vs::DevicePayload::Span {
                    begin: *begin,
                    end: *end,
                },
            ),
            _ => return Err(format!("{mode} takes exactly 2 points").into()),
        },
    };

    let transform = match args.perspective {
        true => {
            let mut camera = vs::Camera::new(0.1..1000.0, std::f32::consts::FRAC_PI_4);
            camera.pos = vec3(50.0, 50.0, -150.0);
            camera.transform(uvec2(1, 1))
        }
        false => vs::CameraTransform::IDENTITY,
    };

    let step = 100.0 / (args.grid.max(2) - 1) as f32;
    let grid = (0..args.grid)
        .flat_map(|i| (0..args.grid).map(move |j| vec3(i as f32 * step, j as f32 * step, 0.0)))
        .collect::<Vec<_>>();
    let dataset = vs::Dataset::from_points("grid", &grid);

    let mut session = vs::Session::default();
    let mut viewer = vs::Viewer::new(vs::ViewerKind::Scatter, StaticSurface { transform });
    viewer.set_mode(args.gesture);
    viewer.add_data(&dataset)?;
    session.data_collection.append(dataset);

    match viewer.on_selection(&mut session, &event)? {
        vs::SelectionOutcome::Applied(subset_state) => {
            let dataset = &session.data_collection.datasets()[0];
            let count = subset_state.count(dataset)?;
            println!("{count} of {} points selected", dataset.size());
        }
        outcome => println!("nothing selected: {outcome:?}"),
    }

    Ok(())
}

/// Parse "x,y;x,y;..." into positions.
fn parse_points(s: &str) -> Result<Vec<Vec2>, Box<dyn std::error::Error>> {
    s.split(';')
        .filter(|p| !p.trim().is_empty())
        .map(|p| -> Result<Vec2, Box<dyn std::error::Error>> {
            let (x, y) = p
                .split_once(',')
                .ok_or_else(|| format!("invalid point \"{p}\""))?;
            Ok(vec2(x.trim().parse()?, y.trim().parse()?))
        })
        .collect()
}
